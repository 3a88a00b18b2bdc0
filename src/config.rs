use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // Payment gateway credentials
    pub secret_key: String,
    pub gateway_url: String,
    pub publishable_key: Option<String>,
    pub profile_id: Option<String>,

    // Front-end assets
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "4242".to_string())
                .parse()
                .context("Invalid PORT")?,

            secret_key: std::env::var("HYPERSWITCH_SECRET_KEY")
                .context("HYPERSWITCH_SECRET_KEY required")?,
            gateway_url: std::env::var("HYPERSWITCH_SERVER_URL")
                .context("HYPERSWITCH_SERVER_URL required")?,
            publishable_key: std::env::var("HYPERSWITCH_PUBLISHABLE_KEY").ok(),
            profile_id: std::env::var("PROFILE_ID").ok(),

            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.gateway_url.starts_with("http") {
            bail!("HYPERSWITCH_SERVER_URL must be HTTP(S) URL");
        }
        Ok(())
    }
}
