use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub currency: String,
    pub amount: i64,
    pub customer_id: String,
    pub email: String,
    pub description: String,
    pub shipping: Address,
    pub billing: Address,
    pub metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub address: AddressDetails,
    pub phone: PhoneDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressDetails {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneDetails {
    pub number: String,
    pub country_code: String,
}

impl PaymentRequest {
    /// The fixed demo order sent for every checkout. Nothing from the caller
    /// is used; only the configured profile id varies.
    pub fn demo(profile_id: Option<String>) -> Self {
        let address = Address {
            address: AddressDetails {
                line1: "1467".to_string(),
                line2: "Harrison Street".to_string(),
                city: "San Francisco".to_string(),
                state: "California".to_string(),
                zip: "94122".to_string(),
                country: "US".to_string(),
                first_name: "Joseph".to_string(),
                last_name: "Doe".to_string(),
            },
            phone: PhoneDetails {
                number: "8056594427".to_string(),
                country_code: "+91".to_string(),
            },
        };

        Self {
            currency: "USD".to_string(),
            amount: 6500,
            customer_id: "demo_app_id1".to_string(),
            email: "hyperswitch_sdk_demo_id@gmail.com".to_string(),
            description: "Hello, this is a description".to_string(),
            shipping: address.clone(),
            billing: address,
            metadata: HashMap::from([
                ("udf1".to_string(), "value1".to_string()),
                ("new_customer".to_string(), "true".to_string()),
                ("login_date".to_string(), "2019-09-10T10:11:12Z".to_string()),
            ]),
            profile_id,
        }
    }
}
