//! Payment processor configuration.

use serde::{Deserialize, Serialize};

/// External payment processor settings.
///
/// Only the single create-payment-intent call is in scope; everything else
/// about the processor is opaque to this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Base URL of the processor API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Secret API key used as the bearer credential.
    #[serde(default)]
    pub secret_key: String,
    /// ISO currency code for payment intents.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Request timeout in seconds for processor calls.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            secret_key: String::new(),
            currency: default_currency(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.stripe.com/v1".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}

fn default_timeout() -> u64 {
    15
}
