//! Payment processor client.
//!
//! A single call contract: create a payment intent and hand back the client
//! secret. Everything else about the processor is out of scope.

use serde::Deserialize;

use lifedrop_core::config::payment::PaymentConfig;
use lifedrop_core::error::AppError;

/// Minimal payment-intent response shape from the processor.
#[derive(Debug, Deserialize)]
struct PaymentIntentResponse {
    client_secret: String,
}

/// Client for the external payment processor.
#[derive(Debug, Clone)]
pub struct PaymentClient {
    /// Underlying HTTP client.
    http: reqwest::Client,
    /// Processor configuration.
    config: PaymentConfig,
}

impl PaymentClient {
    /// Creates a new payment client.
    pub fn new(config: PaymentConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Creates a payment intent for the given amount (smallest currency
    /// unit) and returns the client secret.
    pub async fn create_payment_intent(&self, amount_cents: i64) -> Result<String, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::validation("Amount must be positive"));
        }

        let url = format!("{}/payment_intents", self.config.api_base);
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", self.config.currency.clone()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(format!("Payment processor unreachable: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "Payment intent creation failed");
            return Err(AppError::external_service(format!(
                "Payment processor returned {status}"
            )));
        }

        let intent: PaymentIntentResponse = response.json().await.map_err(|e| {
            AppError::external_service(format!("Malformed payment processor response: {e}"))
        })?;

        Ok(intent.client_secret)
    }
}
