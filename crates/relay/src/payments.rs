use serde::Deserialize;

/// A donation submitted from the /don page.
#[derive(Debug, Deserialize)]
pub struct DonationRequest {
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub message: Option<String>,
}

fn default_currency() -> String {
    "XOF".to_string()
}

/// Client for the hosted payment provider. Creating a transaction yields
/// a redirect URL the browser is sent to; the outcome comes back later
/// through the webhook.
pub struct PaymentGateway {
    http: reqwest::Client,
    url: String,
    key: String,
}

impl PaymentGateway {
    pub fn new(url: String, key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
            key,
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("PAYMENT_API_URL").expect("PAYMENT_API_URL must be set"),
            std::env::var("PAYMENT_API_KEY").expect("PAYMENT_API_KEY must be set"),
        )
    }

    /// Creates a provider transaction and returns its payment URL.
    pub async fn create_transaction(&self, donation: &DonationRequest) -> anyhow::Result<String> {
        let body = transaction_body(donation);
        let response = self
            .http
            .post(format!("{}/transactions", self.url))
            .bearer_auth(&self.key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let payload: serde_json::Value = response.json().await?;
        payment_url(&payload)
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("provider response carried no payment_url"))
    }
}

/// Shapes the provider's create-transaction payload.
fn transaction_body(donation: &DonationRequest) -> serde_json::Value {
    serde_json::json!({
        "description": donation
            .message
            .as_deref()
            .unwrap_or("Don à l'église TPR"),
        "amount": donation.amount,
        "currency": { "iso": donation.currency },
        "customer": {
            "firstname": donation.firstname,
            "lastname": donation.lastname,
            "email": donation.email,
        },
    })
}

/// The provider nests the transaction under a versioned key.
fn payment_url(payload: &serde_json::Value) -> Option<&str> {
    payload
        .get("v1/transaction")
        .and_then(|t| t.get("payment_url"))
        .and_then(|u| u.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation() -> DonationRequest {
        DonationRequest {
            amount: 500,
            currency: "XOF".to_string(),
            firstname: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "jane@example.org".to_string(),
            message: None,
        }
    }

    #[test]
    fn body_carries_currency_iso() {
        let body = transaction_body(&donation());
        assert!(body["currency"]["iso"] == "XOF");
        assert!(body["customer"]["lastname"] == "Doe");
    }

    #[test]
    fn url_extracted_from_versioned_key() {
        let payload = serde_json::json!({
            "v1/transaction": { "id": 1, "payment_url": "https://pay.example/t/1" }
        });
        assert!(payment_url(&payload) == Some("https://pay.example/t/1"));
    }

    #[test]
    fn missing_url_is_none() {
        assert!(payment_url(&serde_json::json!({})).is_none());
    }

    #[test]
    fn currency_defaults_to_xof() {
        let donation: DonationRequest = serde_json::from_value(serde_json::json!({
            "amount": 1000,
            "firstname": "Jane",
            "lastname": "Doe",
            "email": "jane@example.org",
        }))
        .unwrap();
        assert!(donation.currency == "XOF");
    }
}
