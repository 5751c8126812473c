/// Proxy to the external form-processing service. The browser never
/// talks to the provider directly; the body is forwarded verbatim.
pub struct FormRelay {
    http: reqwest::Client,
    url: String,
}

/// What became of a forwarded submission.
pub enum Forwarded {
    /// The provider accepted it.
    Accepted,
    /// The provider answered with an error status.
    Refused(u16),
}

impl FormRelay {
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }
    pub fn from_env() -> Self {
        Self::new(std::env::var("FORM_RELAY_URL").expect("FORM_RELAY_URL must be set"))
    }
    pub async fn forward(&self, submission: &serde_json::Value) -> anyhow::Result<Forwarded> {
        let response = self
            .http
            .post(&self.url)
            .header("Accept", "application/json")
            .json(submission)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(Forwarded::Accepted)
        } else {
            Ok(Forwarded::Refused(response.status().as_u16()))
        }
    }
}
