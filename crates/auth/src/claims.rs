use super::*;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(username: &str) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            sub: username.to_string(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn username(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_claims_not_expired() {
        assert!(!Claims::new("admin").expired());
    }

    #[test]
    fn past_exp_is_expired() {
        let mut claims = Claims::new("admin");
        claims.exp = claims.iat - 1;
        assert!(claims.expired());
    }

    #[test]
    fn horizon_is_one_hour() {
        let claims = Claims::new("admin");
        assert!(claims.exp - claims.iat == 3600);
    }
}
