use super::*;

/// Fixed session horizon; also the cookie max-age.
const SESSION_DURATION: std::time::Duration = std::time::Duration::from_secs(60 * 60);

pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set")
                .as_bytes(),
        )
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &jsonwebtoken::Validation::default())
            .map(|data| data.claims)
    }
    pub const fn duration() -> std::time::Duration {
        SESSION_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let crypto = Crypto::new(b"test-secret");
        let token = crypto.encode(&Claims::new("admin")).unwrap();
        let claims = crypto.decode(&token).unwrap();
        assert!(claims.username() == "admin");
    }

    #[test]
    fn tampered_signature_rejected() {
        let crypto = Crypto::new(b"test-secret");
        let token = crypto.encode(&Claims::new("admin")).unwrap();
        let mut forged = token[..token.rfind('.').unwrap() + 1].to_string();
        forged.push_str("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");
        assert!(crypto.decode(&forged).is_err());
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = Crypto::new(b"one").encode(&Claims::new("admin")).unwrap();
        assert!(Crypto::new(b"two").decode(&token).is_err());
    }

    #[test]
    fn expired_token_rejected() {
        let crypto = Crypto::new(b"test-secret");
        let mut claims = Claims::new("admin");
        // beyond the default validation leeway
        claims.exp = claims.iat - 120;
        claims.iat -= 3720;
        let token = crypto.encode(&claims).unwrap();
        assert!(crypto.decode(&token).is_err());
    }
}
