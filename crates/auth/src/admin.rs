/// The single configured administrator identity.
///
/// There is no user-management subsystem; both fields are read once at
/// startup and compared byte-for-byte against the supplied credentials.
pub struct Admin {
    username: String,
    password: String,
}

impl Admin {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("ADMIN_USER").expect("ADMIN_USER must be set"),
            std::env::var("ADMIN_PASS").expect("ADMIN_PASS must be set"),
        )
    }
    /// Both fields are always compared so the response time does not
    /// reveal which one was wrong.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user & pass
    }
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Admin {
        Admin::new("admin".to_string(), "correct horse".to_string())
    }

    #[test]
    fn accepts_exact_pair() {
        assert!(admin().verify("admin", "correct horse"));
    }

    #[test]
    fn rejects_wrong_username() {
        assert!(!admin().verify("root", "correct horse"));
    }

    #[test]
    fn rejects_wrong_password() {
        assert!(!admin().verify("admin", "wrong"));
    }

    #[test]
    fn rejects_prefix() {
        assert!(!admin().verify("admin", "correct"));
    }
}
