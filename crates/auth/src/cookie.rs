use super::*;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::cookie::time::Duration;

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

fn production() -> bool {
    std::env::var("APP_ENV").map(|e| e == "production").unwrap_or(false)
}

/// Builds the HTTP-only session cookie carrying a freshly minted token.
pub fn issue(token: String) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(production())
        .max_age(Duration::seconds(Crypto::duration().as_secs() as i64))
        .finish()
}

/// Builds the removal cookie sent on logout. Clearing the cookie is the
/// whole of logout; the token itself is not revoked.
pub fn expire() -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_cookie_is_http_only() {
        let cookie = issue("abc".to_string());
        assert!(cookie.http_only() == Some(true));
        assert!(cookie.max_age() == Some(Duration::seconds(3600)));
        assert!(cookie.name() == TOKEN_COOKIE);
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = expire();
        assert!(cookie.max_age() == Some(Duration::ZERO));
        assert!(cookie.value().is_empty());
    }
}
