use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::web;
use std::future::Future;
use std::pin::Pin;

/// Extractor for administrative requests.
///
/// Pulls the token from the session cookie and verifies signature and
/// expiry. Verification is stateless; there is no revocation lookup.
/// Rejections carry a generic JSON body and never say which check failed
/// beyond missing vs. invalid.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

fn unauthorized(message: &'static str) -> actix_web::Error {
    let body = HttpResponse::Unauthorized().json(serde_json::json!({ "error": message }));
    InternalError::from_response(message, body).into()
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let crypto = req.app_data::<web::Data<Crypto>>().cloned();
        let cookie = req.cookie(TOKEN_COOKIE).map(|c| c.value().to_owned());
        Box::pin(async move {
            let token = cookie.ok_or_else(|| unauthorized("missing credential"))?;
            let crypto = crypto.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("token service not configured")
            })?;
            let claims = crypto
                .decode(&token)
                .map_err(|_| unauthorized("invalid or expired credential"))?;
            if claims.expired() {
                return Err(unauthorized("invalid or expired credential"));
            }
            Ok(Auth(claims))
        })
    }
}
