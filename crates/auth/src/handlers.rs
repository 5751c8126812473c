use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// POST /api/login — exchange the admin credential pair for a session
/// cookie. The failure message never reveals which field was wrong.
pub async fn login(
    admin: web::Data<Admin>,
    crypto: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    if !admin.verify(&req.username, &req.password) {
        log::warn!("failed login attempt for {:?}", req.username);
        return HttpResponse::Unauthorized().json(LoginResponse {
            success: false,
            message: "incorrect username or password".to_string(),
        });
    }
    let claims = Claims::new(&req.username);
    match crypto.encode(&claims) {
        Ok(token) => HttpResponse::Ok().cookie(issue(token)).json(LoginResponse {
            success: true,
            message: "logged in".to_string(),
        }),
        Err(e) => {
            log::error!("token minting failed: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "internal error" }))
        }
    }
}

/// POST /api/logout — clear the session cookie. Side effect only; an
/// already-issued token stays valid until its expiry.
pub async fn logout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(expire())
        .json(serde_json::json!({ "message": "logged out" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::test;

    async fn guarded(auth: Auth) -> impl Responder {
        HttpResponse::Ok().json(serde_json::json!({ "user": auth.username() }))
    }

    fn fixtures() -> (web::Data<Admin>, web::Data<Crypto>) {
        (
            web::Data::new(Admin::new("admin".to_string(), "correct".to_string())),
            web::Data::new(Crypto::new(b"test-secret")),
        )
    }

    #[actix_web::test]
    async fn login_then_guarded_then_logout() {
        let (admin, crypto) = fixtures();
        let app = test::init_service(
            App::new()
                .app_data(admin)
                .app_data(crypto)
                .route("/api/login", web::post().to(login))
                .route("/api/logout", web::post().to(logout))
                .route("/api/admin/members", web::get().to(guarded)),
        )
        .await;

        // no cookie: rejected
        let req = test::TestRequest::get().uri("/api/admin/members").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::UNAUTHORIZED);

        // login yields the cookie
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "username": "admin", "password": "correct" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("session cookie set")
            .into_owned();
        assert!(!cookie.value().is_empty());

        // cookie admits the guarded route
        let req = test::TestRequest::get()
            .uri("/api/admin/members")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::OK);

        // logout clears the cookie
        let req = test::TestRequest::post().uri("/api/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::OK);
        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == TOKEN_COOKIE)
            .expect("removal cookie set")
            .into_owned();
        assert!(cleared.value().is_empty());
    }

    #[actix_web::test]
    async fn bad_credentials_set_no_cookie() {
        let (admin, crypto) = fixtures();
        let app = test::init_service(
            App::new()
                .app_data(admin)
                .app_data(crypto)
                .route("/api/login", web::post().to(login)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "username": "admin", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::UNAUTHORIZED);
        assert!(resp.response().cookies().next().is_none());
    }

    #[actix_web::test]
    async fn tampered_cookie_rejected() {
        let (admin, crypto) = fixtures();
        let token = Crypto::new(b"other-secret")
            .encode(&Claims::new("admin"))
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(admin)
                .app_data(crypto)
                .route("/api/admin/members", web::get().to(guarded)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/admin/members")
            .cookie(Cookie::new(TOKEN_COOKIE, token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::UNAUTHORIZED);
    }
}
