use actix_files::NamedFile;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::web;
use std::path::Path;
use std::path::PathBuf;

/// Root of the on-disk static assets. Named templates live under
/// `templates/` inside it.
pub struct SiteDir(PathBuf);

impl SiteDir {
    pub fn new(root: PathBuf) -> Self {
        Self(root)
    }
    pub fn from_env() -> Self {
        Self::new(PathBuf::from(
            std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        ))
    }
    pub fn root(&self) -> &Path {
        &self.0
    }
    pub fn template(&self, name: &str) -> PathBuf {
        self.0.join("templates").join(name)
    }
}

/// Serves one named template page.
pub async fn page(dir: web::Data<SiteDir>, name: &'static str) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(dir.template(name)).await?)
}

/// Catch-all: JSON body for API paths, the friendly 404 page otherwise.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    if req.path().starts_with("/api/") {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "unknown endpoint" }));
    }
    let path = req
        .app_data::<web::Data<SiteDir>>()
        .map(|dir| dir.template("404.html"));
    match path {
        Some(path) => match tokio::fs::read_to_string(path).await {
            Ok(html) => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html),
            Err(_) => HttpResponse::NotFound().body("page not found"),
        },
        None => HttpResponse::NotFound().body("page not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::App;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn unknown_api_path_yields_json() {
        let app =
            test::init_service(App::new().default_service(web::to(not_found))).await;
        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::NOT_FOUND);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert!(content_type.starts_with("application/json"));
    }

    #[actix_web::test]
    async fn unknown_page_path_yields_not_found() {
        let app =
            test::init_service(App::new().default_service(web::to(not_found))).await;
        let req = test::TestRequest::get().uri("/no-such-page").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status() == StatusCode::NOT_FOUND);
    }
}
