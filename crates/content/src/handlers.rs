use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

fn internal() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "internal error" }))
}

pub async fn events(db: web::Data<Arc<Client>>) -> impl Responder {
    match ContentRepository::events(db.get_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("event listing failed: {}", e);
            internal()
        }
    }
}

pub async fn quiz_questions(db: web::Data<Arc<Client>>) -> impl Responder {
    match ContentRepository::quiz_questions(db.get_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("quiz question listing failed: {}", e);
            internal()
        }
    }
}

pub async fn brochures(db: web::Data<Arc<Client>>) -> impl Responder {
    match ContentRepository::brochures(db.get_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("brochure listing failed: {}", e);
            internal()
        }
    }
}

pub async fn songs(db: web::Data<Arc<Client>>) -> impl Responder {
    match ContentRepository::songs(db.get_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("song listing failed: {}", e);
            internal()
        }
    }
}

pub async fn books(db: web::Data<Arc<Client>>) -> impl Responder {
    match ContentRepository::books(db.get_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("book listing failed: {}", e);
            internal()
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct VideoParams {
    pub search: Option<String>,
    pub page: Option<i64>,
}

/// GET /api/youtube-videos — one page of the synced catalog, newest
/// first, optionally filtered by title substring.
pub async fn videos(db: web::Data<Arc<Client>>, params: web::Query<VideoParams>) -> impl Responder {
    let page = params.page.unwrap_or(1).max(1);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty());
    match db.videos(search, page).await {
        Ok((items, total)) => HttpResponse::Ok().json(serde_json::json!({
            "items": items,
            "page": page,
            "per_page": VIDEO_PAGE_SIZE,
            "total": total,
        })),
        Err(e) => {
            log::error!("video listing failed: {}", e);
            internal()
        }
    }
}

/// GET /api/daily-quote — today's entry of the rotation.
pub async fn daily_quote(db: web::Data<Arc<Client>>) -> impl Responder {
    let count = match db.quote_count().await {
        Ok(count) => count,
        Err(e) => {
            log::error!("quote count failed: {}", e);
            return internal();
        }
    };
    if count == 0 {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "no quotes configured" }));
    }
    let index = daily_index(std::time::SystemTime::now(), count as u64) as i64;
    match db.quote_at(index).await {
        Ok(Some(quote)) => HttpResponse::Ok().json(quote),
        Ok(None) => {
            // the table shrank between count and fetch
            HttpResponse::NotFound().json(serde_json::json!({ "error": "no quotes configured" }))
        }
        Err(e) => {
            log::error!("quote fetch failed: {}", e);
            internal()
        }
    }
}
