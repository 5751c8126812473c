use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;
use tpr_auth::Auth;
use tpr_core::ID;

fn internal() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": "internal error" }))
}

pub async fn list(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    params: web::Query<ListParams>,
) -> impl Responder {
    match db
        .list(params.sort(), params.direction(), params.search())
        .await
    {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(e) => {
            log::error!("member listing failed: {}", e);
            internal()
        }
    }
}

pub async fn create(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    draft: web::Json<MemberDraft>,
) -> impl Responder {
    match draft.validate() {
        Err(reason) => HttpResponse::BadRequest().json(serde_json::json!({ "error": reason })),
        Ok(ref member) => match db.create(member).await {
            Ok(stored) => HttpResponse::Created().json(stored),
            Err(e) => {
                log::error!("member insert failed: {}", e);
                internal()
            }
        },
    }
}

pub async fn update(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<i64>,
    draft: web::Json<MemberDraft>,
) -> impl Responder {
    let id = ID::<Member>::from(path.into_inner());
    match draft.patch() {
        Err(reason) => HttpResponse::BadRequest().json(serde_json::json!({ "error": reason })),
        Ok(ref patch) => match db.update(id, patch).await {
            Ok(Some(stored)) => HttpResponse::Ok().json(stored),
            Ok(None) => {
                HttpResponse::NotFound().json(serde_json::json!({ "error": "member not found" }))
            }
            Err(e) => {
                log::error!("member update failed: {}", e);
                internal()
            }
        },
    }
}

pub async fn delete(
    _auth: Auth,
    db: web::Data<Arc<Client>>,
    path: web::Path<i64>,
) -> impl Responder {
    let id = ID::<Member>::from(path.into_inner());
    match db.delete(id).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({ "message": "member deleted" })),
        Ok(false) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": "member not found" }))
        }
        Err(e) => {
            log::error!("member delete failed: {}", e);
            internal()
        }
    }
}
