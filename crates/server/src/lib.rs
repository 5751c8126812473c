//! Unified Site Server
//!
//! The one authoritative route table: authentication, member registry,
//! ancillary content, outbound relays, and the static pages, all served
//! from a single actix-web server.
//!
//! ## Submodules
//!
//! - [`pages`] — Named template pages and the 404 fallback

pub mod pages;

pub use pages::SiteDir;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use pages::not_found;
use pages::page;
use std::sync::Arc;
use tokio_postgres::Client;
use tpr_auth::Auth;
use tpr_pg::provision;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Creates every table this deployment reads or writes.
async fn migrate(client: &Client) -> Result<(), tpr_pg::PgErr> {
    provision::<tpr_registry::Member>(client).await?;
    provision::<tpr_content::Quote>(client).await?;
    provision::<tpr_content::Event>(client).await?;
    provision::<tpr_content::QuizQuestion>(client).await?;
    provision::<tpr_content::Brochure>(client).await?;
    provision::<tpr_content::Song>(client).await?;
    provision::<tpr_content::Book>(client).await?;
    provision::<tpr_content::Video>(client).await?;
    Ok(())
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = tpr_pg::db().await;
    migrate(&client).await.expect("schema provisioning failed");
    let crypto  = web::Data::new(tpr_auth::Crypto::from_env());
    let admin   = web::Data::new(tpr_auth::Admin::from_env());
    let relay   = web::Data::new(tpr_relay::FormRelay::from_env());
    let gateway = web::Data::new(tpr_relay::PaymentGateway::from_env());
    let site    = web::Data::new(SiteDir::from_env());
    let client  = web::Data::new(client);
    log::info!("starting site server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(admin.clone())
            .app_data(relay.clone())
            .app_data(gateway.clone())
            .app_data(site.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/api")
                    .route("/login", web::post().to(tpr_auth::login))
                    .route("/logout", web::post().to(tpr_auth::logout))
                    .route("/contact-form", web::post().to(tpr_relay::contact_form))
                    .route("/donations", web::post().to(tpr_relay::donate))
                    .route("/payment-webhook", web::post().to(tpr_relay::payment_webhook))
                    .route("/events", web::get().to(tpr_content::events))
                    .route("/quiz-questions", web::get().to(tpr_content::quiz_questions))
                    .route("/brochures", web::get().to(tpr_content::brochures))
                    .route("/songs", web::get().to(tpr_content::songs))
                    .route("/books", web::get().to(tpr_content::books))
                    .route("/youtube-videos", web::get().to(tpr_content::videos))
                    .route("/daily-quote", web::get().to(tpr_content::daily_quote))
                    .service(
                        web::scope("/admin")
                            .route("/members", web::get().to(tpr_registry::list))
                            .route("/members", web::post().to(tpr_registry::create))
                            .route("/members/{id}", web::put().to(tpr_registry::update))
                            .route("/members/{id}", web::delete().to(tpr_registry::delete)),
                    ),
            )
            .route("/",                 web::get().to(|dir: web::Data<SiteDir>| page(dir, "index.html")))
            .route("/don",              web::get().to(|dir: web::Data<SiteDir>| page(dir, "don.html")))
            .route("/entretien",        web::get().to(|dir: web::Data<SiteDir>| page(dir, "entretien.html")))
            .route("/enfants",          web::get().to(|dir: web::Data<SiteDir>| page(dir, "enfants.html")))
            .route("/jeunesse",         web::get().to(|dir: web::Data<SiteDir>| page(dir, "jeunesse.html")))
            .route("/jeunesse_don",     web::get().to(|dir: web::Data<SiteDir>| page(dir, "jeunesse_don.html")))
            .route("/telecommunication",web::get().to(|dir: web::Data<SiteDir>| page(dir, "telecommunication.html")))
            .route("/login",            web::get().to(|dir: web::Data<SiteDir>| page(dir, "login.html")))
            .route("/dashboard",        web::get().to(|_: Auth, dir: web::Data<SiteDir>| page(dir, "dashboard.html")))
            .service(
                Files::new("/", site.root()).default_handler(web::to(not_found)),
            )
            .default_service(web::to(not_found))
    })
    .workers(4)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
