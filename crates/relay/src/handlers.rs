use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// POST /api/contact-form — forward a contact submission to the external
/// form-processing service and translate its verdict.
pub async fn contact_form(
    relay: web::Data<FormRelay>,
    body: web::Json<serde_json::Value>,
) -> impl Responder {
    match relay.forward(&body.into_inner()).await {
        Ok(Forwarded::Accepted) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "message sent",
        })),
        Ok(Forwarded::Refused(status)) => {
            log::warn!("form relay refused submission: upstream {}", status);
            HttpResponse::BadGateway().json(serde_json::json!({
                "success": false,
                "message": "form service rejected the submission",
            }))
        }
        Err(e) => {
            log::error!("form relay unreachable: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "success": false,
                "message": "internal error",
            }))
        }
    }
}

/// POST /api/donations — create a provider transaction and hand back the
/// redirect URL.
pub async fn donate(
    gateway: web::Data<PaymentGateway>,
    donation: web::Json<DonationRequest>,
) -> impl Responder {
    if donation.amount <= 0 {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "amount must be positive" }));
    }
    match gateway.create_transaction(&donation.into_inner()).await {
        Ok(url) => HttpResponse::Ok().json(serde_json::json!({ "payment_url": url })),
        Err(e) => {
            log::error!("transaction creation failed: {}", e);
            HttpResponse::BadGateway()
                .json(serde_json::json!({ "error": "payment provider unavailable" }))
        }
    }
}

/// The provider's webhook envelope: an event name plus the transaction.
#[derive(Debug, serde::Deserialize)]
pub struct PaymentEvent {
    pub name: String,
    #[serde(default)]
    pub entity: serde_json::Value,
}

/// POST /api/payment-webhook — receive payment events. A confirmed
/// payment queues a receipt notice; everything else is acknowledged and
/// ignored so the provider stops retrying.
pub async fn payment_webhook(event: web::Json<PaymentEvent>) -> impl Responder {
    if event.name == "transaction.approved" {
        let email = event.entity["customer"]["email"].as_str();
        let name = event.entity["customer"]["firstname"].as_str().unwrap_or("");
        let amount = event.entity["amount"].as_i64().unwrap_or(0);
        let message = event.entity["description"].as_str();
        match email {
            Some(email) => Notice::receipt(email, name, amount, message).dispatch(),
            None => log::warn!("approved transaction carried no customer email"),
        }
    } else {
        log::debug!("ignoring payment event {:?}", event.name);
    }
    HttpResponse::Ok().json(serde_json::json!({ "received": true }))
}
