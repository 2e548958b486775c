use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, NewTxRequest, NewTxResponse, PendingResponse};

/// Submit a transaction into the pending pool.
/// All three fields are mandatory (a missing one is rejected by the Json
/// extractor before we get here); blank identifiers are rejected too.
#[post("/tx/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTxRequest>,
) -> impl Responder {
    let sender = body.sender.trim();
    let recipient = body.recipient.trim();
    if sender.is_empty() || recipient.is_empty() {
        warn!("TX - rejected: blank sender or recipient");
        return HttpResponse::BadRequest().body("sender and recipient are required");
    }

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.queue_transaction(sender, recipient, body.amount)
    };

    info!("TX - queued {sender} -> {recipient} ({}) for block {index}", body.amount);
    HttpResponse::Created().json(NewTxResponse {
        message: format!("Transaction will be added to block {index}"),
        index,
    })
}

/// List the not-yet-sealed transactions awaiting the next block.
#[get("/pending/")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(PendingResponse {
        size: ledger.pending().len(),
        transactions: ledger.pending().to_vec(),
    })
}
