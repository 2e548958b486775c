use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ValidateResponse};
use crate::blockchain::consensus::ChainSnapshot;
use crate::blockchain::validator::validate_chain;

/// Get the full chain and its length. This is also the inter-node wire
/// contract consumed by peers during consensus resolution.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ChainSnapshot {
        length: ledger.len(),
        chain: ledger.chain().to_vec(),
    })
}

/// Validate the local chain's hash linkage and proofs.
#[get("/validate/")]
pub async fn validate(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ValidateResponse {
        valid: validate_chain(ledger.chain(), state.difficulty),
        length: ledger.len(),
    })
}
