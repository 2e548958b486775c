use actix_web::{HttpResponse, Responder, post, web};
use log::{info, warn};

use super::models::{AppState, RegisterRequest, RegisterResponse, ResolveResponse};

/// Register a peer endpoint with this node.
#[post("/nodes/register/")]
pub async fn register_node(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> impl Responder {
    let mut registry = state.registry.lock().expect("mutex poisoned");
    if let Err(e) = registry.add(&body.address) {
        warn!("NODES - rejected registration: {e}");
        return HttpResponse::BadRequest().body(e.to_string());
    }
    info!("NODES - registered {} (total {})", body.address, registry.len());
    HttpResponse::Created().json(RegisterResponse {
        nodes: registry.list(),
        total: registry.len(),
    })
}

/// Run longest-valid-chain consensus against all known peers and report
/// whether the local chain was replaced.
#[post("/nodes/resolve/")]
pub async fn resolve_conflicts(state: web::Data<AppState>) -> impl Responder {
    let peers = {
        let registry = state.registry.lock().expect("mutex poisoned");
        registry.list()
    };

    let replaced = state.resolver.resolve(&peers, &state.ledger).await;

    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(ResolveResponse {
        replaced,
        length: ledger.len(),
        chain: ledger.chain().to_vec(),
    })
}
