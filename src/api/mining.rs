use actix_web::{HttpResponse, Responder, post, web};
use log::{error, info};

use super::models::{AppState, MineResponse};
use crate::blockchain::miner::find_proof;
use crate::blockchain::{MINING_REWARD, REWARD_SENDER};

/// Mine a new block:
/// - run the Proof-of-Work search against the current chain head,
/// - queue the fixed reward transaction for this node,
/// - seal the pending pool into a new block.
///
/// The nonce search is CPU-bound and unbounded, so it runs on the blocking
/// thread pool instead of the request-handling path.
#[post("/mine/")]
pub async fn mine(state: web::Data<AppState>) -> impl Responder {
    let last_proof = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.last_block().proof
    };

    let difficulty = state.difficulty;
    let proof = match web::block(move || find_proof(last_proof, difficulty)).await {
        Ok(proof) => proof,
        Err(e) => {
            error!("MINER - proof search aborted: {e}");
            return HttpResponse::InternalServerError().body("mining task failed");
        }
    };

    // Reward, previous-hash computation and append happen under one lock so
    // the sealed block captures exactly the pool as it stands.
    let block = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        ledger.queue_transaction(REWARD_SENDER, state.node_id.clone(), MINING_REWARD);
        let previous_hash = ledger.last_block().hash();
        ledger.append_block(proof, Some(previous_hash)).clone()
    };

    info!(
        "MINER - sealed block #{} (proof={}, txs={})",
        block.index,
        block.proof,
        block.transactions.len()
    );
    HttpResponse::Ok().json(MineResponse {
        index: block.index,
        transactions: block.transactions,
        proof: block.proof,
        previous_hash: block.previous_hash,
    })
}
