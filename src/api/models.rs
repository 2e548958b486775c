use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::blockchain::consensus::{ConsensusResolver, HttpPeerClient};
use crate::blockchain::{Block, Ledger};
use crate::network::NodeRegistry;
use crate::transaction::Transaction;

/// Shared application state: one explicit ledger instance plus the peer
/// registry, each behind its own mutex, and the consensus resolver.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub registry: Mutex<NodeRegistry>,
    pub resolver: ConsensusResolver<HttpPeerClient>,
    /// This node's identifier; receives mining rewards.
    pub node_id: String,
    pub difficulty: u32,
}

impl AppState {
    pub fn new(difficulty: u32) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            registry: Mutex::new(NodeRegistry::new()),
            resolver: ConsensusResolver::new(HttpPeerClient::default(), difficulty),
            node_id: Uuid::new_v4().simple().to_string(),
            difficulty,
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize)]
pub struct MineResponse {
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

#[derive(Deserialize)]
pub struct NewTxRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

#[derive(Serialize)]
pub struct NewTxResponse {
    pub message: String,
    pub index: u64,
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}

/* ---------- Node API Models ---------- */

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub address: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub nodes: Vec<String>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub replaced: bool,
    pub length: usize,
    pub chain: Vec<Block>,
}
