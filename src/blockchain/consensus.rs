use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::validator::validate_chain;
use super::{Block, Ledger};

/// How long a single peer gets to answer before it is skipped.
pub const PEER_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire form of a node's chain: what `GET /api/v1/chain/` serves and what
/// the resolver expects back from every peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub length: usize,
    pub chain: Vec<Block>,
}

/// A failure talking to one peer. Never fatal: the peer is skipped and the
/// consensus scan carries on.
#[derive(Debug, Error)]
pub enum PeerFetchError {
    #[error("request to peer failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("peer answered with HTTP {0}")]
    Status(u16),
}

/// Fetch capability for a peer's chain, abstracted so consensus can be
/// exercised without a network.
pub trait PeerClient {
    fn fetch_chain(
        &self,
        peer: &str,
    ) -> impl Future<Output = Result<ChainSnapshot, PeerFetchError>>;
}

/// `PeerClient` over HTTP, hitting each peer's chain endpoint with a
/// per-request timeout so an unresponsive peer cannot stall resolution.
pub struct HttpPeerClient {
    client: reqwest::Client,
}

impl HttpPeerClient {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client builds with static configuration");
        Self { client }
    }
}

impl Default for HttpPeerClient {
    fn default() -> Self {
        Self::new(PEER_FETCH_TIMEOUT)
    }
}

impl PeerClient for HttpPeerClient {
    async fn fetch_chain(&self, peer: &str) -> Result<ChainSnapshot, PeerFetchError> {
        let url = format!("http://{peer}/api/v1/chain/");
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PeerFetchError::Status(response.status().as_u16()));
        }
        Ok(response.json::<ChainSnapshot>().await?)
    }
}

/// Longest-valid-chain reconciliation against a set of peers.
pub struct ConsensusResolver<C> {
    client: C,
    difficulty: u32,
}

impl<C: PeerClient> ConsensusResolver<C> {
    pub fn new(client: C, difficulty: u32) -> Self {
        Self { client, difficulty }
    }

    /// Scan `peers` for a valid chain strictly longer than ours and adopt
    /// the longest one found. Returns true iff the local chain was replaced.
    ///
    /// Fetch failures exclude that peer and nothing else. When several peers
    /// tie at the greatest valid length, the first one reached in scan order
    /// wins; the registry hands peers out in arbitrary order, so the winner
    /// among equals is deliberately unspecified.
    pub async fn resolve(&self, peers: &[String], ledger: &Mutex<Ledger>) -> bool {
        let mut max_length = ledger.lock().expect("mutex poisoned").len();
        let mut candidate: Option<ChainSnapshot> = None;

        for peer in peers {
            let snapshot = match self.client.fetch_chain(peer).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("CONSENSUS - skipping peer {peer}: {e}");
                    continue;
                }
            };
            debug!(
                "CONSENSUS - peer {peer} reports a chain of length {}",
                snapshot.length
            );
            if snapshot.length > max_length && validate_chain(&snapshot.chain, self.difficulty) {
                max_length = snapshot.length;
                candidate = Some(snapshot);
            }
        }

        let Some(snapshot) = candidate else {
            return false;
        };

        // The local chain may have grown while we were scanning; adopt the
        // candidate only if it is still strictly longer, in one atomic swap.
        let mut ledger = ledger.lock().expect("mutex poisoned");
        if snapshot.length <= ledger.len() {
            return false;
        }
        info!(
            "CONSENSUS - replacing local chain (length {}) with peer chain (length {})",
            ledger.len(),
            snapshot.length
        );
        ledger.replace_chain(snapshot.chain);
        true
    }
}
