pub mod block;
pub mod consensus;
pub mod miner;
pub mod model;
pub mod validator;

pub use block::Block;
pub use model::Ledger;

/// Default Proof-of-Work difficulty (leading zero hex characters).
/// Overridable via the DIFFICULTY env var; 0 makes every proof valid.
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Previous-hash sentinel carried by the genesis block. Deliberately not a
/// valid hex digest, so it can never collide with a real block hash.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Fixed proof carried by the genesis block.
pub const GENESIS_PROOF: u64 = 100;

/// Reserved sender identifier for mining reward transactions.
pub const REWARD_SENDER: &str = "0";

/// Amount credited to the node that mines a block.
pub const MINING_REWARD: u64 = 1;
