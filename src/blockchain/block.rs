use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
use crate::transaction::Transaction;

/// A sealed unit of the ledger: an ordered transaction batch, the
/// Proof-of-Work nonce, and the hex digest of the predecessor block.
///
/// Field declaration order IS the canonical serialization schema used for
/// hashing; two blocks with identical field values hash identically no
/// matter how they were constructed. Do not reorder fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,       // position in chain, starting at 1
    pub timestamp: i64,   // Unix seconds (UTC) at creation
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

impl Block {
    /// The fixed first block every ledger starts from.
    pub fn genesis() -> Self {
        Self {
            index: 1,
            timestamp: Utc::now().timestamp(),
            transactions: Vec::new(),
            proof: GENESIS_PROOF,
            previous_hash: GENESIS_PREVIOUS_HASH.to_string(),
        }
    }

    /// Create a block stamped with the current time.
    pub fn new(index: u64, transactions: Vec<Transaction>, proof: u64, previous_hash: String) -> Self {
        Self {
            index,
            timestamp: Utc::now().timestamp(),
            transactions,
            proof,
            previous_hash,
        }
    }

    /// SHA-256 over the canonical JSON serialization of the block,
    /// hex-encoded. Serialization failing would mean the block type itself
    /// is broken, so it is treated as a fatal defect.
    pub fn hash(&self) -> String {
        let bytes = serde_json::to_vec(self).expect("block serializes to canonical JSON");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::transaction::Transaction;

    #[test]
    fn hash_matches_fixed_vector() {
        // sha256 of {"index":1,"timestamp":0,"transactions":[],"proof":100,"previous_hash":"1"}
        let block = Block {
            index: 1,
            timestamp: 0,
            transactions: Vec::new(),
            proof: 100,
            previous_hash: "1".into(),
        };
        assert_eq!(
            block.hash(),
            "eb0e1f6b9803f5cb1ce67b39380cbf6a76ffec7f5b66ec89181e27222b1c2aa6"
        );
    }

    #[test]
    fn hash_covers_transactions() {
        // sha256 of {"index":2,"timestamp":0,"transactions":[{"sender":"alice",
        // "recipient":"bob","amount":5}],"proof":35293,"previous_hash":"abc"}
        let block = Block {
            index: 2,
            timestamp: 0,
            transactions: vec![Transaction::new("alice", "bob", 5)],
            proof: 35293,
            previous_hash: "abc".into(),
        };
        assert_eq!(
            block.hash(),
            "184f5a5793b11aba0af8d5f367f9fdf14ef2c262b797d8e8384413980cd919e7"
        );
    }

    #[test]
    fn hash_is_independent_of_construction_order() {
        let a = Block {
            index: 3,
            timestamp: 1_600_000_000,
            transactions: vec![Transaction::new("alice", "bob", 10)],
            proof: 42,
            previous_hash: "deadbeef".into(),
        };
        // Same field values assigned in a different order.
        let b = Block {
            previous_hash: "deadbeef".into(),
            proof: 42,
            transactions: vec![Transaction::new("alice", "bob", 10)],
            timestamp: 1_600_000_000,
            index: 3,
        };
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn tampering_changes_the_hash() {
        let mut block = Block {
            index: 2,
            timestamp: 1_600_000_000,
            transactions: vec![Transaction::new("alice", "bob", 10)],
            proof: 42,
            previous_hash: "deadbeef".into(),
        };
        let before = block.hash();
        block.transactions[0].amount = 11;
        assert_ne!(before, block.hash());
    }

    #[test]
    fn genesis_has_sentinel_linkage() {
        let genesis = Block::genesis();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.previous_hash, "1");
        assert_eq!(genesis.proof, 100);
        assert!(genesis.transactions.is_empty());
    }
}
