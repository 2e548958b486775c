use super::Block;
use super::miner::valid_proof;

/// Validate the integrity of a whole candidate chain.
///
/// Walks adjacent pairs from the second block onward and checks that each
/// block links to the recomputed hash of its predecessor and carries a valid
/// proof for the predecessor's proof. Returns false on the first violation.
/// Chains of length 0 or 1 are trivially valid. `windows(2)` advances by
/// exactly one block per iteration and terminates at the last block.
pub fn validate_chain(chain: &[Block], difficulty: u32) -> bool {
    for pair in chain.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);
        if current.previous_hash != prev.hash() {
            return false;
        }
        if !valid_proof(prev.proof, current.proof, difficulty) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::validate_chain;
    use crate::blockchain::miner::find_proof;
    use crate::blockchain::{Block, Ledger};

    /// Build a valid chain of `extra` blocks past genesis by actually mining.
    fn mined_chain(extra: usize, difficulty: u32) -> Vec<Block> {
        let mut ledger = Ledger::new();
        for i in 0..extra {
            ledger.queue_transaction("alice", "bob", i as u64 + 1);
            let proof = find_proof(ledger.last_block().proof, difficulty);
            ledger.append_block(proof, None);
        }
        ledger.chain().to_vec()
    }

    #[test]
    fn empty_and_single_block_chains_are_valid() {
        assert!(validate_chain(&[], 4));
        assert!(validate_chain(&[Block::genesis()], 4));
    }

    #[test]
    fn mined_chains_validate() {
        assert!(validate_chain(&mined_chain(3, 0), 0));
        assert!(validate_chain(&mined_chain(2, 1), 1));
    }

    #[test]
    fn tampered_transaction_breaks_linkage() {
        let mut chain = mined_chain(2, 0);
        // Mutate a transaction amount inside the middle block: block 3 still
        // stores the hash of the original block 2, so linkage fails.
        chain[1].transactions[0].amount = 999;
        assert!(!validate_chain(&chain, 0));
    }

    #[test]
    fn corrupted_proof_is_rejected() {
        let mut chain = mined_chain(2, 1);
        let bad_proof = chain[2].proof + 1;
        chain[2].proof = bad_proof;
        // Re-link so only the proof check can fail.
        chain[2].previous_hash = chain[1].hash();
        assert!(!validate_chain(&chain, 1));
    }

    #[test]
    fn broken_previous_hash_is_rejected() {
        let mut chain = mined_chain(2, 0);
        chain[2].previous_hash = "deadbeef".into();
        assert!(!validate_chain(&chain, 0));
    }
}
