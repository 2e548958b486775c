use super::Block;
use crate::transaction::Transaction;

/// In-memory append-only chain plus the pool of pending transactions.
///
/// This is the only type allowed to mutate chain state. Callers serialize
/// access through a single mutex, so every mutation here is atomic with
/// respect to concurrent mining and consensus resolution.
#[derive(Debug)]
pub struct Ledger {
    chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Ledger {
    /// Initialize a new ledger holding only the genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
        }
    }

    /// Queue a transaction for the next mined block. Returns the index of
    /// the block that will eventually contain it.
    pub fn queue_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: u64,
    ) -> u64 {
        self.pending.push(Transaction::new(sender, recipient, amount));
        self.last_block().index + 1
    }

    /// Seal the pending pool into a new block and append it to the chain.
    ///
    /// Pool capture and chain append happen as one step: every queued
    /// transaction lands in exactly this block and the pool comes out empty.
    /// When `previous_hash` is not supplied it is recomputed from the
    /// current last block.
    pub fn append_block(&mut self, proof: u64, previous_hash: Option<String>) -> &Block {
        let previous_hash = previous_hash.unwrap_or_else(|| self.last_block().hash());
        let index = self.chain.len() as u64 + 1;
        let transactions = std::mem::take(&mut self.pending);
        self.chain.push(Block::new(index, transactions, proof, previous_hash));
        self.last_block()
    }

    /// Return the most recent block. The chain is never empty after
    /// construction, so this cannot fail.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    /// Swap the owned chain for an already-validated replacement in one
    /// step. Only the consensus resolver calls this.
    pub fn replace_chain(&mut self, chain: Vec<Block>) {
        self.chain = chain;
    }

    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn pending(&self) -> &[Transaction] {
        &self.pending
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
