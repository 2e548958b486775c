use serde::{Deserialize, Serialize};

/// A value transfer queued for inclusion in the next mined block.
/// No signatures and no balance checks: the ledger records what it is told.
///
/// Field order is part of the canonical hashing schema; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Transaction;

    #[test]
    fn serializes_in_schema_order() {
        let tx = Transaction::new("alice", "bob", 5);
        let json = serde_json::to_string(&tx).expect("serialize tx");
        assert_eq!(json, r#"{"sender":"alice","recipient":"bob","amount":5}"#);
    }

    #[test]
    fn equality_is_field_wise() {
        let tx = Transaction::new("alice", "bob", 5);
        assert_eq!(tx, Transaction::new("alice", "bob", 5));
        assert_ne!(tx, Transaction::new("alice", "bob", 6));
        assert_ne!(tx, Transaction::new("alice", "carol", 5));
    }
}
