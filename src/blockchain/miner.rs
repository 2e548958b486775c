use sha2::{Digest, Sha256};

/// Check a Proof-of-Work candidate: SHA-256 of the two proofs' decimal
/// strings concatenated must start with `difficulty` zero hex characters.
/// Difficulty 0 accepts everything, which keeps tests deterministic.
pub fn valid_proof(last_proof: u64, candidate: u64, difficulty: u32) -> bool {
    let guess = format!("{last_proof}{candidate}");
    let digest = hex::encode(Sha256::digest(guess.as_bytes()));
    digest.chars().take(difficulty as usize).all(|c| c == '0')
}

/// Search candidates from 0 upward until one satisfies `valid_proof`.
///
/// CPU-bound with no hard bound on iterations; expected search length grows
/// exponentially with difficulty. Callers must keep this off the
/// request-handling path.
pub fn find_proof(last_proof: u64, difficulty: u32) -> u64 {
    let mut proof = 0u64;
    while !valid_proof(last_proof, proof, difficulty) {
        proof = proof.wrapping_add(1);
    }
    proof
}
