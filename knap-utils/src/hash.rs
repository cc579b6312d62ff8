/// 32 byte generator seed derived from an arbitrary string.
pub fn seed_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Seed derived from several components. Each component is length-prefixed
/// so `["ab", "c"]` and `["a", "bc"]` never collide.
pub fn seed_from_parts(parts: &[&str]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    hasher.finalize().into()
}

/// Short fingerprint of a seed for log lines.
pub fn seed_fingerprint(seed: &[u8; 32]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&seed[0..8]);
    u64::from_le_bytes(bytes)
}
