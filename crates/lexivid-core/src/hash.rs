//! Content hashing for deterministic job ids and checkpoint fingerprints.

use sha2::{Digest, Sha256};

/// A content hash digest (SHA-256, 32 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash {
    bytes: [u8; 32],
}

impl ContentHash {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Get the hash as a hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// A short hex prefix, usable as a human-friendly identifier.
    pub fn short(&self) -> String {
        self.to_hex()[..10].to_string()
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Hash an ordered sequence of byte fields. Each field's length is mixed in
/// so that moving bytes between adjacent fields changes the digest.
pub fn hash_fields(fields: &[&[u8]]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update((fields.len() as u64).to_le_bytes());
    for field in fields {
        hasher.update((field.len() as u64).to_le_bytes());
        hasher.update(field);
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    ContentHash::from_bytes(bytes)
}
