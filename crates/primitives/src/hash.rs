//! Message digests.

use alloy_primitives::{eip191_hash_message, keccak256, B256};

/// Digest a reporter signs for a message.
///
/// This is the EIP-191 personal-message hash of `keccak256(message)`, so a
/// reporter can sign with any stock Ethereum key tooling.
pub fn message_digest(message: &[u8]) -> B256 {
    eip191_hash_message(keccak256(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(message_digest(b"prices"), message_digest(b"prices"));
        assert_ne!(message_digest(b"prices"), message_digest(b"pricez"));
    }

    #[test]
    fn test_digest_wraps_inner_hash() {
        let inner = keccak256(b"abc");
        let mut prefixed = b"\x19Ethereum Signed Message:\n32".to_vec();
        prefixed.extend_from_slice(inner.as_slice());
        assert_eq!(message_digest(b"abc"), keccak256(prefixed));
    }
}
