use alloy_primitives::B256;
use oracle_primitives::hash::message_digest;
use secp256k1::{Message, PublicKey, SecretKey, SECP256K1};

use crate::{Identity, SIGNATURE_LEN};

/// Deterministic secret key derived from a non-zero seed byte.
pub fn test_secret_key(seed: u8) -> SecretKey {
    assert_ne!(seed, 0, "zero is not a valid secret key");
    let mut buf = [0u8; 32];
    buf[31] = seed;
    buf[0] = 0x42;
    SecretKey::from_slice(&buf).expect("test: valid secret key")
}

pub fn identity_of(sk: &SecretKey) -> Identity {
    Identity::from_public_key(&PublicKey::from_secret_key(SECP256K1, sk))
}

/// Signs a digest, returning `r ‖ s ‖ v` with `v` in the `27`/`28` form.
pub fn sign_digest(digest: &B256, sk: &SecretKey) -> [u8; SIGNATURE_LEN] {
    let message = Message::from_digest(digest.0);
    let sig = SECP256K1.sign_ecdsa_recoverable(&message, sk);
    let (recovery_id, compact) = sig.serialize_compact();

    let mut result = [0u8; SIGNATURE_LEN];
    result[..64].copy_from_slice(&compact);
    result[64] = 27 + recovery_id.to_i32() as u8;
    result
}

/// Signs a raw message the way a reporter does.
pub fn sign_message(message: &[u8], sk: &SecretKey) -> [u8; SIGNATURE_LEN] {
    sign_digest(&message_digest(message), sk)
}
