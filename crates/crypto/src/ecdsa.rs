//! Recoverable ECDSA over secp256k1.

use alloy_primitives::B256;
use oracle_primitives::hash::message_digest;
use secp256k1::{
    ecdsa::{RecoverableSignature, RecoveryId},
    Message, SECP256K1,
};

use crate::{Identity, SignatureError};

/// Length of a signature blob: `r (32) ‖ s (32) ‖ v (1)`.
pub const SIGNATURE_LEN: usize = 65;

/// Recovers the identity that signed `digest`.
///
/// `v` may be given either raw (`0`/`1`) or in the Ethereum `27`/`28` form.
/// Any structural problem with `signature` is an error; a well-formed
/// signature over a different digest recovers to some unrelated identity.
pub fn recover(digest: &B256, signature: &[u8]) -> Result<Identity, SignatureError> {
    let sig = parse_signature(signature)?;
    let msg = Message::from_digest(digest.0);

    let pubkey = SECP256K1
        .recover_ecdsa(&msg, &sig)
        .map_err(|_| SignatureError::Unrecoverable)?;

    Ok(Identity::from_public_key(&pubkey))
}

/// Recovers the signer of a raw message, hashing it with
/// [`message_digest`] first.
pub fn recover_message(message: &[u8], signature: &[u8]) -> Result<Identity, SignatureError> {
    recover(&message_digest(message), signature)
}

fn parse_signature(signature: &[u8]) -> Result<RecoverableSignature, SignatureError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(SignatureError::InvalidLength {
            expected: SIGNATURE_LEN,
            actual: signature.len(),
        });
    }

    let v = signature[64];
    let rec_id = match v {
        0 | 1 => v,
        27 | 28 => v - 27,
        _ => return Err(SignatureError::InvalidRecoveryId(v)),
    };
    let recovery_id = RecoveryId::from_i32(rec_id as i32)
        .map_err(|_| SignatureError::InvalidRecoveryId(v))?;

    RecoverableSignature::from_compact(&signature[..64], recovery_id)
        .map_err(|_| SignatureError::InvalidSignatureFormat)
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, keccak256};
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::{sign_digest, sign_message, test_secret_key};

    const REPORTER_KEY: &str = "177ee777e72b8c042e05ef41d1db0f17f1fcb0e8150b37cfad6993e4373bdf10";

    #[test]
    fn test_recovers_known_signer() {
        let sk = secp256k1::SecretKey::from_slice(&hex::decode(REPORTER_KEY).unwrap()).unwrap();
        let sig = sign_message(b"hello oracle", &sk);
        let id = recover_message(b"hello oracle", &sig).unwrap();
        assert_eq!(id, address!("1826265c3156c3b9b9e751dc4635376f3cd6ee06"));
    }

    #[test]
    fn test_tampered_message_recovers_other_identity() {
        let sk = test_secret_key(1);
        let sig = sign_message(b"prices", &sk);
        let signer = recover_message(b"prices", &sig).unwrap();
        match recover_message(b"bad", &sig) {
            Ok(other) => assert_ne!(other, signer),
            Err(e) => assert_eq!(e, SignatureError::Unrecoverable),
        }
    }

    #[test]
    fn test_accepts_both_v_forms() {
        let sk = test_secret_key(2);
        let digest = keccak256(b"digest");
        let mut sig = sign_digest(&digest, &sk);
        let expected = recover(&digest, &sig).unwrap();
        assert!(sig[64] == 27 || sig[64] == 28);

        sig[64] -= 27;
        assert_eq!(recover(&digest, &sig).unwrap(), expected);
    }

    #[test]
    fn test_rejects_bad_length() {
        let err = recover(&B256::ZERO, &[0x0b, 0xad]).unwrap_err();
        assert_eq!(
            err,
            SignatureError::InvalidLength {
                expected: SIGNATURE_LEN,
                actual: 2
            }
        );
    }

    #[test]
    fn test_rejects_bad_recovery_id() {
        let sk = test_secret_key(3);
        let mut sig = sign_message(b"x", &sk);
        sig[64] = 29;
        assert_eq!(
            recover_message(b"x", &sig),
            Err(SignatureError::InvalidRecoveryId(29))
        );
    }

    #[test]
    fn test_rejects_overflowing_scalar() {
        let mut sig = [0xffu8; SIGNATURE_LEN];
        sig[64] = 27;
        assert_eq!(
            recover(&B256::ZERO, &sig),
            Err(SignatureError::InvalidSignatureFormat)
        );
    }

    proptest! {
        #[test]
        fn recovery_is_deterministic(seed in 1u8..=255, msg in prop::collection::vec(any::<u8>(), 0..64)) {
            let sk = test_secret_key(seed);
            let sig = sign_message(&msg, &sk);
            let a = recover_message(&msg, &sig).unwrap();
            let b = recover_message(&msg, &sig).unwrap();
            prop_assert_eq!(a, b);
            prop_assert_eq!(a, crate::test_utils::identity_of(&sk));
        }
    }
}
