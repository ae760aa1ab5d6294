//! Groth16 verification over BN254.
//!
//! Points use the EIP-197 byte layout so keys and proofs exported for the
//! Ethereum pairing precompile can be used unchanged:
//!
//! - G1: `x ‖ y`, 32-byte big-endian coordinates (64 bytes)
//! - G2: `x_im ‖ x_re ‖ y_im ‖ y_re` (128 bytes)
//!
//! The all-zero encoding is the point at infinity.

use bn::{pairing_batch, AffineG1, AffineG2, Fq, Fq2, Fr, Group, Gt, G1, G2};
use tracing::*;

use crate::{
    proof::{FieldElement, Proof, ProofVerifier, PublicInputs},
    Groth16Error,
};

const G1_LEN: usize = 64;
const G2_LEN: usize = 128;

/// Encoded proof length: `A ‖ B ‖ C`.
pub const PROOF_LEN: usize = G1_LEN + G2_LEN + G1_LEN;

/// Groth16 verifying key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Groth16VerifyingKey {
    alpha: G1,
    beta: G2,
    gamma: G2,
    delta: G2,
    /// `ic[0]` is the constant term, one further point per public input.
    ic: Vec<G1>,
}

impl Groth16VerifyingKey {
    pub fn new(
        alpha: G1,
        beta: G2,
        gamma: G2,
        delta: G2,
        ic: Vec<G1>,
    ) -> Result<Self, Groth16Error> {
        if ic.is_empty() {
            return Err(Groth16Error::MissingIc);
        }
        Ok(Self {
            alpha,
            beta,
            gamma,
            delta,
            ic,
        })
    }

    /// Parses `alpha ‖ beta ‖ gamma ‖ delta ‖ ic[0] ‖ … ‖ ic[n]`.
    pub fn from_slice(buf: &[u8]) -> Result<Self, Groth16Error> {
        let fixed = G1_LEN + 3 * G2_LEN;
        if buf.len() < fixed + G1_LEN || (buf.len() - fixed) % G1_LEN != 0 {
            return Err(Groth16Error::InvalidLength {
                what: "verifying key",
                expected: fixed + G1_LEN,
                actual: buf.len(),
            });
        }

        let alpha = read_g1(&buf[..G1_LEN], "alpha")?;
        let mut off = G1_LEN;
        let beta = read_g2(&buf[off..off + G2_LEN], "beta")?;
        off += G2_LEN;
        let gamma = read_g2(&buf[off..off + G2_LEN], "gamma")?;
        off += G2_LEN;
        let delta = read_g2(&buf[off..off + G2_LEN], "delta")?;
        off += G2_LEN;

        let ic = buf[off..]
            .chunks_exact(G1_LEN)
            .map(|chunk| read_g1(chunk, "ic"))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(alpha, beta, gamma, delta, ic)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(G1_LEN + 3 * G2_LEN + self.ic.len() * G1_LEN);
        buf.extend_from_slice(&write_g1(self.alpha));
        buf.extend_from_slice(&write_g2(self.beta));
        buf.extend_from_slice(&write_g2(self.gamma));
        buf.extend_from_slice(&write_g2(self.delta));
        for p in &self.ic {
            buf.extend_from_slice(&write_g1(*p));
        }
        buf
    }

    /// Number of public inputs the key expects.
    pub fn num_inputs(&self) -> usize {
        self.ic.len() - 1
    }
}

/// Decoded Groth16 proof `(A, B, C)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Groth16Proof {
    a: G1,
    b: G2,
    c: G1,
}

impl Groth16Proof {
    pub fn new(a: G1, b: G2, c: G1) -> Self {
        Self { a, b, c }
    }

    pub fn from_slice(buf: &[u8]) -> Result<Self, Groth16Error> {
        if buf.len() != PROOF_LEN {
            return Err(Groth16Error::InvalidLength {
                what: "proof",
                expected: PROOF_LEN,
                actual: buf.len(),
            });
        }
        let a = read_g1(&buf[..G1_LEN], "A")?;
        let b = read_g2(&buf[G1_LEN..G1_LEN + G2_LEN], "B")?;
        let c = read_g1(&buf[G1_LEN + G2_LEN..], "C")?;
        Ok(Self { a, b, c })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(PROOF_LEN);
        buf.extend_from_slice(&write_g1(self.a));
        buf.extend_from_slice(&write_g2(self.b));
        buf.extend_from_slice(&write_g1(self.c));
        buf
    }
}

impl From<Groth16Proof> for Proof {
    fn from(value: Groth16Proof) -> Self {
        Proof::new(value.to_bytes())
    }
}

/// [`ProofVerifier`] checking Groth16 proofs against a fixed verifying key.
#[derive(Clone, Debug)]
pub struct Groth16Verifier {
    vk: Groth16VerifyingKey,
}

impl Groth16Verifier {
    pub fn new(vk: Groth16VerifyingKey) -> Self {
        Self { vk }
    }

    pub fn verifying_key(&self) -> &Groth16VerifyingKey {
        &self.vk
    }

    /// Runs the pairing check
    /// `e(-A, B) · e(alpha, beta) · e(vk_x, gamma) · e(C, delta) == 1`.
    pub fn verify_proof(&self, proof: &Groth16Proof, inputs: &[FieldElement]) -> bool {
        if inputs.len() != self.vk.num_inputs() {
            debug!(
                expected = self.vk.num_inputs(),
                actual = inputs.len(),
                "groth16: public input count mismatch"
            );
            return false;
        }

        let mut vk_x = self.vk.ic[0];
        for (input, ic) in inputs.iter().zip(&self.vk.ic[1..]) {
            // Inputs at or above the scalar field modulus are rejected outright.
            let Ok(scalar) = Fr::from_slice(input.as_be_bytes()) else {
                debug!("groth16: public input outside scalar field");
                return false;
            };
            vk_x = vk_x + *ic * scalar;
        }

        let pairs = [
            (-proof.a, proof.b),
            (self.vk.alpha, self.vk.beta),
            (vk_x, self.vk.gamma),
            (proof.c, self.vk.delta),
        ];
        pairing_batch(&pairs) == Gt::one()
    }
}

impl ProofVerifier for Groth16Verifier {
    fn verify(&self, proof: &Proof, inputs: &PublicInputs) -> bool {
        match Groth16Proof::from_slice(proof.as_bytes()) {
            Ok(proof) => self.verify_proof(&proof, inputs.as_slice()),
            Err(e) => {
                debug!(%e, "groth16: malformed proof");
                false
            }
        }
    }
}

fn read_fq(buf: &[u8], what: &'static str) -> Result<Fq, Groth16Error> {
    Fq::from_slice(buf).map_err(|_| Groth16Error::InvalidCoordinate(what))
}

fn read_g1(buf: &[u8], what: &'static str) -> Result<G1, Groth16Error> {
    if buf.iter().all(|b| *b == 0) {
        return Ok(G1::zero());
    }
    let x = read_fq(&buf[..32], what)?;
    let y = read_fq(&buf[32..64], what)?;
    AffineG1::new(x, y)
        .map(G1::from)
        .map_err(|_| Groth16Error::InvalidPoint(what))
}

fn read_g2(buf: &[u8], what: &'static str) -> Result<G2, Groth16Error> {
    if buf.iter().all(|b| *b == 0) {
        return Ok(G2::zero());
    }
    let x_im = read_fq(&buf[..32], what)?;
    let x_re = read_fq(&buf[32..64], what)?;
    let y_im = read_fq(&buf[64..96], what)?;
    let y_re = read_fq(&buf[96..128], what)?;
    AffineG2::new(Fq2::new(x_re, x_im), Fq2::new(y_re, y_im))
        .map(G2::from)
        .map_err(|_| Groth16Error::InvalidPoint(what))
}

fn write_fq(fq: Fq, out: &mut [u8]) {
    // Only fails on a wrong slice length, which the callers fix at 32.
    let _ = fq.to_big_endian(out);
}

fn write_g1(p: G1) -> [u8; G1_LEN] {
    let mut out = [0u8; G1_LEN];
    if let Some(affine) = AffineG1::from_jacobian(p) {
        write_fq(affine.x(), &mut out[..32]);
        write_fq(affine.y(), &mut out[32..]);
    }
    out
}

fn write_g2(p: G2) -> [u8; G2_LEN] {
    let mut out = [0u8; G2_LEN];
    if let Some(affine) = AffineG2::from_jacobian(p) {
        write_fq(affine.x().imaginary(), &mut out[..32]);
        write_fq(affine.x().real(), &mut out[32..64]);
        write_fq(affine.y().imaginary(), &mut out[64..96]);
        write_fq(affine.y().real(), &mut out[96..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Groth16Trapdoor;

    fn setup(n: usize) -> (Groth16Trapdoor, Groth16Verifier) {
        let trapdoor = Groth16Trapdoor::new(n);
        let verifier = Groth16Verifier::new(trapdoor.verifying_key());
        (trapdoor, verifier)
    }

    #[test]
    fn test_valid_proof_verifies() {
        let (trapdoor, verifier) = setup(3);
        let inputs = PublicInputs::from_values(&[700, 800, 1]);
        let proof = trapdoor.prove(&inputs);
        assert!(verifier.verify(&proof, &inputs));
    }

    #[test]
    fn test_proof_bound_to_inputs() {
        let (trapdoor, verifier) = setup(3);
        let proof = trapdoor.prove(&PublicInputs::from_values(&[700, 800, 1]));
        assert!(!verifier.verify(&proof, &PublicInputs::from_values(&[701, 800, 1])));
    }

    #[test]
    fn test_input_count_mismatch_rejected() {
        let (trapdoor, verifier) = setup(2);
        let inputs = PublicInputs::from_values(&[1, 2]);
        let proof = trapdoor.prove(&inputs);
        assert!(!verifier.verify(&proof, &PublicInputs::from_values(&[1, 2, 3])));
        assert!(!verifier.verify(&proof, &PublicInputs::from_values(&[1])));
    }

    #[test]
    fn test_out_of_field_input_rejected() {
        let (trapdoor, verifier) = setup(1);
        let proof = trapdoor.prove(&PublicInputs::from_values(&[5]));
        let huge = PublicInputs::new(vec![FieldElement::from_be_bytes([0xff; 32])]);
        assert!(!verifier.verify(&proof, &huge));
    }

    #[test]
    fn test_malformed_proof_rejected() {
        let (_, verifier) = setup(1);
        let inputs = PublicInputs::from_values(&[5]);
        assert!(!verifier.verify(&Proof::new(vec![0xba, 0xd]), &inputs));
        assert!(!verifier.verify(&Proof::new(vec![0x01; PROOF_LEN]), &inputs));
    }

    #[test]
    fn test_vk_bytes_roundtrip() {
        let (trapdoor, _) = setup(3);
        let vk = trapdoor.verifying_key();
        let parsed = Groth16VerifyingKey::from_slice(&vk.to_bytes()).unwrap();
        assert_eq!(parsed, vk);
        assert_eq!(parsed.num_inputs(), 3);
    }

    #[test]
    fn test_vk_length_checked() {
        let err = Groth16VerifyingKey::from_slice(&[0u8; 10]).unwrap_err();
        assert!(matches!(err, Groth16Error::InvalidLength { .. }));
    }
}
