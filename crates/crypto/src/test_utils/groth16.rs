use bn::{Fr, Group, G1, G2};

use crate::{
    groth16::{Groth16Proof, Groth16VerifyingKey},
    proof::{Proof, PublicInputs},
};

/// Groth16 setup whose toxic waste is known, so valid-looking proofs can be
/// minted for any inputs without running a circuit.
#[derive(Debug)]
pub struct Groth16Trapdoor {
    alpha: Fr,
    beta: Fr,
    gamma: Fr,
    delta: Fr,
    ic: Vec<Fr>,
}

impl Groth16Trapdoor {
    pub fn new(num_inputs: usize) -> Self {
        let ic = (0..=num_inputs as u64).map(|i| scalar(100 + i)).collect();
        Self {
            alpha: scalar(7),
            beta: scalar(11),
            gamma: scalar(13),
            delta: scalar(17),
            ic,
        }
    }

    pub fn verifying_key(&self) -> Groth16VerifyingKey {
        Groth16VerifyingKey::new(
            G1::one() * self.alpha,
            G2::one() * self.beta,
            G2::one() * self.gamma,
            G2::one() * self.delta,
            self.ic.iter().map(|s| G1::one() * *s).collect(),
        )
        .expect("test: trapdoor has ic points")
    }

    /// Mints a proof that satisfies the pairing equation for `inputs`.
    pub fn prove(&self, inputs: &PublicInputs) -> Proof {
        let mut x = self.ic[0];
        for (input, ic) in inputs.as_slice().iter().zip(&self.ic[1..]) {
            let s = Fr::from_slice(input.as_be_bytes()).expect("test: input in field");
            x = x + s * *ic;
        }

        // e(A, B) = e(G1, G2)^(alpha*beta + x*gamma + c*delta) with B = G2, C = c*G1
        let c = scalar(19);
        let a = self.alpha * self.beta + x * self.gamma + c * self.delta;
        Groth16Proof::new(G1::one() * a, G2::one(), G1::one() * c).into()
    }
}

fn scalar(v: u64) -> Fr {
    Fr::from_str(&v.to_string()).expect("test: small scalar")
}
