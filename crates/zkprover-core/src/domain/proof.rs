//! Proof artifact and public inputs.
//!
//! The mock prover never computes anything: every completed job carries the
//! same all-zero proof and the same two state roots.

use serde::{Deserialize, Serialize};

use super::errors::ProverError;

/// Hex form of the `new_state_root` reported for every completed job.
pub const MOCK_NEW_STATE_ROOT_HEX: &str =
    "1212121212121212121212121212121212121212121212121212121212121212";

/// Hex form of the `new_local_exit_root` reported for every completed job.
pub const MOCK_NEW_LOCAL_EXIT_ROOT_HEX: &str =
    "1234123412341234123412341234123412341234123412341234123412341234";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofB {
    pub proofs: Vec<String>,
}

/// Groth16-shaped proof: A and C are G1 points, B is a G2 point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    pub proof_a: Vec<String>,
    pub proof_b: Vec<ProofB>,
    pub proof_c: Vec<String>,
}

impl Proof {
    pub fn placeholder() -> Self {
        let zero_pair = || vec!["0".to_string(), "0".to_string()];
        Self {
            proof_a: zero_pair(),
            proof_b: vec![ProofB { proofs: zero_pair() }, ProofB { proofs: zero_pair() }],
            proof_c: zero_pair(),
        }
    }
}

/// State roots, as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInputs {
    pub new_state_root: String,
    pub new_local_exit_root: String,
}

impl PublicInputs {
    pub fn placeholder() -> Result<Self, ProverError> {
        Ok(Self {
            new_state_root: hex_to_decimal(MOCK_NEW_STATE_ROOT_HEX)?,
            new_local_exit_root: hex_to_decimal(MOCK_NEW_LOCAL_EXIT_ROOT_HEX)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInputsExtended {
    pub public_inputs: PublicInputs,
}

/// Convert an arbitrary-length hex literal (optional `0x` prefix) into its
/// decimal representation.
///
/// Digits are accumulated into little-endian base-10^9 limbs, so the input
/// length is not bounded by any native integer width.
pub fn hex_to_decimal(hex: &str) -> Result<String, ProverError> {
    const LIMB_BASE: u64 = 1_000_000_000;

    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if digits.is_empty() {
        return Err(ProverError::InvalidHex(hex.to_string()));
    }

    let mut limbs: Vec<u64> = vec![0];
    for ch in digits.chars() {
        let nibble = ch
            .to_digit(16)
            .ok_or_else(|| ProverError::InvalidHex(hex.to_string()))? as u64;

        let mut carry = nibble;
        for limb in limbs.iter_mut() {
            let acc = *limb * 16 + carry;
            *limb = acc % LIMB_BASE;
            carry = acc / LIMB_BASE;
        }
        while carry > 0 {
            limbs.push(carry % LIMB_BASE);
            carry /= LIMB_BASE;
        }
    }

    let mut out = String::new();
    let mut iter = limbs.iter().rev();
    if let Some(most_significant) = iter.next() {
        out.push_str(&most_significant.to_string());
    }
    for limb in iter {
        out.push_str(&format!("{limb:09}"));
    }
    Ok(out)
}
