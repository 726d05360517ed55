#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Finite-field Diffie-Hellman over the 1024-bit MODP group.
//!
//! Unlike the other families, finite-field DH is benchmarked at a single
//! strength: the RFC 2409 Second Oakley Group (1024-bit prime, generator 2).
//! The group parameters are compile-time constants; a measured exchange
//! covers private-key generation and the shared-secret exponentiations,
//! never parameter setup.

use std::sync::OnceLock;

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;
use subtle::ConstantTimeEq;
use tracing::debug;

use bench_core::error::{BenchError, Result};

use crate::secret::SharedSecret;

/// Size of the fixed MODP group, in bits.
pub const DH_MODULUS_BITS: u64 = 1024;

/// Group generator.
const GENERATOR: u32 = 2;

/// RFC 2409 Second Oakley Group prime, big-endian.
const MODP_1024_PRIME: [u8; 128] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC9, 0x0F, 0xDA, 0xA2, 0x21, 0x68, 0xC2,
    0x34, 0xC4, 0xC6, 0x62, 0x8B, 0x80, 0xDC, 0x1C, 0xD1, 0x29, 0x02, 0x4E, 0x08, 0x8A, 0x67,
    0xCC, 0x74, 0x02, 0x0B, 0xBE, 0xA6, 0x3B, 0x13, 0x9B, 0x22, 0x51, 0x4A, 0x08, 0x79, 0x8E,
    0x34, 0x04, 0xDD, 0xEF, 0x95, 0x19, 0xB3, 0xCD, 0x3A, 0x43, 0x1B, 0x30, 0x2B, 0x0A, 0x6D,
    0xF2, 0x5F, 0x14, 0x37, 0x4F, 0xE1, 0x35, 0x6D, 0x6D, 0x51, 0xC2, 0x45, 0xE4, 0x85, 0xB5,
    0x76, 0x62, 0x5E, 0x7E, 0xC6, 0xF4, 0x4C, 0x42, 0xE9, 0xA6, 0x37, 0xED, 0x6B, 0x0B, 0xFF,
    0x5C, 0xB6, 0xF4, 0x06, 0xB7, 0xED, 0xEE, 0x38, 0x6B, 0xFB, 0x5A, 0x89, 0x9F, 0xA5, 0xAE,
    0x9F, 0x24, 0x11, 0x7C, 0x4B, 0x1F, 0xE6, 0x49, 0x28, 0x66, 0x51, 0xEC, 0xE6, 0x53, 0x81,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

fn modulus() -> &'static BigUint {
    static MODULUS: OnceLock<BigUint> = OnceLock::new();
    MODULUS.get_or_init(|| BigUint::from_bytes_be(&MODP_1024_PRIME))
}

/// One party's keypair in the fixed MODP group.
pub struct DhKeyPair {
    private: BigUint,
    public: BigUint,
}

impl DhKeyPair {
    /// Generates a keypair with a uniformly random private exponent
    /// in `[2, p - 2]`.
    #[must_use]
    pub fn generate() -> Self {
        let mut raw = [0u8; 128];
        OsRng.fill_bytes(&mut raw);

        // x mod (p - 3) lands in [0, p - 4]; shifting by 2 gives [2, p - 2].
        let span = modulus().clone() - 3u32;
        let private = BigUint::from_bytes_be(&raw) % span + 2u32;
        let public = BigUint::from(GENERATOR).modpow(&private, modulus());

        Self { private, public }
    }

    /// Public value `g^x mod p` for transmission.
    #[must_use]
    pub fn public_value(&self) -> &BigUint {
        &self.public
    }

    /// Derives the shared secret from a peer's public value.
    ///
    /// # Errors
    ///
    /// [`BenchError::OperationFailed`] when the peer value lies outside
    /// `[2, p - 2]`, the classic small-subgroup escape hatch.
    pub fn agree(&self, peer_public: &BigUint) -> Result<SharedSecret> {
        let lowest = BigUint::from(2u32);
        let highest = modulus().clone() - 2u32;
        if *peer_public < lowest || *peer_public > highest {
            return Err(BenchError::OperationFailed {
                operation: format!("DH {DH_MODULUS_BITS}"),
                detail: "peer public value outside [2, p - 2]".to_string(),
            });
        }
        let shared = peer_public.modpow(&self.private, modulus());
        Ok(SharedSecret::new(shared.to_bytes_be()))
    }
}

impl std::fmt::Debug for DhKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DhKeyPair")
            .field("public", &self.public)
            .field("private", &"[REDACTED]")
            .finish()
    }
}

/// Runs one full two-party DH exchange in the fixed group.
///
/// # Errors
///
/// [`BenchError::CorrectnessViolation`] when the two sides derive different
/// shared secrets.
pub fn dh_exchange() -> Result<()> {
    let alice = DhKeyPair::generate();
    let bob = DhKeyPair::generate();

    let alice_secret = alice.agree(bob.public_value())?;
    let bob_secret = bob.agree(alice.public_value())?;

    if !bool::from(alice_secret.ct_eq(&bob_secret)) {
        return Err(BenchError::CorrectnessViolation {
            operation: format!("DH {DH_MODULUS_BITS}"),
            detail: "the two sides derived different shared secrets".to_string(),
        });
    }

    debug!(bits = DH_MODULUS_BITS, "DH exchange verified");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn exchange_succeeds() {
        dh_exchange().unwrap();
    }

    #[test]
    fn modulus_has_the_advertised_size() {
        assert_eq!(modulus().bits(), DH_MODULUS_BITS);
    }

    #[test]
    fn shared_secret_fits_the_modulus() {
        let alice = DhKeyPair::generate();
        let bob = DhKeyPair::generate();
        let secret = alice.agree(bob.public_value()).unwrap();
        assert!(secret.len() <= 128);
        assert!(!secret.is_empty());
    }

    #[test]
    fn fresh_keypairs_have_distinct_publics() {
        let a = DhKeyPair::generate();
        let b = DhKeyPair::generate();
        assert_ne!(a.public_value(), b.public_value());
    }

    #[test]
    fn degenerate_peer_values_are_rejected() {
        let pair = DhKeyPair::generate();
        for bad in [
            BigUint::from(0u32),
            BigUint::from(1u32),
            modulus().clone() - 1u32,
            modulus().clone(),
        ] {
            let err = pair.agree(&bad).unwrap_err();
            assert!(matches!(err, BenchError::OperationFailed { .. }));
        }
    }

    #[test]
    fn debug_output_redacts_the_private_exponent() {
        let pair = DhKeyPair::generate();
        let printed = format!("{pair:?}");
        assert!(printed.contains("REDACTED"));
    }
}
