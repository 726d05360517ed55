#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ECDH key agreement over the NIST prime curves.
//!
//! Each benchmarked exchange generates two ephemeral keypairs, has both
//! sides run the agreement with the other's public key, and checks the two
//! shared secrets match. P-256, P-384, and P-521 form the three strength
//! tiers of the family.

use aws_lc_rs::agreement::{self, EphemeralPrivateKey, UnparsedPublicKey};
use subtle::ConstantTimeEq;
use tracing::debug;

use bench_core::error::{BenchError, Result};

use crate::secret::SharedSecret;

/// NIST prime curve used for one ECDH exchange, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcCurve {
    /// NIST P-256 (secp256r1).
    P256,
    /// NIST P-384 (secp384r1).
    P384,
    /// NIST P-521 (secp521r1).
    P521,
}

impl EcCurve {
    /// Every benchmarked curve, weakest first.
    pub const ALL: [Self; 3] = [Self::P256, Self::P384, Self::P521];

    /// Curve name as printed in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::P384 => "P-384",
            Self::P521 => "P-521",
        }
    }

    fn algorithm(&self) -> &'static agreement::Algorithm {
        match self {
            Self::P256 => &agreement::ECDH_P256,
            Self::P384 => &agreement::ECDH_P384,
            Self::P521 => &agreement::ECDH_P521,
        }
    }
}

/// Ephemeral keypair for one side of an ECDH exchange.
pub struct EcdhKeyPair {
    curve: EcCurve,
    private: EphemeralPrivateKey,
    public_bytes: Vec<u8>,
}

impl EcdhKeyPair {
    /// Generates a fresh ephemeral keypair on `curve`.
    ///
    /// # Errors
    ///
    /// [`BenchError::OperationFailed`] when the backend rejects the request.
    pub fn generate(curve: EcCurve) -> Result<Self> {
        let rng = aws_lc_rs::rand::SystemRandom::new();
        let private =
            EphemeralPrivateKey::generate(curve.algorithm(), &rng).map_err(|_e| {
                BenchError::OperationFailed {
                    operation: format!("ECDH {}", curve.name()),
                    detail: "key generation failed".to_string(),
                }
            })?;
        let public = private.compute_public_key().map_err(|_e| BenchError::OperationFailed {
            operation: format!("ECDH {}", curve.name()),
            detail: "public key computation failed".to_string(),
        })?;

        Ok(Self { curve, private, public_bytes: public.as_ref().to_vec() })
    }

    /// Public key bytes for transmission, in uncompressed point form.
    #[must_use]
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.public_bytes
    }

    /// Performs the agreement with a peer's public key.
    ///
    /// Consumes the private key so the ephemeral key cannot be reused.
    ///
    /// # Errors
    ///
    /// [`BenchError::OperationFailed`] when the peer key is rejected or the
    /// agreement fails.
    pub fn agree(self, peer_public_bytes: &[u8]) -> Result<SharedSecret> {
        let peer_public = UnparsedPublicKey::new(self.curve.algorithm(), peer_public_bytes);

        agreement::agree_ephemeral(
            self.private,
            peer_public,
            BenchError::OperationFailed {
                operation: format!("ECDH {}", self.curve.name()),
                detail: "key agreement failed".to_string(),
            },
            |shared_secret| Ok(SharedSecret::from(shared_secret)),
        )
    }
}

impl std::fmt::Debug for EcdhKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EcdhKeyPair")
            .field("curve", &self.curve)
            .field("public_bytes", &self.public_bytes)
            .field("private", &"[REDACTED]")
            .finish()
    }
}

/// Runs one full two-party ECDH exchange on `curve`.
///
/// # Errors
///
/// [`BenchError::OperationFailed`] when key generation or agreement fails,
/// [`BenchError::CorrectnessViolation`] when the two sides derive different
/// shared secrets.
pub fn ecdh_exchange(curve: EcCurve) -> Result<()> {
    let alice = EcdhKeyPair::generate(curve)?;
    let bob = EcdhKeyPair::generate(curve)?;

    let alice_public = alice.public_key_bytes().to_vec();
    let bob_public = bob.public_key_bytes().to_vec();

    let alice_secret = alice.agree(&bob_public)?;
    let bob_secret = bob.agree(&alice_public)?;

    if !bool::from(alice_secret.ct_eq(&bob_secret)) {
        return Err(BenchError::CorrectnessViolation {
            operation: format!("ECDH {}", curve.name()),
            detail: "the two sides derived different shared secrets".to_string(),
        });
    }

    debug!(curve = curve.name(), "ECDH exchange verified");
    Ok(())
}
