#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! RSA-OAEP session key transport.
//!
//! The RSA family is benchmarked as a key transport: generate a keypair,
//! wrap a fresh 16-byte session key under RSA-OAEP with SHA-256, unwrap it
//! with the private key, and check the unwrapped key matches. Key generation
//! dominates the measurement at every size.

use rand::rngs::OsRng;
use rand::RngCore;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use tracing::debug;

use bench_core::error::{BenchError, Result};

use crate::secret::SharedSecret;

/// Modulus sizes benchmarked, weakest first.
pub const RSA_KEY_SIZES: [usize; 3] = [1024, 2048, 4096];

/// Transported session key length in bytes.
pub const SESSION_KEY_LEN: usize = 16;

/// Runs one full RSA-OAEP transport cycle at the given modulus size.
///
/// # Errors
///
/// [`BenchError::OperationFailed`] when key generation or an OAEP operation
/// fails, [`BenchError::CorrectnessViolation`] when the unwrapped session
/// key differs from the one that was wrapped.
pub fn rsa_roundtrip(bits: usize) -> Result<()> {
    let operation = format!("RSA-{bits}");

    let private = RsaPrivateKey::new(&mut OsRng, bits).map_err(|e| BenchError::OperationFailed {
        operation: operation.clone(),
        detail: format!("key generation failed: {e}"),
    })?;
    let public = RsaPublicKey::from(&private);

    let mut session_key = [0u8; SESSION_KEY_LEN];
    OsRng.fill_bytes(&mut session_key);

    let wrapped = public
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), &session_key)
        .map_err(|e| BenchError::OperationFailed {
            operation: operation.clone(),
            detail: format!("OAEP encryption failed: {e}"),
        })?;
    let unwrapped =
        private.decrypt(Oaep::new::<Sha256>(), &wrapped).map_err(|e| {
            BenchError::OperationFailed {
                operation: operation.clone(),
                detail: format!("OAEP decryption failed: {e}"),
            }
        })?;

    let sent = SharedSecret::from(&session_key[..]);
    let received = SharedSecret::new(unwrapped);
    if !bool::from(sent.ct_eq(&received)) {
        return Err(BenchError::CorrectnessViolation {
            operation,
            detail: "unwrapped session key does not match the wrapped one".to_string(),
        });
    }

    debug!(bits, "RSA-OAEP transport cycle verified");
    Ok(())
}
