#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Classical key-establishment primitives for the KemBench harness.
//!
//! Each module runs one complete establish-and-verify cycle of a family the
//! harness measures in process:
//!
//! - **rsa**: RSA-OAEP session key transport at 1024, 2048, and 4096 bits
//! - **ecdh**: ECDH key agreement on NIST P-256, P-384, and P-521
//! - **dh**: finite-field Diffie-Hellman in the fixed 1024-bit MODP group
//!
//! Every cycle ends with a constant-time comparison of the secrets both
//! sides derived; a mismatch surfaces as
//! [`BenchError::CorrectnessViolation`](bench_core::BenchError::CorrectnessViolation)
//! and is never retried.

pub mod dh;
pub mod ecdh;
pub mod rsa;
pub mod secret;

pub use crate::dh::{dh_exchange, DhKeyPair, DH_MODULUS_BITS};
pub use crate::ecdh::{ecdh_exchange, EcCurve, EcdhKeyPair};
pub use crate::rsa::{rsa_roundtrip, RSA_KEY_SIZES, SESSION_KEY_LEN};
pub use crate::secret::SharedSecret;
