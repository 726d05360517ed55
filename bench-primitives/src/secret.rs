#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Shared secret container used by all key-establishment families.
//!
//! Every benchmarked exchange ends with both sides holding secret bytes that
//! must agree. The container zeroizes on drop, compares in constant time,
//! and never prints its contents.

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret bytes produced by one side of a key establishment.
///
/// Clone is not implemented; secret material never outlives the exchange
/// that produced it.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    data: Vec<u8>,
}

impl SharedSecret {
    /// Wraps secret bytes. Length differs per family (16-byte session keys,
    /// curve-sized ECDH outputs, modulus-sized DH outputs).
    #[must_use]
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Secret length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&[u8]> for SharedSecret {
    fn from(data: &[u8]) -> Self {
        Self { data: data.to_vec() }
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        if self.data.len() != other.data.len() {
            return Choice::from(0);
        }
        self.data.ct_eq(&other.data)
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedSecret {}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.data.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}
