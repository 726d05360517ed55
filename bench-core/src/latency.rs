#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Synthetic extra latency layered onto measured operations.
//!
//! The harness can pad every timed operation with a fixed artificial delay
//! simulating additional computational cost. The pad is an explicit strategy
//! value injected through configuration and executes inline on the measuring
//! thread, inside the timed window. Tests disable it for determinism. It is
//! an additive wait, not a scheduling primitive.

use std::time::Duration;

/// Additive synthetic workload applied inside a timed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraLatency {
    /// No synthetic pad; measurements reflect the primitive alone.
    #[default]
    Disabled,
    /// A fixed deterministic delay added to every measured operation.
    Fixed(Duration),
}

impl ExtraLatency {
    /// Fixed pad expressed in whole microseconds.
    #[must_use]
    pub const fn fixed_micros(micros: u64) -> Self {
        Self::Fixed(Duration::from_micros(micros))
    }

    /// Executes the pad on the calling thread. `Disabled` returns
    /// immediately.
    pub fn apply(&self) {
        match self {
            Self::Disabled => {}
            Self::Fixed(delay) => std::thread::sleep(*delay),
        }
    }
}
