#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # KemBench Core
//!
//! Shared foundation of the KemBench comparative benchmarking harness:
//! the error taxonomy, the duration/result value types, the wall-clock
//! timing wrapper, the injectable synthetic-latency strategy, and logging
//! setup.
//!
//! Measurements are deliberately single-shot: this harness compares the
//! wall-clock cost of one representative operation per algorithm and
//! parameter strength; it is not a statistical benchmarking framework.
//!
//! # Example
//!
//! ```rust
//! use bench_core::{TimedOperation, ExtraLatency};
//!
//! let timed = TimedOperation::with_latency(ExtraLatency::Disabled);
//! let measured = timed.run("noop", || Ok(()))?;
//! assert!(measured.seconds() >= 0.0);
//! # Ok::<(), bench_core::BenchError>(())
//! ```

pub mod error;
pub mod latency;
pub mod logging;
pub mod timing;
pub mod types;

pub use error::{BenchError, Result};
pub use latency::ExtraLatency;
pub use logging::init_tracing;
pub use timing::{TimedOperation, Timer};
pub use types::{DurationSeconds, ResultSet, Strength, STRENGTH_COUNT};
