#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! External-tool invocation and transcript parsing for KemBench.
//!
//! Lattice KEM measurements come from separate executables rather than
//! in-process calls. This crate runs such a tool, captures what it printed,
//! and turns the transcript into the per-strength timing triple the suite
//! records:
//!
//! ```
//! use bench_harness::{extract_result_set, OutputLayout};
//!
//! let transcript = "\
//! Benchmarking Kyber-512
//! Total time: 1200.0µs
//! Benchmarking Kyber-768
//! Total time: 1500.0µs
//! Benchmarking Kyber-1024
//! Total time: 1800.0µs
//! ";
//! let set = extract_result_set(transcript, OutputLayout::Bracketed);
//! assert_eq!(set.values()[0].seconds(), 0.0012);
//! ```

pub mod extract;
pub mod invoker;

pub use extract::{extract_result_set, OutputLayout, BRACKETED_MARKER};
pub use invoker::{ExternalTool, RawBenchmarkOutput};
