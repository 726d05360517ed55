#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! KemBench - Comparative Key-Establishment Benchmarks
//!
//! Measures how long complete key-establishment cycles take across
//! classical public-key families and lattice KEMs, side by side on the same
//! host. Classical families (RSA-OAEP transport, ECDH agreement,
//! finite-field DH) run in process; lattice KEM timings come from external
//! tools whose transcripts the harness parses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kembench::{render_table, BenchmarkSuite, SuiteConfig};
//!
//! let suite = BenchmarkSuite::new(SuiteConfig::new()
//!     .with_kem_tool("/usr/local/bin/kemprobe"));
//! let table = suite.run()?;
//! println!("{}", render_table(&table, chrono::Utc::now()));
//! ```
//!
//! ## Measurement Model
//!
//! Every family reports three wall-clock timings, one per strength tier
//! (Small, Medium, Large), each covering one full establish-and-verify
//! cycle. Families without three tiers zero-fill the rest; an external tool
//! whose transcript cannot be parsed into exactly three values records the
//! all-zero sentinel instead of partial data. Rendering turns zero cells
//! into `-`:
//!
//! ```
//! use kembench::format_time;
//!
//! assert_eq!(format_time(1.5), "1.500s");
//! assert_eq!(format_time(0.0025), "2.500ms");
//! ```

pub mod config;
pub mod report;
pub mod suite;

pub use config::SuiteConfig;
pub use report::{format_time, render_table};
pub use suite::{
    BenchmarkSuite, FamilyResult, ResultTable, FAMILY_DH, FAMILY_ECDH, FAMILY_ML_KEM,
    FAMILY_ML_KEM_ALT, FAMILY_RSA,
};

pub use bench_core::{
    init_tracing, BenchError, DurationSeconds, ExtraLatency, ResultSet, Strength, TimedOperation,
};
pub use bench_harness as harness;
pub use bench_harness::{extract_result_set, ExternalTool, OutputLayout};
pub use bench_primitives as primitives;
