#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! The benchmark catalogue and suite runner.
//!
//! The suite runs a fixed catalogue in a fixed order: RSA transport, ECDH
//! agreement, finite-field DH, then the external lattice KEM tool, followed
//! by an optional second lattice tool. Families run sequentially on one
//! thread; measurements never contend with each other. A correctness
//! failure anywhere aborts the whole run.

use std::path::Path;

use tracing::{debug, info};

use bench_core::error::Result;
use bench_core::types::{ResultSet, STRENGTH_COUNT};
use bench_core::TimedOperation;
use bench_harness::{extract_result_set, ExternalTool, OutputLayout};
use bench_primitives::{dh_exchange, ecdh_exchange, rsa_roundtrip, EcCurve, RSA_KEY_SIZES};

use crate::config::SuiteConfig;

/// Family name for RSA-OAEP key transport.
pub const FAMILY_RSA: &str = "RSA";
/// Family name for ECDH key agreement.
pub const FAMILY_ECDH: &str = "ECDH";
/// Family name for finite-field Diffie-Hellman.
pub const FAMILY_DH: &str = "DH";
/// Family name for the external lattice KEM tool.
pub const FAMILY_ML_KEM: &str = "ML-KEM";
/// Family name for the optional second lattice tool.
pub const FAMILY_ML_KEM_ALT: &str = "ML-KEM (alt)";

/// One family's recorded timings.
#[derive(Debug, Clone, PartialEq)]
pub struct FamilyResult {
    name: String,
    set: ResultSet,
}

impl FamilyResult {
    /// Family name as shown in reports.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The per-strength timing triple.
    #[must_use]
    pub fn set(&self) -> ResultSet {
        self.set
    }
}

/// Results of one suite run, in catalogue order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    families: Vec<FamilyResult>,
}

impl ResultTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a family's results, preserving insertion order.
    pub fn push(&mut self, name: &str, set: ResultSet) {
        self.families.push(FamilyResult { name: name.to_string(), set });
    }

    /// Looks a family up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ResultSet> {
        self.families.iter().find(|family| family.name == name).map(|family| family.set)
    }

    /// All families, in the order they were recorded.
    #[must_use]
    pub fn families(&self) -> &[FamilyResult] {
        &self.families
    }

    /// Number of recorded families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Sequential runner for the whole catalogue.
#[derive(Debug)]
pub struct BenchmarkSuite {
    config: SuiteConfig,
    timed: TimedOperation,
}

impl BenchmarkSuite {
    /// Builds a suite from `config`.
    #[must_use]
    pub fn new(config: SuiteConfig) -> Self {
        let timed = TimedOperation::with_latency(config.extra_latency);
        Self { config, timed }
    }

    /// The configuration this suite runs with.
    #[must_use]
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Runs every catalogued family and collects the table.
    ///
    /// # Errors
    ///
    /// The first [`BenchError`](bench_core::BenchError) from any family
    /// aborts the run: a correctness violation or backend failure in an
    /// in-process primitive, or a launch failure or expired bounded wait
    /// for an external tool. An external tool whose transcript merely fails
    /// to parse is not an error; its family records the all-zero sentinel.
    pub fn run(&self) -> Result<ResultTable> {
        let mut table = ResultTable::new();

        table.push(FAMILY_RSA, self.measure_rsa()?);
        table.push(FAMILY_ECDH, self.measure_ecdh()?);
        table.push(FAMILY_DH, self.measure_dh()?);
        table.push(
            FAMILY_ML_KEM,
            self.measure_external(&self.config.kem_tool, OutputLayout::Bracketed)?,
        );
        if let Some(rival) = &self.config.rival_tool {
            table.push(FAMILY_ML_KEM_ALT, self.measure_external(rival, OutputLayout::Flat)?);
        }

        debug!(families = table.len(), "suite run complete");
        Ok(table)
    }

    fn measure_rsa(&self) -> Result<ResultSet> {
        info!(family = FAMILY_RSA, "measuring RSA-OAEP key transport");
        let mut collected = Vec::with_capacity(STRENGTH_COUNT);
        for bits in RSA_KEY_SIZES {
            let label = format!("RSA-{bits}");
            collected.push(self.timed.run(&label, || rsa_roundtrip(bits))?);
        }
        Ok(ResultSet::from_collected(&collected))
    }

    fn measure_ecdh(&self) -> Result<ResultSet> {
        info!(family = FAMILY_ECDH, "measuring ECDH key agreement");
        let mut collected = Vec::with_capacity(STRENGTH_COUNT);
        for curve in EcCurve::ALL {
            let label = format!("ECDH {}", curve.name());
            collected.push(self.timed.run(&label, || ecdh_exchange(curve))?);
        }
        Ok(ResultSet::from_collected(&collected))
    }

    fn measure_dh(&self) -> Result<ResultSet> {
        info!(family = FAMILY_DH, "measuring finite-field DH");
        let measured = self.timed.run("DH 1024", dh_exchange)?;
        Ok(ResultSet::from_single(measured))
    }

    fn measure_external(&self, program: &Path, layout: OutputLayout) -> Result<ResultSet> {
        info!(
            tool = %program.display(),
            layout = layout.name(),
            "invoking external lattice benchmark"
        );
        let mut tool = ExternalTool::new(program);
        if let Some(limit) = self.config.timeout {
            tool = tool.with_timeout(limit);
        }
        let output = tool.capture_stdout()?;
        Ok(extract_result_set(output.text(), layout))
    }
}
