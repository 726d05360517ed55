#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Suite configuration.

use std::path::PathBuf;
use std::time::Duration;

use bench_core::ExtraLatency;

/// Configuration for one suite run.
///
/// # Examples
///
/// ```
/// use kembench::SuiteConfig;
/// use std::time::Duration;
///
/// let config = SuiteConfig::new()
///     .with_kem_tool("/usr/local/bin/kemprobe")
///     .with_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    /// External tool reporting lattice KEM timings in bracketed layout.
    ///
    /// Default: `kemprobe`, resolved through `PATH`.
    pub kem_tool: PathBuf,

    /// Optional second lattice tool reporting in flat layout, recorded as
    /// its own family for side-by-side comparison.
    ///
    /// Default: none.
    pub rival_tool: Option<PathBuf>,

    /// Bounded wait applied to every external tool invocation.
    ///
    /// Default: none, meaning the suite waits as long as the tool runs.
    pub timeout: Option<Duration>,

    /// Extra latency folded into every timed window.
    ///
    /// Default: [`ExtraLatency::Disabled`].
    pub extra_latency: ExtraLatency,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            kem_tool: PathBuf::from("kemprobe"),
            rival_tool: None,
            timeout: None,
            extra_latency: ExtraLatency::Disabled,
        }
    }
}

impl SuiteConfig {
    /// Create a configuration with the defaults above.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lattice KEM tool path and return self for method chaining.
    #[must_use]
    pub fn with_kem_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.kem_tool = tool.into();
        self
    }

    /// Set the comparison tool path and return self for method chaining.
    #[must_use]
    pub fn with_rival_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.rival_tool = Some(tool.into());
        self
    }

    /// Set the bounded wait and return self for method chaining.
    #[must_use]
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Set the extra latency strategy and return self for method chaining.
    #[must_use]
    pub fn with_extra_latency(mut self, latency: ExtraLatency) -> Self {
        self.extra_latency = latency;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let config = SuiteConfig::new();
        assert_eq!(config.kem_tool, PathBuf::from("kemprobe"));
        assert!(config.rival_tool.is_none());
        assert!(config.timeout.is_none());
        assert_eq!(config.extra_latency, ExtraLatency::Disabled);
    }

    #[test]
    fn builders_chain() {
        let config = SuiteConfig::new()
            .with_kem_tool("/opt/probe")
            .with_rival_tool("/opt/rival")
            .with_timeout(Duration::from_secs(30))
            .with_extra_latency(ExtraLatency::fixed_micros(1));

        assert_eq!(config.kem_tool, PathBuf::from("/opt/probe"));
        assert_eq!(config.rival_tool, Some(PathBuf::from("/opt/rival")));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.extra_latency, ExtraLatency::fixed_micros(1));
    }
}
