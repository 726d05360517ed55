#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Invocation of external benchmark executables.
//!
//! The invoker launches a tool with no arguments and the default working
//! directory, captures its complete standard output as text, and hands the
//! transcript back regardless of the exit status; a tool that fails after
//! printing valid lines still yields a usable transcript. Standard error is
//! inherited rather than captured, keeping tool diagnostics on the console.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use bench_core::error::{BenchError, Result};

/// How often a bounded wait polls the child for exit.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Captured output of one external tool run.
#[derive(Debug)]
pub struct RawBenchmarkOutput {
    stdout: String,
    status: ExitStatus,
}

impl RawBenchmarkOutput {
    /// The complete captured standard output, in the order produced.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.stdout
    }

    /// Whether the tool exited successfully. Kept for diagnostics only;
    /// extraction never consults it.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// An external benchmark executable, invoked with no arguments.
///
/// By default the invoker blocks until the tool exits; a hung tool hangs
/// the suite. An optional bounded wait can be layered on with
/// [`with_timeout`](Self::with_timeout); when the limit passes, the child is
/// killed and the invocation fails with
/// [`BenchError::TimeoutExceeded`].
#[derive(Debug, Clone)]
pub struct ExternalTool {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl ExternalTool {
    /// Tool at `program`, unbounded wait.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), timeout: None }
    }

    /// Adds a bounded wait to this tool's invocations.
    #[must_use]
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Path of the executable.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Runs the tool and captures its standard output.
    ///
    /// A non-zero exit is tolerated (logged, then returned with whatever was
    /// captured). Output that is not valid UTF-8 is converted lossily.
    ///
    /// # Errors
    ///
    /// [`BenchError::ProcessLaunch`] when the executable is missing or not
    /// runnable; [`BenchError::TimeoutExceeded`] when a configured bounded
    /// wait expires.
    pub fn capture_stdout(&self) -> Result<RawBenchmarkOutput> {
        debug!(program = %self.program.display(), "invoking external benchmark tool");
        let output = match self.timeout {
            None => self.capture_unbounded()?,
            Some(limit) => self.capture_bounded(limit)?,
        };
        if !output.success() {
            warn!(
                program = %self.program.display(),
                "benchmark tool exited with failure; parsing captured output anyway"
            );
        }
        Ok(output)
    }

    fn capture_unbounded(&self) -> Result<RawBenchmarkOutput> {
        let output = Command::new(&self.program)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| BenchError::ProcessLaunch {
                program: self.program.clone(),
                source,
            })?;
        Ok(RawBenchmarkOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: output.status,
        })
    }

    fn capture_bounded(&self, limit: Duration) -> Result<RawBenchmarkOutput> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| BenchError::ProcessLaunch {
                program: self.program.clone(),
                source,
            })?;

        let Some(mut pipe) = child.stdout.take() else {
            return Err(BenchError::Io(std::io::Error::other("child stdout pipe missing")));
        };

        // Drain the pipe on a helper thread so a chatty tool cannot deadlock
        // against a full pipe while this thread polls for exit.
        let reader = std::thread::spawn(move || {
            let mut raw = Vec::new();
            let _ = pipe.read_to_end(&mut raw);
            String::from_utf8_lossy(&raw).into_owned()
        });

        let deadline = Instant::now() + limit;
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    let _ = reader.join();
                    return Err(BenchError::TimeoutExceeded {
                        program: self.program.clone(),
                        limit,
                    });
                }
                None => std::thread::sleep(POLL_INTERVAL),
            }
        };

        let stdout = reader.join().unwrap_or_default();
        Ok(RawBenchmarkOutput { stdout, status })
    }
}
