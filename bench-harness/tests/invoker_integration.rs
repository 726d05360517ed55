//! Integration tests for external tool invocation.
//!
//! The Unix-only cases build throwaway shell scripts in a temp directory and
//! run them through [`ExternalTool`], covering exit-status tolerance, empty
//! output, bounded waits, and the stderr passthrough.

use std::path::PathBuf;
use std::time::Duration;

use bench_core::BenchError;
use bench_harness::{extract_result_set, ExternalTool, OutputLayout};

#[test]
fn missing_executable_is_a_launch_failure() {
    let tool = ExternalTool::new("/nonexistent/kembench-no-such-tool");
    let err = tool.capture_stdout().expect_err("launch must fail");
    match err {
        BenchError::ProcessLaunch { program, .. } => {
            assert_eq!(program, PathBuf::from("/nonexistent/kembench-no-such-tool"));
        }
        other => panic!("expected ProcessLaunch, got {other:?}"),
    }
}

#[test]
fn missing_executable_fails_bounded_wait_too() {
    let tool = ExternalTool::new("/nonexistent/kembench-no-such-tool")
        .with_timeout(Duration::from_secs(1));
    let err = tool.capture_stdout().expect_err("launch must fail");
    assert!(matches!(err, BenchError::ProcessLaunch { .. }));
}

#[cfg(unix)]
mod unix {
    use super::*;

    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use tempfile::TempDir;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}")).expect("write script");
        let mut perms = fs::metadata(&path).expect("script metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("make script executable");
        path
    }

    #[test]
    fn nonzero_exit_still_returns_captured_output() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(
            dir.path(),
            "failing-tool.sh",
            "printf 'Total time: 100.0\\302\\265s\\n'\n\
             printf 'Total time: 200.0\\302\\265s\\n'\n\
             printf 'Total time: 300.0\\302\\265s\\n'\n\
             exit 3\n",
        );

        let output = ExternalTool::new(script).capture_stdout().expect("capture");
        assert!(!output.success());

        let set = extract_result_set(output.text(), OutputLayout::Flat);
        assert!(!set.is_sentinel());
        assert_eq!(set.values()[2].seconds(), 0.0003);
    }

    #[test]
    fn tool_with_no_output_yields_empty_transcript() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(dir.path(), "silent-tool.sh", "exit 0\n");

        let output = ExternalTool::new(script).capture_stdout().expect("capture");
        assert!(output.success());
        assert!(output.text().is_empty());
        assert!(extract_result_set(output.text(), OutputLayout::Flat).is_sentinel());
    }

    #[test]
    fn stderr_is_not_part_of_the_transcript() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(
            dir.path(),
            "noisy-tool.sh",
            "echo 'diagnostic chatter' >&2\n\
             printf 'Total time: 7.5\\302\\265s\\n'\n",
        );

        let output = ExternalTool::new(script).capture_stdout().expect("capture");
        assert!(!output.text().contains("diagnostic chatter"));
        assert!(output.text().contains("Total time:"));
    }

    #[test]
    fn hung_tool_trips_the_bounded_wait() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(dir.path(), "hung-tool.sh", "sleep 5\n");

        let limit = Duration::from_millis(200);
        let err = ExternalTool::new(script)
            .with_timeout(limit)
            .capture_stdout()
            .expect_err("bounded wait must expire");
        match err {
            BenchError::TimeoutExceeded { limit: reported, .. } => {
                assert_eq!(reported, limit);
            }
            other => panic!("expected TimeoutExceeded, got {other:?}"),
        }
    }

    #[test]
    fn fast_tool_finishes_within_the_bounded_wait() {
        let dir = TempDir::new().expect("temp dir");
        let script = write_script(
            dir.path(),
            "quick-tool.sh",
            "printf 'Total time: 42.0\\302\\265s\\n'\n",
        );

        let output = ExternalTool::new(script)
            .with_timeout(Duration::from_secs(5))
            .capture_stdout()
            .expect("capture");
        assert!(output.success());
        assert!(output.text().contains("42.0"));
    }
}
