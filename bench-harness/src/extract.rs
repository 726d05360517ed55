#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Extraction of timing triples from tool transcripts.
//!
//! External tools report one measurement per security strength as a line of
//! the form `Total time: <number>µs`. Two transcript layouts are supported:
//!
//! - [`OutputLayout::Bracketed`]: only the line immediately after a marker
//!   line containing `Benchmarking Kyber` is examined, so surrounding
//!   progress chatter cannot be misread as a measurement.
//! - [`OutputLayout::Flat`]: every line is examined.
//!
//! Extraction is all-or-nothing: anything other than exactly three
//! measurements, in the strength order the tool printed them, yields the
//! all-zero sentinel set. A malformed value on an otherwise matching line is
//! treated as no match for that line, never as a fatal error.

use tracing::warn;

use bench_core::types::{DurationSeconds, ResultSet, STRENGTH_COUNT};

/// Marker substring that opens one measurement block in bracketed output.
pub const BRACKETED_MARKER: &str = "Benchmarking Kyber";

/// Prefix of a measurement line, up to the whitespace before the value.
const VALUE_PREFIX: &str = "Total time:";

/// Transcript shape an external tool produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// Measurement lines are announced by a preceding marker line.
    Bracketed,
    /// Every line is a candidate measurement line.
    Flat,
}

impl OutputLayout {
    /// Human-readable layout name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bracketed => "bracketed",
            Self::Flat => "flat",
        }
    }
}

/// Extracts the per-strength timing triple from a tool transcript.
///
/// Returns [`ResultSet::SENTINEL`] unless exactly [`STRENGTH_COUNT`] values
/// were found. Values are converted from microseconds to seconds and kept in
/// transcript order.
#[must_use]
pub fn extract_result_set(transcript: &str, layout: OutputLayout) -> ResultSet {
    let collected: Vec<DurationSeconds> = match layout {
        OutputLayout::Bracketed => collect_bracketed(transcript),
        OutputLayout::Flat => collect_flat(transcript),
    };
    if collected.len() != STRENGTH_COUNT {
        warn!(
            layout = layout.name(),
            found = collected.len(),
            expected = STRENGTH_COUNT,
            "transcript did not yield a full timing triple; recording sentinel"
        );
    }
    ResultSet::from_collected(&collected)
}

fn collect_bracketed(transcript: &str) -> Vec<DurationSeconds> {
    let lines: Vec<&str> = transcript.lines().collect();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(BRACKETED_MARKER))
        .filter_map(|(index, _)| {
            lines.get(index + 1).and_then(|next| parse_value_line(next))
        })
        .map(DurationSeconds::from_micros)
        .collect()
}

fn collect_flat(transcript: &str) -> Vec<DurationSeconds> {
    transcript
        .lines()
        .filter_map(parse_value_line)
        .map(DurationSeconds::from_micros)
        .collect()
}

/// Parses `Total time: <number>µs`, returning the value in microseconds.
///
/// The prefix must be followed by at least one whitespace character, the
/// number by `µs` with nothing in between. Any deviation, including a value
/// that is not a valid float, makes the line a non-match.
fn parse_value_line(line: &str) -> Option<f64> {
    let (_, after) = line.split_once(VALUE_PREFIX)?;
    let trimmed = after.trim_start();
    if trimmed.len() == after.len() {
        return None;
    }
    let number_len = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    if number_len == 0 {
        return None;
    }
    let (number, rest) = trimmed.split_at(number_len);
    if !rest.starts_with("µs") {
        return None;
    }
    number.parse::<f64>().ok()
}
