#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Console rendering of a finished result table.

use chrono::{DateTime, Utc};

use bench_core::types::{DurationSeconds, Strength};

use crate::suite::ResultTable;

const NAME_WIDTH: usize = 14;
const CELL_WIDTH: usize = 10;

/// Formats a duration in seconds with the unit that keeps the number short.
///
/// Thresholds are inclusive at each unit boundary: `1.0` renders as
/// `1.000s`, `0.001` as `1.000ms`, `0.000001` as `1.00µs`. Everything
/// below a microsecond renders in nanoseconds, including zero.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if seconds >= 1.0 {
        format!("{seconds:.3}s")
    } else if seconds >= 1e-3 {
        format!("{:.3}ms", seconds * 1e3)
    } else if seconds >= 1e-6 {
        format!("{:.2}µs", seconds * 1e6)
    } else {
        format!("{:.2}ns", seconds * 1e9)
    }
}

fn cell(value: DurationSeconds) -> String {
    if value.is_zero() {
        "-".to_string()
    } else {
        format_time(value.seconds())
    }
}

fn border(left: &str, joint: &str, right: &str) -> String {
    let name_bar = "─".repeat(NAME_WIDTH + 2);
    let cell_bar = "─".repeat(CELL_WIDTH + 2);
    format!("{left}{name_bar}{joint}{cell_bar}{joint}{cell_bar}{joint}{cell_bar}{right}")
}

/// Renders the table as box-drawn text, one row per family.
///
/// Zero cells render as `-`: either a strength the family does not offer or
/// a sentinel set from an unparseable external transcript. The caller
/// supplies the timestamp.
#[must_use]
pub fn render_table(table: &ResultTable, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();

    let stamp = generated_at.format("%Y-%m-%d %H:%M:%S UTC");
    out.push_str(&format!("KemBench results (generated {stamp})\n\n"));

    out.push_str(&border("┌", "┬", "┐"));
    out.push('\n');
    out.push_str(&format!("│ {:<NAME_WIDTH$} ", "Algorithm"));
    for strength in Strength::ALL {
        out.push_str(&format!("│ {:>CELL_WIDTH$} ", strength.label()));
    }
    out.push_str("│\n");
    out.push_str(&border("├", "┼", "┤"));
    out.push('\n');

    for family in table.families() {
        out.push_str(&format!("│ {:<NAME_WIDTH$} ", family.name()));
        for strength in Strength::ALL {
            out.push_str(&format!("│ {:>CELL_WIDTH$} ", cell(family.set().get(strength))));
        }
        out.push_str("│\n");
    }

    out.push_str(&border("└", "┴", "┘"));
    out.push('\n');
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use bench_core::types::ResultSet;
    use chrono::TimeZone;

    use crate::suite::{FAMILY_DH, FAMILY_ML_KEM, FAMILY_RSA};

    fn set_of(seconds: [f64; 3]) -> ResultSet {
        ResultSet::new([
            DurationSeconds::from_micros(seconds[0] * 1e6),
            DurationSeconds::from_micros(seconds[1] * 1e6),
            DurationSeconds::from_micros(seconds[2] * 1e6),
        ])
    }

    #[test]
    fn whole_seconds_render_with_three_decimals() {
        assert_eq!(format_time(1.5), "1.500s");
        assert_eq!(format_time(1.0), "1.000s");
        assert_eq!(format_time(12.3456), "12.346s");
    }

    #[test]
    fn milliseconds_render_with_three_decimals() {
        assert_eq!(format_time(0.0025), "2.500ms");
        assert_eq!(format_time(0.001), "1.000ms");
        assert_eq!(format_time(0.0012), "1.200ms");
    }

    #[test]
    fn microseconds_render_with_two_decimals() {
        assert_eq!(format_time(3.0e-6), "3.00µs");
        assert_eq!(format_time(1.0e-6), "1.00µs");
        assert_eq!(format_time(0.000_999), "999.00µs");
    }

    #[test]
    fn nanoseconds_cover_everything_smaller() {
        assert_eq!(format_time(4.5e-9), "4.50ns");
        assert_eq!(format_time(9.99e-7), "999.00ns");
        assert_eq!(format_time(0.0), "0.00ns");
    }

    #[test]
    fn table_rows_follow_insertion_order() {
        let mut table = ResultTable::new();
        table.push(FAMILY_RSA, set_of([1.5, 0.0025, 3.0e-6]));
        table.push(FAMILY_DH, ResultSet::from_single(DurationSeconds::from_micros(250.0)));

        let stamp = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let rendered = render_table(&table, stamp);

        let rsa_at = rendered.find(FAMILY_RSA).unwrap();
        let dh_at = rendered.find(FAMILY_DH).unwrap();
        assert!(rsa_at < dh_at);
        assert!(rendered.contains("1.500s"));
        assert!(rendered.contains("2.500ms"));
        assert!(rendered.contains("3.00µs"));
        assert!(rendered.contains("generated 2026-08-24 12:00:00 UTC"));
    }

    #[test]
    fn zero_cells_render_as_dashes() {
        let mut table = ResultTable::new();
        table.push(FAMILY_DH, ResultSet::from_single(DurationSeconds::from_micros(250.0)));
        table.push(FAMILY_ML_KEM, ResultSet::SENTINEL);

        let stamp = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let rendered = render_table(&table, stamp);

        let dh_row = rendered.lines().find(|line| line.contains(FAMILY_DH)).unwrap();
        assert_eq!(dh_row.matches(" - ").count(), 2);
        assert!(dh_row.contains("250.00µs"));

        let kem_row = rendered.lines().find(|line| line.contains(FAMILY_ML_KEM)).unwrap();
        assert_eq!(kem_row.matches(" - ").count(), 3);
    }

    #[test]
    fn header_names_the_strength_tiers() {
        let table = ResultTable::new();
        let stamp = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let rendered = render_table(&table, stamp);
        for label in ["Algorithm", "Small", "Medium", "Large"] {
            assert!(rendered.contains(label), "missing header {label}");
        }
    }
}
