//! Output file naming policy.

use chrono::NaiveDateTime;

/// Combine a timestamp and the original file name:
/// `YYYY-MM-DD_HH-MM-SS_<original>`.
///
/// Callers pass the current local time (`Local::now().naive_local()`);
/// taking it as a parameter keeps the policy testable.
pub fn timestamped_name(original: &str, at: NaiveDateTime) -> String {
    format!("{}_{}", at.format("%Y-%m-%d_%H-%M-%S"), original)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn prefixes_timestamp_to_original_name() {
        let at = NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap();
        assert_eq!(
            timestamped_name("report.csv", at),
            "2026-08-25_14-03-09_report.csv"
        );
    }
}
