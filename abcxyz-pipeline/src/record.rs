//! Record normalization: period label slicing.
//!
//! Period labels encode a 4-character year, a separator, and a 2-character
//! month at fixed offsets (`"2023-04"`, `"2023/04"`, `"202304x"` all slice
//! the same way). Labels that are too short, or whose slices are not
//! numeric, are an input-format error — the run aborts rather than silently
//! coercing.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{PeriodKey, SalesRecord};

impl PeriodKey {
    /// Derive a key from a period label: year = chars 0–3, month = chars 5–6.
    ///
    /// Returns the mismatch reason on failure; callers attach line context.
    pub fn from_label(label: &str) -> Result<PeriodKey, String> {
        let chars: Vec<char> = label.chars().collect();
        if chars.len() < 7 {
            return Err(format!(
                "period label '{}' is shorter than 7 characters",
                label
            ));
        }
        let year: String = chars[0..4].iter().collect();
        let month: String = chars[5..7].iter().collect();
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "period label '{}' has a non-numeric year slice '{}'",
                label, year
            ));
        }
        if !month.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!(
                "period label '{}' has a non-numeric month slice '{}'",
                label, month
            ));
        }
        Ok(PeriodKey { year, month })
    }
}

impl SalesRecord {
    /// The aggregation key for this record, derived from its period label.
    pub fn period_key(&self) -> Result<PeriodKey, String> {
        PeriodKey::from_label(&self.period)
    }
}

/// Validate a record's period label, attaching its 1-based position in the
/// input sequence to any failure. The loader calls this per row with real
/// CSV line numbers; callers feeding records directly use the record index.
pub fn validate_record(record: &SalesRecord, line: usize) -> AnalysisResult<()> {
    record
        .period_key()
        .map(|_| ())
        .map_err(|reason| AnalysisError::InputFormat { line, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_year_and_month_at_fixed_offsets() {
        let key = PeriodKey::from_label("2023-04").unwrap();
        assert_eq!(key.year, "2023");
        assert_eq!(key.month, "04");
    }

    #[test]
    fn separator_character_is_ignored() {
        let key = PeriodKey::from_label("2023/11").unwrap();
        assert_eq!(key.month, "11");
    }

    #[test]
    fn trailing_characters_are_ignored() {
        let key = PeriodKey::from_label("2023-04-30").unwrap();
        assert_eq!(key.year, "2023");
        assert_eq!(key.month, "04");
    }

    #[test]
    fn short_label_is_rejected() {
        let err = PeriodKey::from_label("2023-4").unwrap_err();
        assert!(err.contains("shorter than 7"));
    }

    #[test]
    fn non_numeric_month_is_rejected() {
        let err = PeriodKey::from_label("2023-ab").unwrap_err();
        assert!(err.contains("non-numeric month"));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        assert!(PeriodKey::from_label("20x3-04").is_err());
    }

    #[test]
    fn validate_record_attaches_line_context() {
        let record = SalesRecord {
            item_id: "item-1".into(),
            period: "bad".into(),
            quantity: 1.0,
            revenue: 1.0,
        };
        match validate_record(&record, 7) {
            Err(AnalysisError::InputFormat { line, .. }) => assert_eq!(line, 7),
            other => panic!("expected InputFormat, got {:?}", other),
        }
    }
}
