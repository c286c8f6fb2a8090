// src/parse/rows.rs

//! Row classification by first-cell text.

/// Labels marking a row that aggregates the whole table. The source is
/// inconsistent about casing across years, so matching is case-insensitive.
pub const TOTALS_LABELS: [&str; 3] = ["TOPLAM", "GENEL TOPLAM", "TOTAL"];

/// What to do with a table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A regular data row
    Data,
    /// An aggregate row, identified by a reserved label
    Totals,
    /// An empty or header-echo row to drop
    Discard,
}

/// Classify a row from its first-cell text.
///
/// `header_label` is the declared row-key column name; a first cell equal
/// to it is a header row leaked into the body. Any other exclusion belongs
/// to the caller as a post-parse filter, not here.
pub fn classify(first_cell: &str, header_label: &str) -> RowKind {
    let label = first_cell.trim();
    if label.is_empty() || label == header_label {
        return RowKind::Discard;
    }
    let upper = label.to_uppercase();
    if TOTALS_LABELS.contains(&upper.as_str()) {
        RowKind::Totals
    } else {
        RowKind::Data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_rows() {
        assert_eq!(classify("Erkek", "Cinsiyet"), RowKind::Data);
        assert_eq!(classify("Genel Kontenjan", "Tür"), RowKind::Data);
    }

    #[test]
    fn totals_rows_case_insensitive() {
        assert_eq!(classify("TOPLAM", "Tür"), RowKind::Totals);
        assert_eq!(classify("Toplam", "Tür"), RowKind::Totals);
        assert_eq!(classify("genel toplam", "Tür"), RowKind::Totals);
        assert_eq!(classify(" Total ", "Tür"), RowKind::Totals);
    }

    #[test]
    fn discard_empty_and_header_echo() {
        assert_eq!(classify("", "Tür"), RowKind::Discard);
        assert_eq!(classify("   ", "Tür"), RowKind::Discard);
        assert_eq!(classify("Tür", "Tür"), RowKind::Discard);
    }

    #[test]
    fn no_other_labels_special_cased() {
        assert_eq!(classify("Sınavsız Geçiş Kontenjanı", "Tür"), RowKind::Data);
    }
}
