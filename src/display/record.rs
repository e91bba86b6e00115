//! Record display formatting
//!
//! Formats record listings as aligned tables with a total line, for both
//! the full view and the per-category view.

use crate::models::{RecordEntry, RecordKind, RecordListing};

/// Format a single record row
pub fn format_record_row(entry: &RecordEntry) -> String {
    format!(
        "{:>4}  {}  {:16}  {:24}  {:>10.2}",
        entry.id,
        entry.date.format("%Y-%m-%d"),
        truncate(&entry.category, 16),
        truncate(&entry.description, 24),
        entry.amount
    )
}

fn table_header() -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:10}  {:16}  {:24}  {:>10}\n",
        "ID", "Date", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');
    output
}

/// Format all records of a kind with a total line
pub fn format_record_listing(kind: RecordKind, listing: &RecordListing) -> String {
    if listing.is_empty() {
        return match kind {
            RecordKind::Expense => "No expenses found.\n".to_string(),
            RecordKind::Income => "No income found.\n".to_string(),
        };
    }

    let mut output = String::new();
    output.push_str(&format!("\n{}:\n\n", kind.plural_label()));
    output.push_str(&table_header());

    for entry in &listing.entries {
        output.push_str(&format_record_row(entry));
        output.push('\n');
    }

    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!("{:>60}  {:>10.2}\n", "Total Amount:", listing.total()));
    output
}

/// Format the records of one category with a per-category total line
pub fn format_category_records(
    kind: RecordKind,
    category_id: i64,
    listing: &RecordListing,
) -> String {
    if listing.is_empty() {
        return format!(
            "No {} found for category ID {}.\n",
            kind.plural_label().to_lowercase(),
            category_id
        );
    }

    let mut output = String::new();
    output.push_str(&format!(
        "\n{} for Category ID {}:\n\n",
        kind.plural_label(),
        category_id
    ));
    output.push_str(&table_header());

    for entry in &listing.entries {
        output.push_str(&format_record_row(entry));
        output.push('\n');
    }

    output.push_str(&format!(
        "\nTotal Amount for Category ID {}: {:.2}\n",
        category_id,
        listing.total()
    ));
    output
}

/// Truncate a string to a maximum number of characters.
/// Counts chars, not bytes, so multibyte text never splits mid-character.
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn listing() -> RecordListing {
        RecordListing {
            entries: vec![
                RecordEntry {
                    id: 1,
                    date: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
                    category: "groceries".into(),
                    description: "weekly shop".into(),
                    amount: 52.3,
                },
                RecordEntry {
                    id: 2,
                    date: NaiveDate::from_ymd_opt(2024, 2, 13).unwrap(),
                    category: "rent".into(),
                    description: String::new(),
                    amount: 800.0,
                },
            ],
        }
    }

    #[test]
    fn test_format_record_listing() {
        let formatted = format_record_listing(RecordKind::Expense, &listing());
        assert!(formatted.contains("Expenses:"));
        assert!(formatted.contains("2024-02-12"));
        assert!(formatted.contains("groceries"));
        assert!(formatted.contains("52.30"));
        assert!(formatted.contains("Total Amount:"));
        assert!(formatted.contains("852.30"));
    }

    #[test]
    fn test_format_empty_listing() {
        let empty = RecordListing::default();
        assert_eq!(
            format_record_listing(RecordKind::Expense, &empty),
            "No expenses found.\n"
        );
        assert_eq!(
            format_record_listing(RecordKind::Income, &empty),
            "No income found.\n"
        );
    }

    #[test]
    fn test_format_category_records() {
        let formatted = format_category_records(RecordKind::Income, 3, &listing());
        assert!(formatted.contains("Incomes for Category ID 3:"));
        assert!(formatted.contains("Total Amount for Category ID 3: 852.30"));
    }

    #[test]
    fn test_format_empty_category_records() {
        let empty = RecordListing::default();
        assert_eq!(
            format_category_records(RecordKind::Expense, 5, &empty),
            "No expenses found for category ID 5.\n"
        );
        assert_eq!(
            format_category_records(RecordKind::Income, 5, &empty),
            "No incomes found for category ID 5.\n"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10).trim(), "short");
        let result = truncate("a very long description indeed", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_cuts_on_char_boundaries() {
        // 13 two-byte chars: over the byte limit but within the char limit
        let padded = truncate("ééééééééééééé", 24);
        assert_eq!(padded.trim_end(), "ééééééééééééé");

        let cut = truncate(&"é".repeat(30), 24);
        assert_eq!(cut, format!("{}...", "é".repeat(21)));
        assert_eq!(cut.chars().count(), 24);
    }

    #[test]
    fn test_format_record_row_multibyte_text() {
        let entry = RecordEntry {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            category: "ééééééééééééé".into(),
            description: "décorations pour la fête d'été".into(),
            amount: 15.0,
        };

        let row = format_record_row(&entry);
        assert!(row.contains("ééééééééééééé"));
        assert!(row.contains("décorations pour la f..."));
    }
}
