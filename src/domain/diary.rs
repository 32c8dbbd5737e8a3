//! Tasting diary domain model.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// One tasting note persisted in the diary blob.
///
/// Field names follow the persisted JSON layout (`wineName` is camelCase on
/// disk). Entries are never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: String,
    pub date: String,
    pub wine_name: String,
    pub content: String,
}

impl DiaryEntry {
    /// Returns the entry date formatted as `YYYY-MM-DD`.
    ///
    /// RFC 3339 timestamps and plain ISO dates are normalized; any other text
    /// is returned verbatim, since the stored date is free-form.
    ///
    /// # Examples
    ///
    /// ```
    /// use sommelier::domain::DiaryEntry;
    ///
    /// let entry = DiaryEntry {
    ///     id: "1".into(),
    ///     date: "2024-03-09T19:30:00+09:00".into(),
    ///     wine_name: "Barolo".into(),
    ///     content: "Tar and roses".into(),
    /// };
    /// assert_eq!(entry.display_date(), "2024-03-09");
    /// ```
    #[must_use]
    pub fn display_date(&self) -> String {
        let raw = self.date.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return timestamp.date_naive().format("%Y-%m-%d").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%Y-%m-%d").to_string();
        }

        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str) -> DiaryEntry {
        DiaryEntry {
            id: "e1".to_string(),
            date: date.to_string(),
            wine_name: "Chablis".to_string(),
            content: "Flinty".to_string(),
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&entry("2024-01-02")).unwrap();
        assert!(json.contains("\"wineName\":\"Chablis\""));
        assert!(!json.contains("wine_name"));
    }

    #[test]
    fn display_date_keeps_unknown_formats() {
        assert_eq!(entry("2024-01-02").display_date(), "2024-01-02");
        assert_eq!(entry("2024. 1. 2. 오후 7:00").display_date(), "2024. 1. 2. 오후 7:00");
    }
}
