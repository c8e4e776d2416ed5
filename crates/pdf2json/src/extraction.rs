//! Result model for a converted document.

use serde::{Deserialize, Serialize};

/// A single table cell. `None` when the collaborator found no text in the cell.
pub type Cell = Option<String>;

/// One row of a table, left to right.
pub type Row = Vec<Cell>;

/// A detected table, rows top to bottom.
pub type Table = Vec<Row>;

/// Text and tables extracted from every processed page of a document.
///
/// Serializes with `text` before `tables`, and absent cells as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Page texts joined by newlines, trimmed of surrounding whitespace.
    pub text: String,
    /// Tables from all pages, flattened in page order.
    pub tables: Vec<Table>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_text_before_tables() {
        let extraction = Extraction {
            text: "Invoice #123".to_string(),
            tables: vec![],
        };
        let json = serde_json::to_string(&extraction).unwrap();
        assert_eq!(json, r#"{"text":"Invoice #123","tables":[]}"#);
    }

    #[test]
    fn absent_cell_serializes_as_null() {
        let extraction = Extraction {
            text: String::new(),
            tables: vec![vec![vec![Some("A".to_string()), None]]],
        };
        let json = serde_json::to_string(&extraction).unwrap();
        assert!(json.contains(r#"["A",null]"#), "got: {json}");
        assert!(!json.contains("\"None\""));
        assert!(!json.contains("\"null\""));
    }

    #[test]
    fn deserializes_null_cell_back_to_none() {
        let json = r#"{"text":"x","tables":[[[null,"2"]]]}"#;
        let extraction: Extraction = serde_json::from_str(json).unwrap();
        assert_eq!(extraction.tables[0][0][0], None);
        assert_eq!(extraction.tables[0][0][1].as_deref(), Some("2"));
    }
}
