//! JSON output for an [`Extraction`].
//!
//! The single-line form separates items with `", "` and keys from values with
//! `": "`, so a document with no tables prints as
//! `{"text": "Invoice #123", "tables": []}`. Strings are written as UTF-8.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::extraction::Extraction;

/// Compact formatter with a space after every separator.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Write `extraction` as one line of JSON followed by `\n`.
pub fn write_json_line<W: io::Write>(mut writer: W, extraction: &Extraction) -> io::Result<()> {
    let mut ser = Serializer::with_formatter(&mut writer, SpacedFormatter);
    extraction.serialize(&mut ser).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Write `extraction` as indented JSON followed by `\n`.
pub fn write_json_pretty<W: io::Write>(mut writer: W, extraction: &Extraction) -> io::Result<()> {
    let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"  "));
    extraction.serialize(&mut ser).map_err(io::Error::from)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(extraction: &Extraction) -> String {
        let mut buf = Vec::new();
        write_json_line(&mut buf, extraction).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_only_document() {
        let extraction = Extraction {
            text: "Invoice #123".to_string(),
            tables: vec![],
        };
        assert_eq!(
            line(&extraction),
            "{\"text\": \"Invoice #123\", \"tables\": []}\n"
        );
    }

    #[test]
    fn tables_use_spaced_separators_and_null_cells() {
        let extraction = Extraction {
            text: String::new(),
            tables: vec![vec![
                vec![Some("A".to_string()), None],
                vec![Some("1".to_string()), Some("2".to_string())],
            ]],
        };
        assert_eq!(
            line(&extraction),
            "{\"text\": \"\", \"tables\": [[[\"A\", null], [\"1\", \"2\"]]]}\n"
        );
    }

    #[test]
    fn embedded_newlines_are_escaped_on_one_line() {
        let extraction = Extraction {
            text: "page one\npage two".to_string(),
            tables: vec![],
        };
        let out = line(&extraction);
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains(r#""page one\npage two""#));
    }

    #[test]
    fn non_ascii_is_written_verbatim() {
        let extraction = Extraction {
            text: "Größe €".to_string(),
            tables: vec![],
        };
        assert!(line(&extraction).contains("Größe €"));
    }

    #[test]
    fn single_line_output_parses_back() {
        let extraction = Extraction {
            text: "a\nb".to_string(),
            tables: vec![vec![vec![None, Some("x".to_string())]]],
        };
        let parsed: Extraction = serde_json::from_str(&line(&extraction)).unwrap();
        assert_eq!(parsed, extraction);
    }

    #[test]
    fn pretty_output_spans_lines() {
        let extraction = Extraction {
            text: "t".to_string(),
            tables: vec![vec![vec![Some("c".to_string())]]],
        };
        let mut buf = Vec::new();
        write_json_pretty(&mut buf, &extraction).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.lines().count() > 1);
        assert!(out.starts_with("{\n  \"text\": \"t\""));
    }
}
