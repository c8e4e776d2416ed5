//! pdf2json: Convert a PDF document into `{"text": ..., "tables": ...}`.
//!
//! All format-specific work (layout analysis, text-flow reconstruction and
//! table detection) is delegated to [`pdfplumber`]. This crate walks the pages
//! the collaborator yields, accumulates their text and tables, and serializes
//! the result.
//!
//! # Architecture
//!
//! - [`backend`]: Capability traits for the PDF collaborator and the
//!   `pdfplumber` binding
//! - [`convert()`]: Page walk and accumulation
//! - [`json`]: Single-line JSON output
//!
//! # Example
//!
//! ```ignore
//! let bytes = std::fs::read("invoice.pdf")?;
//! let extraction = pdf2json::convert(&bytes)?;
//! pdf2json::write_json_line(std::io::stdout().lock(), &extraction)?;
//! ```

pub mod backend;
mod convert;
mod error;
mod extraction;
pub mod json;
mod options;
mod page_range;

pub use backend::{PdfBackend, PdfDocument, PdfPage, PlumberBackend};
pub use convert::{convert, convert_with};
pub use error::ConvertError;
pub use extraction::{Cell, Extraction, Row, Table};
pub use json::{write_json_line, write_json_pretty};
pub use options::{ConvertOptions, TableStrategy};
pub use page_range::parse_page_range;
