//! PDF collaborator seam.
//!
//! Defines the capability traits the converter is written against, and the
//! production binding [`PlumberBackend`] over [`pdfplumber`].
//!
//! # Usage
//!
//! ```ignore
//! let doc = MyBackend::open(pdf_bytes, &options)?;
//! for page in doc.pages() {
//!     let page = page?;
//!     let text = page.extract_text(&options);
//!     let tables = page.extract_tables(&options);
//! }
//! ```

use pdfplumber::{Pdf, TableSettings, TextOptions};

use crate::error::ConvertError;
use crate::extraction::Table;
use crate::options::ConvertOptions;

/// Opens raw bytes as a document.
pub trait PdfBackend {
    /// The opened document. Dropping it releases everything the collaborator holds.
    type Document: PdfDocument;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedInput`] if the bytes are not a valid
    /// PDF, or a password error for encrypted documents.
    fn open(bytes: &[u8], options: &ConvertOptions) -> Result<Self::Document, ConvertError>;
}

/// An opened document.
pub trait PdfDocument {
    /// A single loaded page.
    type Page: PdfPage;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Load the page at a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MalformedInput`] if the page cannot be loaded
    /// or its content cannot be interpreted.
    fn page(&self, index: usize) -> Result<Self::Page, ConvertError>;

    /// Load every page in document order, one at a time.
    fn pages(&self) -> impl Iterator<Item = Result<Self::Page, ConvertError>> + '_ {
        (0..self.page_count()).map(move |index| self.page(index))
    }
}

/// A loaded page.
pub trait PdfPage {
    /// Plain text of the page. `None` when the collaborator reports no text.
    fn extract_text(&self, options: &ConvertOptions) -> Option<String>;

    /// Tables detected on the page, in collaborator order.
    fn extract_tables(&self, options: &ConvertOptions) -> Vec<Table>;
}

/// Backend binding the converter to [`pdfplumber`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlumberBackend;

/// A document opened by [`PlumberBackend`].
pub struct PlumberDocument(Pdf);

/// A page loaded from a [`PlumberDocument`].
pub struct PlumberPage(pdfplumber::Page);

impl PdfBackend for PlumberBackend {
    type Document = PlumberDocument;

    fn open(bytes: &[u8], options: &ConvertOptions) -> Result<PlumberDocument, ConvertError> {
        let pdf = match options.password.as_deref() {
            Some(password) => Pdf::open_with_password(bytes, password.as_bytes(), None)?,
            None => Pdf::open(bytes, None)?,
        };
        Ok(PlumberDocument(pdf))
    }
}

impl PdfDocument for PlumberDocument {
    type Page = PlumberPage;

    fn page_count(&self) -> usize {
        self.0.page_count()
    }

    fn page(&self, index: usize) -> Result<PlumberPage, ConvertError> {
        self.0
            .page(index)
            .map(PlumberPage)
            .map_err(|e| ConvertError::at_page(e, index))
    }
}

impl PdfPage for PlumberPage {
    fn extract_text(&self, options: &ConvertOptions) -> Option<String> {
        let text_options = TextOptions {
            layout: options.layout,
            ..TextOptions::default()
        };
        Some(self.0.extract_text(&text_options))
    }

    fn extract_tables(&self, options: &ConvertOptions) -> Vec<Table> {
        let settings = TableSettings {
            strategy: options.strategy.into(),
            ..TableSettings::default()
        };

        self.0
            .find_tables(&settings)
            .iter()
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
                    .collect()
            })
            .collect()
    }
}
