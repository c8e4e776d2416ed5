//! Page walk: open, iterate, accumulate.

use tracing::debug;

use crate::backend::{PdfBackend, PdfDocument, PdfPage, PlumberBackend};
use crate::error::ConvertError;
use crate::extraction::{Extraction, Table};
use crate::options::ConvertOptions;
use crate::page_range::parse_page_range;

/// Convert PDF bytes into text and tables using [`pdfplumber`] with default options.
///
/// # Errors
///
/// Returns [`ConvertError::MalformedInput`] if the bytes are not a parsable PDF
/// or a page fails to load. Nothing extracted before the failure is returned.
pub fn convert(pdf_bytes: &[u8]) -> Result<Extraction, ConvertError> {
    convert_with::<PlumberBackend>(pdf_bytes, &ConvertOptions::default())
}

/// Convert PDF bytes with an explicit backend and options.
///
/// The document handle is released before this function returns, on the
/// success path and on every error path.
pub fn convert_with<B: PdfBackend>(
    pdf_bytes: &[u8],
    options: &ConvertOptions,
) -> Result<Extraction, ConvertError> {
    let document = B::open(pdf_bytes, options)?;
    debug!(
        bytes = pdf_bytes.len(),
        pages = document.page_count(),
        "opened PDF document"
    );

    let accumulated = accumulate(&document, options);
    drop(document);

    Ok(accumulated?.finish())
}

fn accumulate<D: PdfDocument>(
    document: &D,
    options: &ConvertOptions,
) -> Result<Accumulator, ConvertError> {
    let mut acc = Accumulator::default();

    match options.pages.as_deref() {
        None => {
            for (index, page) in document.pages().enumerate() {
                acc.absorb(index, &page?, options);
            }
        }
        Some(range) => {
            for index in parse_page_range(range, document.page_count())? {
                acc.absorb(index, &document.page(index)?, options);
            }
        }
    }

    Ok(acc)
}

#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    tables: Vec<Table>,
}

impl Accumulator {
    fn absorb<P: PdfPage>(&mut self, index: usize, page: &P, options: &ConvertOptions) {
        let text = page.extract_text(options).unwrap_or_default();
        self.text.push_str(&text);
        self.text.push('\n');

        let tables = page.extract_tables(options);
        debug!(
            page = index + 1,
            text_bytes = text.len(),
            tables = tables.len(),
            "extracted page"
        );
        self.tables.extend(tables);
    }

    fn finish(self) -> Extraction {
        Extraction {
            text: self.text.trim().to_string(),
            tables: self.tables,
        }
    }
}
