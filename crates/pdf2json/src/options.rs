//! Options controlling how a document is converted.

/// Table detection strategy handed to the collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableStrategy {
    /// Detect tables from visible ruling lines and rectangle edges.
    #[default]
    Lattice,
    /// Detect tables from text alignment, without visible borders.
    Stream,
}

impl From<TableStrategy> for pdfplumber::Strategy {
    fn from(strategy: TableStrategy) -> Self {
        match strategy {
            TableStrategy::Lattice => pdfplumber::Strategy::Lattice,
            TableStrategy::Stream => pdfplumber::Strategy::Stream,
        }
    }
}

/// Conversion options. The default converts every page with the
/// collaborator's default text and table settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// 1-indexed page range such as `"1,3-5"`. `None` selects all pages.
    pub pages: Option<String>,
    /// Password for encrypted documents.
    pub password: Option<String>,
    /// Table detection strategy.
    pub strategy: TableStrategy,
    /// Use layout-aware text extraction.
    pub layout: bool,
}
