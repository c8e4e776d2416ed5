//! Error types for document conversion.
//!
//! Uses [`thiserror`] for error derivation. Errors reported by the collaborator
//! ([`pdfplumber::PdfError`]) convert into [`ConvertError`].

use pdfplumber::PdfError;
use thiserror::Error;

/// Error type for [`convert`](crate::convert()) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The bytes are not a decodable PDF, or a page could not be read.
    #[error("malformed PDF input{}: {reason}", page_suffix(.page))]
    MalformedInput {
        /// 1-based page number when the failure happened mid-iteration.
        page: Option<usize>,
        /// Collaborator's description of the failure.
        reason: String,
    },

    /// The document is encrypted and no password was supplied.
    #[error("PDF is encrypted and requires a password")]
    PasswordRequired,

    /// The supplied password does not open the document.
    #[error("incorrect password for encrypted PDF")]
    InvalidPassword,

    /// A page selection could not be resolved against the document.
    #[error("invalid page range: {0}")]
    InvalidPageRange(String),
}

impl ConvertError {
    /// Wrap a collaborator error raised while loading the page at `index` (0-based).
    pub(crate) fn at_page(err: PdfError, index: usize) -> Self {
        match Self::from(err) {
            ConvertError::MalformedInput { reason, .. } => ConvertError::MalformedInput {
                page: Some(index + 1),
                reason,
            },
            other => other,
        }
    }
}

fn page_suffix(page: &Option<usize>) -> String {
    match page {
        Some(n) => format!(" (page {n})"),
        None => String::new(),
    }
}

impl From<PdfError> for ConvertError {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::PasswordRequired => ConvertError::PasswordRequired,
            PdfError::InvalidPassword => ConvertError::InvalidPassword,
            other => ConvertError::MalformedInput {
                page: None,
                reason: other.to_string(),
            },
        }
    }
}
