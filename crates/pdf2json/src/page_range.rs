use crate::error::ConvertError;

/// Resolve a page selection like `"1,3-5"` into sorted, deduplicated 0-indexed
/// page indices.
///
/// Input pages are 1-indexed. Page 0, pages beyond `page_count`, reversed
/// ranges and non-numeric parts are rejected. Empty parts (`"1,,2"`) are
/// skipped.
pub fn parse_page_range(input: &str, page_count: usize) -> Result<Vec<usize>, ConvertError> {
    let mut pages = Vec::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (first, last) = match part.split_once('-') {
            Some((start, end)) => (
                page_number(start, page_count)?,
                page_number(end, page_count)?,
            ),
            None => {
                let page = page_number(part, page_count)?;
                (page, page)
            }
        };

        if first > last {
            return Err(ConvertError::InvalidPageRange(format!(
                "range '{part}' ends before it starts"
            )));
        }
        pages.extend(first - 1..last);
    }

    if pages.is_empty() {
        return Err(ConvertError::InvalidPageRange(format!(
            "'{input}' selects no pages"
        )));
    }

    pages.sort_unstable();
    pages.dedup();
    Ok(pages)
}

fn page_number(raw: &str, page_count: usize) -> Result<usize, ConvertError> {
    let raw = raw.trim();
    let page: usize = raw
        .parse()
        .map_err(|_| ConvertError::InvalidPageRange(format!("invalid page number: '{raw}'")))?;

    if page == 0 {
        return Err(ConvertError::InvalidPageRange(
            "page 0 is invalid (pages start at 1)".to_string(),
        ));
    }
    if page > page_count {
        return Err(ConvertError::InvalidPageRange(format!(
            "page {page} exceeds document page count ({page_count})"
        )));
    }
    Ok(page)
}
