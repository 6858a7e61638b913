//! Minimal query surface over a parsed page: find elements by tag, read their text.

use crate::utils::error::{CheckError, Result};
use scraper::{ElementRef, Html, Selector};

pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses a raw response body. Bytes that are not UTF-8 are replaced with
    /// U+FFFD, so pages in other charsets are still scanned.
    pub fn parse(body: &[u8]) -> Self {
        Self::parse_str(&String::from_utf8_lossy(body))
    }

    pub fn parse_str(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    pub fn elements_by_tag(&self, tag: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = Selector::parse(tag).map_err(|e| CheckError::ParseError {
            message: format!("invalid element name {:?}: {}", tag, e),
        })?;
        Ok(self.html.select(&selector).collect())
    }
}

/// Concatenated text of the element and its descendants, untrimmed.
pub fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect()
}
