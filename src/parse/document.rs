// src/parse/document.rs

//! Whole-document pre-passes and table location.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// The portal's "no data" sentinel, rendered in place of numeric values.
pub const PLACEHOLDER: &str = "---";

/// CSS selector matching the portal's report tables.
pub const TABLE_SELECTOR: &str = "table.table.table-bordered";

/// Replace every placeholder sentinel in the document.
///
/// Runs on the raw HTML before any parsing, so later numeric coercion
/// never sees the sentinel.
pub fn substitute_placeholders(html: &str, replacement: &str) -> String {
    html.replace(PLACEHOLDER, replacement)
}

/// Materialize commented-out markup as visible markup.
///
/// Some report pages wrap their tables in HTML comments and reveal them
/// client-side. Stripping the comment delimiters makes those tables visible
/// to the locator. Idempotent; visible markup is left untouched.
pub fn reveal_comments(html: &str) -> String {
    html.replace("<!--", "").replace("-->", "")
}

/// Find all report tables in the document, in document order.
///
/// Returns an empty vector when nothing matches; callers decide whether
/// zero tables is an error.
pub fn locate_tables(document: &Html) -> Result<Vec<ElementRef<'_>>> {
    let selector = parse_selector(TABLE_SELECTOR)?;
    Ok(document.select(&selector).collect())
}

/// Compile a CSS selector, surfacing failures as errors.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::fixtures;

    #[test]
    fn substitute_replaces_every_sentinel() {
        let html = "<td>---</td><td>50</td><td>---</td>";
        assert_eq!(
            substitute_placeholders(html, "0"),
            "<td>0</td><td>50</td><td>0</td>"
        );
    }

    #[test]
    fn reveal_is_idempotent() {
        let html = "<body><!-- <p>hidden</p> --><p>visible</p></body>";
        let once = reveal_comments(html);
        assert_eq!(reveal_comments(&once), once);
        assert!(once.contains("<p>hidden</p>"));
        assert!(once.contains("<p>visible</p>"));
    }

    #[test]
    fn locate_finds_tables_in_document_order() {
        let document = Html::parse_document(fixtures::MULTI_TABLE_HTML);
        let tables = locate_tables(&document).unwrap();
        assert_eq!(tables.len(), 2);
    }

    #[test]
    fn locate_returns_empty_for_no_tables() {
        let document = Html::parse_document(fixtures::NO_TABLE_HTML);
        assert!(locate_tables(&document).unwrap().is_empty());
    }

    #[test]
    fn commented_tables_hidden_until_revealed() {
        let document = Html::parse_document(fixtures::COMMENTED_SCORE_TABLES_HTML);
        assert!(locate_tables(&document).unwrap().is_empty());

        let revealed = reveal_comments(fixtures::COMMENTED_SCORE_TABLES_HTML);
        let document = Html::parse_document(&revealed);
        assert_eq!(locate_tables(&document).unwrap().len(), 2);
    }

    #[test]
    fn parse_selector_rejects_garbage() {
        assert!(parse_selector("[[invalid").is_err());
    }
}
