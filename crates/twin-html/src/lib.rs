//! twin HTML parser
//!
//! HTML5 parsing built on html5ever. Parsed documents land in the
//! twin-dom arena.

mod parser;

pub use parser::HtmlParser;

use std::path::Path;

use twin_dom::Document;

/// Parse an HTML string into a Document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Load and parse an HTML file
///
/// Bytes are decoded as UTF-8 (lossily, matching browser tolerance) and the
/// file path becomes the document's base URI.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let html = String::from_utf8_lossy(&bytes);
    Ok(HtmlParser::new().parse_with_base(&html, &path.display().to_string()))
}

/// Document loading error
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("error reading [{path}]: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
