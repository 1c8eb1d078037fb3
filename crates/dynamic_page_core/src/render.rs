//! HTML rendering for the saved string.
//!
//! The value is interpolated verbatim by default, so markup in the stored
//! parameter ends up in the page as-is. [`ValueEncoding::HtmlEscaped`]
//! switches to entity-escaped output.

use sha2::{Digest, Sha256};

use crate::settings::ValueEncoding;

pub const PAGE_OBJECT_KEY: &str = "index.html";
pub const HTML_CONTENT_TYPE: &str = "text/html";
pub const PAGE_TITLE: &str = "Dynamic String Page";
pub const HEADING_PREFIX: &str = "The saved string is ";

/// `<h1>The saved string is {value}</h1>`
pub fn render_heading(value: &str, encoding: ValueEncoding) -> String {
    let value = encode_value(value, encoding);
    format!("<h1>{HEADING_PREFIX}{value}</h1>")
}

/// Full document uploaded as `index.html`.
pub fn render_page_document(value: &str, encoding: ValueEncoding) -> String {
    let heading = render_heading(value, encoding);
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n    \
         <title>{PAGE_TITLE}</title>\n\
         </head>\n\
         <body>\n    \
         {heading}\n\
         </body>\n\
         </html>\n"
    )
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Lowercase hex SHA-256 of a rendered body.
pub fn content_digest(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    format!("{:x}", hasher.finalize())
}

fn encode_value(value: &str, encoding: ValueEncoding) -> String {
    match encoding {
        ValueEncoding::Verbatim => value.to_string(),
        ValueEncoding::HtmlEscaped => escape_html(value),
    }
}
