use std::collections::BTreeMap;

use serde::Serialize;

use crate::render::HTML_CONTENT_TYPE;

pub const PAGE_UPDATED_MESSAGE: &str = "HTML updated successfully";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Result returned by the page renderer once `index.html` has been replaced.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageUpdatedResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl PageUpdatedResponse {
    pub fn ok() -> Self {
        Self {
            status_code: 200,
            body: PAGE_UPDATED_MESSAGE.to_string(),
        }
    }
}

/// API Gateway proxy shaped response carrying an HTML body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HtmlResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HtmlResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            headers: BTreeMap::from([(
                CONTENT_TYPE_HEADER.to_string(),
                HTML_CONTENT_TYPE.to_string(),
            )]),
            body: body.into(),
        }
    }
}
