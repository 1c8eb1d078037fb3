use dynamic_page_core::contract::PageUpdatedResponse;
use dynamic_page_core::error::HandlerError;
use dynamic_page_core::render::{
    content_digest, render_page_document, HTML_CONTENT_TYPE, PAGE_OBJECT_KEY,
};
use dynamic_page_core::settings::{require, value_encoding, ConfigProvider, BUCKET_NAME_KEY};

use crate::adapters::object_store::PageStore;
use crate::adapters::parameter_store::ParameterStore;
use crate::handlers::{fetch_saved_string, log_handler_failure};

const COMPONENT: &str = "page_renderer";

/// Renders the saved string into `index.html` and overwrites the object in
/// the configured bucket.
///
/// `BUCKET_NAME` is resolved only after the parameter has been fetched, so a
/// missing bucket still costs one parameter read but never a write.
pub fn handle_page_render(
    config: &dyn ConfigProvider,
    parameters: &impl ParameterStore,
    pages: &impl PageStore,
) -> Result<PageUpdatedResponse, HandlerError> {
    let result = render_and_store(config, parameters, pages);
    if let Err(error) = &result {
        log_handler_failure(COMPONENT, error);
    }
    result
}

fn render_and_store(
    config: &dyn ConfigProvider,
    parameters: &impl ParameterStore,
    pages: &impl PageStore,
) -> Result<PageUpdatedResponse, HandlerError> {
    let value = fetch_saved_string(COMPONENT, config, parameters)?;
    let document = render_page_document(&value, value_encoding(config));
    let bucket = require(config, BUCKET_NAME_KEY)?;

    pages
        .put_object(
            &bucket,
            PAGE_OBJECT_KEY,
            document.as_bytes(),
            HTML_CONTENT_TYPE,
        )
        .map_err(|message| HandlerError::StorageWrite {
            bucket: bucket.clone(),
            key: PAGE_OBJECT_KEY.to_string(),
            message,
        })?;

    tracing::info!(
        component = COMPONENT,
        event = "page_written",
        bucket = %bucket,
        key = PAGE_OBJECT_KEY,
        bytes = document.len(),
        content_sha256 = %content_digest(document.as_bytes()),
    );
    Ok(PageUpdatedResponse::ok())
}
