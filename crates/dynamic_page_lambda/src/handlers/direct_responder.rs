use dynamic_page_core::contract::HtmlResponse;
use dynamic_page_core::error::HandlerError;
use dynamic_page_core::render::render_heading;
use dynamic_page_core::settings::{value_encoding, ConfigProvider};

use crate::adapters::parameter_store::ParameterStore;
use crate::handlers::{fetch_saved_string, log_handler_failure};

const COMPONENT: &str = "direct_responder";

/// Returns the saved string as an HTML fragment. No writes happen.
pub fn handle_direct_response(
    config: &dyn ConfigProvider,
    parameters: &impl ParameterStore,
) -> Result<HtmlResponse, HandlerError> {
    let result = respond(config, parameters);
    if let Err(error) = &result {
        log_handler_failure(COMPONENT, error);
    }
    result
}

fn respond(
    config: &dyn ConfigProvider,
    parameters: &impl ParameterStore,
) -> Result<HtmlResponse, HandlerError> {
    let value = fetch_saved_string(COMPONENT, config, parameters)?;
    let body = render_heading(&value, value_encoding(config));
    Ok(HtmlResponse::ok(body))
}
