use dynamic_page_core::error::HandlerError;
use dynamic_page_core::settings::{require, ConfigProvider, PARAM_NAME_KEY};

use crate::adapters::parameter_store::ParameterStore;

pub mod direct_responder;
pub mod page_renderer;

/// Resolves `PARAM_NAME` and reads that parameter's current value.
pub fn fetch_saved_string(
    component: &str,
    config: &dyn ConfigProvider,
    parameters: &impl ParameterStore,
) -> Result<String, HandlerError> {
    let name = require(config, PARAM_NAME_KEY)?;
    let value = parameters
        .get_parameter(&name)
        .map_err(|message| HandlerError::ConfigFetch {
            name: name.clone(),
            message,
        })?;

    tracing::info!(
        component,
        event = "parameter_fetched",
        parameter_name = %name,
        value_len = value.len(),
    );
    Ok(value)
}

pub(crate) fn log_handler_failure(component: &str, error: &HandlerError) {
    tracing::error!(
        component,
        event = "handler_failed",
        error_kind = error.kind(),
        error = %error,
    );
}
