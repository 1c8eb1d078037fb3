use dynamic_page_core::contract::HtmlResponse;
use dynamic_page_core::settings::EnvConfigProvider;
use dynamic_page_lambda::adapters::clients::ssm_client;
use dynamic_page_lambda::adapters::parameter_store::SsmParameterStore;
use dynamic_page_lambda::handlers::direct_responder::handle_direct_response;
use dynamic_page_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(_event: LambdaEvent<Value>) -> Result<HtmlResponse, Error> {
    let parameters = SsmParameterStore::new(ssm_client().await);

    Ok(handle_direct_response(&EnvConfigProvider, &parameters)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    lambda_runtime::run(service_fn(handle_request)).await
}
