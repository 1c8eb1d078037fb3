use dynamic_page_core::contract::PageUpdatedResponse;
use dynamic_page_core::settings::EnvConfigProvider;
use dynamic_page_lambda::adapters::clients::{s3_client, ssm_client};
use dynamic_page_lambda::adapters::object_store::S3PageStore;
use dynamic_page_lambda::adapters::parameter_store::SsmParameterStore;
use dynamic_page_lambda::handlers::page_renderer::handle_page_render;
use dynamic_page_lambda::telemetry::init_tracing;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(_event: LambdaEvent<Value>) -> Result<PageUpdatedResponse, Error> {
    let parameters = SsmParameterStore::new(ssm_client().await);
    let pages = S3PageStore::new(s3_client().await);

    Ok(handle_page_render(&EnvConfigProvider, &parameters, &pages)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();
    lambda_runtime::run(service_fn(handle_request)).await
}
