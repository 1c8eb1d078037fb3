use aws_sdk_ssm::error::DisplayErrorContext;

pub trait ParameterStore {
    /// Current value of the named parameter. Every call is a fresh read.
    fn get_parameter(&self, name: &str) -> Result<String, String>;
}

/// SSM Parameter Store backed lookup.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    ssm_client: aws_sdk_ssm::Client,
}

impl SsmParameterStore {
    pub fn new(ssm_client: aws_sdk_ssm::Client) -> Self {
        Self { ssm_client }
    }
}

impl ParameterStore for SsmParameterStore {
    fn get_parameter(&self, name: &str) -> Result<String, String> {
        let parameter_name = name.to_string();
        let client = self.ssm_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_parameter()
                    .name(parameter_name)
                    .send()
                    .await
                    .map_err(|error| {
                        format!(
                            "failed to read parameter from ssm: {}",
                            DisplayErrorContext(&error)
                        )
                    })?;

                output
                    .parameter()
                    .and_then(|parameter| parameter.value())
                    .map(str::to_string)
                    .ok_or_else(|| "ssm returned a parameter without a value".to_string())
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_ssm::operation::get_parameter::{GetParameterError, GetParameterOutput};
    use aws_sdk_ssm::types::error::ParameterNotFound;
    use aws_sdk_ssm::types::Parameter;
    use aws_smithy_mocks::{mock, mock_client};
    use dynamic_page_core::error::HandlerError;
    use dynamic_page_core::settings::{MapConfigProvider, PARAM_NAME_KEY};

    use super::*;
    use crate::handlers::fetch_saved_string;

    #[tokio::test(flavor = "multi_thread")]
    async fn returns_parameter_value() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter)
            .match_requests(|request| request.name() == Some("greeting"))
            .then_output(|| {
                GetParameterOutput::builder()
                    .parameter(Parameter::builder().name("greeting").value("Hello").build())
                    .build()
            });
        let store = SsmParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        assert_eq!(store.get_parameter("greeting"), Ok("Hello".to_string()));
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn parameter_without_value_is_a_fetch_error() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter).then_output(|| {
            GetParameterOutput::builder()
                .parameter(Parameter::builder().name("greeting").build())
                .build()
        });
        let store = SsmParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        assert_eq!(
            store.get_parameter("greeting"),
            Err("ssm returned a parameter without a value".to_string())
        );

        let config = MapConfigProvider::new().with(PARAM_NAME_KEY, "greeting");
        let error = fetch_saved_string("test", &config, &store).expect_err("value is missing");
        assert_eq!(
            error,
            HandlerError::ConfigFetch {
                name: "greeting".to_string(),
                message: "ssm returned a parameter without a value".to_string(),
            }
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn service_error_keeps_its_context() {
        let rule = mock!(aws_sdk_ssm::Client::get_parameter).then_error(|| {
            GetParameterError::ParameterNotFound(
                ParameterNotFound::builder()
                    .message("greeting does not exist")
                    .build(),
            )
        });
        let store = SsmParameterStore::new(mock_client!(aws_sdk_ssm, [&rule]));

        let error = store.get_parameter("greeting").expect_err("lookup fails");
        assert!(error.starts_with("failed to read parameter from ssm"));
        assert!(error.contains("greeting does not exist"), "{error}");
    }
}
