//! Process-wide AWS clients.
//!
//! Each handle is built on first use and reused by every later invocation
//! served by the same execution environment. SDK clients are cheap to clone
//! and safe to share, so nothing here needs locking after initialization.

use aws_config::{BehaviorVersion, SdkConfig};
use tokio::sync::OnceCell;

static SDK_CONFIG: OnceCell<SdkConfig> = OnceCell::const_new();
static SSM_CLIENT: OnceCell<aws_sdk_ssm::Client> = OnceCell::const_new();
static S3_CLIENT: OnceCell<aws_sdk_s3::Client> = OnceCell::const_new();

pub async fn shared_sdk_config() -> &'static SdkConfig {
    SDK_CONFIG
        .get_or_init(|| aws_config::load_defaults(BehaviorVersion::latest()))
        .await
}

pub async fn ssm_client() -> aws_sdk_ssm::Client {
    SSM_CLIENT
        .get_or_init(|| async { aws_sdk_ssm::Client::new(shared_sdk_config().await) })
        .await
        .clone()
}

pub async fn s3_client() -> aws_sdk_s3::Client {
    S3_CLIENT
        .get_or_init(|| async { aws_sdk_s3::Client::new(shared_sdk_config().await) })
        .await
        .clone()
}
