use std::env;
use std::sync::Arc;

use aws_sdk_s3::config::Region;
use tracing::info;

use crate::config::UploadConfig;
use crate::services::storage::S3Store;

/// Builds the S3 client from ambient credentials and the configured region.
///
/// Setting `S3_ENDPOINT` points the client at a custom endpoint with
/// path-style addressing, for MinIO-style deployments.
pub async fn setup_storage(config: &UploadConfig) -> Arc<S3Store> {
    info!(
        "☁️  S3 Storage: region {} (Bucket: {})",
        config.region, config.bucket
    );

    let endpoint_url = env::var("S3_ENDPOINT").ok();

    let mut loader = aws_config::from_env().region(Region::new(config.region.clone()));
    if let Some(url) = &endpoint_url {
        loader = loader.endpoint_url(url);
    }
    let aws_config = loader.load().await;

    let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
    if endpoint_url.is_some() {
        builder = builder.force_path_style(true);
    }

    let s3_client = aws_sdk_s3::Client::from_conf(builder.build());
    Arc::new(S3Store::new(s3_client, config.bucket.clone()))
}
