use crate::ProviderError;
use originals_config::{BucketServiceConfig, ImageServiceConfig};
use originals_media::{CloudinaryClient, ImageBackend};
use originals_storage::BucketBackend;
#[cfg(feature = "s3")]
use originals_storage::S3Backend;
use std::sync::Arc;

pub fn initialize_image(config: &ImageServiceConfig) -> Arc<dyn ImageBackend> {
    let client = CloudinaryClient::new(config);
    tracing::info!(
        "Initialized Cloudinary client: cloud={}, max_width={}",
        client.cloud_name().unwrap_or("-"),
        config.max_width
    );
    Arc::new(client)
}

#[cfg(feature = "s3")]
pub async fn initialize_storage(config: &BucketServiceConfig) -> Result<Arc<dyn BucketBackend>, ProviderError> {
    let backend = S3Backend::new(config).await.map_err(ProviderError::StorageInit)?;

    tracing::info!(
        "Initialized S3 storage backend: bucket={}, region={}",
        backend.bucket_name().unwrap_or("-"),
        config.region.map(|r| r.as_str()).unwrap_or("-")
    );

    Ok(Arc::new(backend) as Arc<dyn BucketBackend>)
}

#[cfg(not(feature = "s3"))]
pub async fn initialize_storage(_config: &BucketServiceConfig) -> Result<Arc<dyn BucketBackend>, ProviderError> {
    Err(ProviderError::Config(originals_config::ConfigError::InvalidConfig(
        "S3 backend not compiled. Rebuild with --features s3 to enable S3 support.".to_string(),
    )))
}
