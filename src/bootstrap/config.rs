use crate::ProviderError;
use originals_config::ProviderConfig;
use std::path::Path;

pub async fn load(config_path: &Path) -> Result<ProviderConfig, ProviderError> {
    tracing::info!("Loading provider config {}", config_path.display());

    let config = ProviderConfig::from_file(config_path).await?;

    if config.image.cloud_name.is_none() {
        tracing::warn!("cloudinary_cloud_name is empty, image uploads will fail");
    }
    if config.bucket.bucket.is_none() {
        tracing::warn!("s3_bucket is empty, bucket uploads will fail");
    }

    Ok(config)
}
