use originals_config::ConfigError;
use originals_media::MediaError;
use originals_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Image upload failed: {0}")]
    ImageUpload(#[source] MediaError),

    #[error("Image delete failed: {0}")]
    ImageDelete(#[source] MediaError),

    #[error("Bucket upload failed: {0}")]
    BucketUpload(#[source] StorageError),

    #[error("Bucket delete failed: {0}")]
    BucketDelete(#[source] StorageError),

    #[error("Both backends failed: {image}; {bucket}")]
    BothFailed {
        image: Box<ProviderError>,
        bucket: Box<ProviderError>,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage initialization failed: {0}")]
    StorageInit(#[source] StorageError),
}

impl ProviderError {
    /// Errors raised by the image side, including the image half of `BothFailed`
    pub fn image_error(&self) -> Option<&ProviderError> {
        match self {
            ProviderError::ImageUpload(_) | ProviderError::ImageDelete(_) => Some(self),
            ProviderError::BothFailed { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Errors raised by the bucket side, including the bucket half of `BothFailed`
    pub fn bucket_error(&self) -> Option<&ProviderError> {
        match self {
            ProviderError::BucketUpload(_) | ProviderError::BucketDelete(_) => Some(self),
            ProviderError::BothFailed { bucket, .. } => Some(bucket),
            _ => None,
        }
    }
}
