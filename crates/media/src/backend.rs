use crate::MediaError;
use bytes::Bytes;
use serde::Deserialize;

/// Result of a managed upload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub public_id: String,
    pub secure_url: String,
}

/// Body of a destroy call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DestroyResult {
    pub result: String,
}

impl DestroyResult {
    /// Only the literal "ok" counts; "not found" and friends are failures
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

/// Image hosting and transformation service
#[async_trait::async_trait]
pub trait ImageBackend: Send + Sync {
    /// Upload an image, letting the service infer the resource type
    async fn upload(&self, data: Bytes) -> Result<UploadedImage, MediaError>;

    /// Destroy an image by its public id. `invalidate` purges CDN caches
    async fn destroy(&self, public_id: &str, invalidate: bool) -> Result<DestroyResult, MediaError>;
}
