use crate::StorageError;
use bytes::Bytes;

/// Canned ACL applied to uploaded objects. Originals are always served
/// publicly, so `public-read` is the only one in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectAcl {
    #[default]
    PublicRead,
}

impl ObjectAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectAcl::PublicRead => "public-read",
        }
    }
}

/// Put-object request
#[derive(Debug, Clone)]
pub struct PutObject {
    pub key: String,
    pub body: Bytes,
    pub content_type: String,
    pub acl: ObjectAcl,
}

/// Object-storage backend addressed by key
#[async_trait::async_trait]
pub trait BucketBackend: Send + Sync {
    /// Store an object, returns its public location
    async fn put_object(&self, request: PutObject) -> Result<String, StorageError>;

    /// Delete an object. Backends that report missing keys return `StorageError::NotFound`
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;

    /// Public URL for a key (without uploading)
    fn get_url(&self, key: &str) -> String;

    /// Bucket name, if one is configured
    fn bucket_name(&self) -> Option<&str>;
}
