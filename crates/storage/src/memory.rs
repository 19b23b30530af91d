use crate::backend::{BucketBackend, ObjectAcl, PutObject};
use crate::StorageError;
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Object kept by [`MemoryBackend`]
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub body: Bytes,
    pub content_type: String,
    pub acl: ObjectAcl,
}

/// In-process bucket for local development and tests
pub struct MemoryBackend {
    base_url: String,
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl MemoryBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.read().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}

#[async_trait::async_trait]
impl BucketBackend for MemoryBackend {
    async fn put_object(&self, request: PutObject) -> Result<String, StorageError> {
        let url = self.get_url(&request.key);
        self.objects.write().insert(
            request.key,
            StoredObject {
                body: request.body,
                content_type: request.content_type,
                acl: request.acl,
            },
        );
        Ok(url)
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        match self.objects.write().remove(key) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound(key.to_string())),
        }
    }

    fn get_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }

    fn bucket_name(&self) -> Option<&str> {
        None
    }
}
