use crate::ProviderError;
use originals_events::{AppEvent, EventBus};
use originals_models::{BucketAsset, FileRecord};
use originals_storage::{derive_key, BucketBackend, ObjectAcl, PutObject, StorageError};
use std::sync::Arc;

/// Stores the untouched original in the bucket
pub struct BucketAdapter {
    backend: Arc<dyn BucketBackend>,
    events: Arc<EventBus>,
}

impl BucketAdapter {
    pub fn new(backend: Arc<dyn BucketBackend>, events: Arc<EventBus>) -> Self {
        Self { backend, events }
    }

    pub fn key_for(file: &FileRecord) -> String {
        derive_key(file.path.as_deref(), &file.hash, &file.ext)
    }

    pub async fn upload(&self, file: &FileRecord) -> Result<BucketAsset, ProviderError> {
        let key = Self::key_for(file);

        let location = self
            .backend
            .put_object(PutObject {
                key: key.clone(),
                body: file.buffer.clone(),
                content_type: file.mime.clone(),
                acl: ObjectAcl::PublicRead,
            })
            .await
            .map_err(ProviderError::BucketUpload)?;

        self.events.emit(AppEvent::ObjectUploaded {
            key: key.clone(),
            url: location.clone(),
        });

        Ok(BucketAsset { key, location })
    }

    /// Deletes the original. A key the backend reports as missing counts as deleted
    pub async fn delete(&self, file: &FileRecord) -> Result<(), ProviderError> {
        let key = Self::key_for(file);

        match self.backend.delete_object(&key).await {
            Ok(()) => self.events.emit(AppEvent::ObjectDeleted { key }),
            Err(StorageError::NotFound(_)) => self.events.emit(AppEvent::ObjectAlreadyMissing { key }),
            Err(e) => return Err(ProviderError::BucketDelete(e)),
        }
        Ok(())
    }
}
