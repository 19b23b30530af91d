use crate::ProviderError;
use originals_events::{AppEvent, EventBus};
use originals_media::{resize_to_width, ImageBackend, MediaError, ResizedImage};
use originals_models::{FileRecord, ImageAsset};
use std::sync::Arc;

/// Sends a downscaled copy of each file to the image service
pub struct ImageAdapter {
    backend: Arc<dyn ImageBackend>,
    max_width: u32,
    events: Arc<EventBus>,
}

impl ImageAdapter {
    pub fn new(backend: Arc<dyn ImageBackend>, max_width: u32, events: Arc<EventBus>) -> Self {
        Self { backend, max_width, events }
    }

    /// Downscales the file on the blocking pool. Runs before any backend call
    /// so the image request can go out alongside the bucket request.
    pub async fn prepare(&self, file: &FileRecord) -> Result<ResizedImage, ProviderError> {
        let buffer = file.buffer.clone();
        let max_width = self.max_width;

        tokio::task::spawn_blocking(move || resize_to_width(&buffer, max_width))
            .await
            .map_err(|e| ProviderError::ImageUpload(e.into()))?
            .map_err(ProviderError::ImageUpload)
    }

    pub async fn send(&self, resized: ResizedImage) -> Result<ImageAsset, ProviderError> {
        let uploaded = self
            .backend
            .upload(resized.data)
            .await
            .map_err(ProviderError::ImageUpload)?;

        self.events.emit(AppEvent::ImageUploaded {
            public_id: uploaded.public_id.clone(),
            url: uploaded.secure_url.clone(),
        });

        Ok(ImageAsset {
            public_id: uploaded.public_id,
            secure_url: uploaded.secure_url,
        })
    }

    /// Destroys the image and purges it from the CDN.
    ///
    /// A destroy call that succeeds over HTTP but reports anything other than
    /// "ok" is still an error.
    pub async fn delete(&self, file: &FileRecord) -> Result<(), ProviderError> {
        let public_id = file
            .public_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ProviderError::ImageDelete(MediaError::MissingPublicId))?;

        let response = self
            .backend
            .destroy(public_id, true)
            .await
            .map_err(ProviderError::ImageDelete)?;

        if !response.is_ok() {
            return Err(ProviderError::ImageDelete(MediaError::DestroyRejected(response.result)));
        }

        self.events.emit(AppEvent::ImageDestroyed {
            public_id: public_id.to_string(),
        });
        Ok(())
    }
}
