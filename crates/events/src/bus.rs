use super::models::{AppEvent, EventBus};
use std::sync::Arc;

impl EventBus {
    pub fn new(silent_mode: bool) -> Arc<Self> {
        Arc::new(Self { silent_mode })
    }

    pub fn is_silent(&self) -> bool {
        self.silent_mode
    }

    pub fn emit(&self, event: AppEvent) {
        match event {
            // Provider lifecycle
            AppEvent::ProviderInitialized { provider, bucket, region } => {
                tracing::info!(
                    "Initialized upload provider {} (bucket={}, region={})",
                    provider,
                    bucket.as_deref().unwrap_or("-"),
                    region.as_deref().unwrap_or("-")
                );
            }

            // Upload
            AppEvent::UploadStarted { key, size } => {
                tracing::debug!("Uploading {} ({} bytes)", key, size);
            }
            AppEvent::ImageUploaded { public_id, url } => {
                if !self.silent_mode {
                    tracing::info!("Image {} uploaded: {}", public_id, url);
                }
            }
            AppEvent::ObjectUploaded { key, url } => {
                if !self.silent_mode {
                    tracing::info!("Object {} uploaded: {}", key, url);
                }
            }
            AppEvent::UploadCompleted { key } => {
                tracing::debug!("Upload complete: {}", key);
            }

            // Delete
            AppEvent::DeleteStarted { key } => {
                tracing::debug!("Deleting {}", key);
            }
            AppEvent::ImageDestroyed { public_id } => {
                if !self.silent_mode {
                    tracing::info!("Image {} destroyed", public_id);
                }
            }
            AppEvent::ObjectDeleted { key } => {
                if !self.silent_mode {
                    tracing::info!("Object {} deleted", key);
                }
            }
            AppEvent::ObjectAlreadyMissing { key } => {
                tracing::debug!("Object {} already absent from bucket", key);
            }
            AppEvent::DeleteCompleted { key } => {
                tracing::debug!("Delete complete: {}", key);
            }

            // Errors
            AppEvent::Error { context, error } => {
                tracing::error!("{}: {}", context, error);
            }
        }
    }
}
