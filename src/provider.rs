use crate::adapters::{BucketAdapter, ImageAdapter};
use crate::ProviderError;
use futures::future;
use originals_events::{AppEvent, EventBus};
use originals_media::ImageBackend;
use originals_models::FileRecord;
use originals_storage::BucketBackend;
use std::sync::Arc;

/// The two operations the host framework calls per file
#[async_trait::async_trait]
pub trait UploadProvider: Send + Sync {
    /// Store the file and write its URLs onto the record
    async fn upload(&self, file: &mut FileRecord) -> Result<(), ProviderError>;

    /// Remove the file. Only the identifying fields are read
    async fn delete(&self, file: &FileRecord) -> Result<(), ProviderError>;
}

/// Fans every call out to the image service and the bucket concurrently
pub struct DualBackendProvider {
    image: ImageAdapter,
    bucket: BucketAdapter,
    events: Arc<EventBus>,
}

impl DualBackendProvider {
    pub fn new(image: ImageAdapter, bucket: BucketAdapter, events: Arc<EventBus>) -> Self {
        Self { image, bucket, events }
    }

    pub fn from_backends(
        image: Arc<dyn ImageBackend>,
        bucket: Arc<dyn BucketBackend>,
        max_width: u32,
        events: Arc<EventBus>,
    ) -> Self {
        Self::new(
            ImageAdapter::new(image, max_width, Arc::clone(&events)),
            BucketAdapter::new(bucket, Arc::clone(&events)),
            events,
        )
    }

    fn report(&self, context: &str, key: &str, error: &ProviderError) {
        self.events.emit(AppEvent::Error {
            context: format!("{} {}", context, key),
            error: error.to_string(),
        });
    }
}

/// Combines both outcomes once both sides have settled
fn settle(image: Result<(), ProviderError>, bucket: Result<(), ProviderError>) -> Result<(), ProviderError> {
    match (image, bucket) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Err(image), Err(bucket)) => Err(ProviderError::BothFailed {
            image: Box::new(image),
            bucket: Box::new(bucket),
        }),
    }
}

#[async_trait::async_trait]
impl UploadProvider for DualBackendProvider {
    /// Both sides run to completion. A side that succeeded keeps its fields on
    /// the record even when the other side failed, so a failed upload may need
    /// a `delete` to clean up.
    async fn upload(&self, file: &mut FileRecord) -> Result<(), ProviderError> {
        let key = BucketAdapter::key_for(file);
        self.events.emit(AppEvent::UploadStarted {
            key: key.clone(),
            size: file.buffer.len(),
        });

        // Resize first so neither backend call waits on the other
        let prepared = self.image.prepare(file).await;

        let source = &*file;
        let (image, bucket) = match prepared {
            Ok(resized) => future::join(self.image.send(resized), self.bucket.upload(source)).await,
            Err(e) => (Err(e), self.bucket.upload(source).await),
        };

        let image = image.map(|asset| file.apply_image(asset));
        let bucket = bucket.map(|asset| file.apply_bucket(asset));

        match settle(image, bucket) {
            Ok(()) => {
                self.events.emit(AppEvent::UploadCompleted { key });
                Ok(())
            }
            Err(e) => {
                self.report("upload", &key, &e);
                Err(e)
            }
        }
    }

    async fn delete(&self, file: &FileRecord) -> Result<(), ProviderError> {
        let key = BucketAdapter::key_for(file);
        self.events.emit(AppEvent::DeleteStarted { key: key.clone() });

        let (image, bucket) = future::join(self.image.delete(file), self.bucket.delete(file)).await;

        match settle(image, bucket) {
            Ok(()) => {
                self.events.emit(AppEvent::DeleteCompleted { key });
                Ok(())
            }
            Err(e) => {
                self.report("delete", &key, &e);
                Err(e)
            }
        }
    }
}
