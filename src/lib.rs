//! Upload provider that keeps two copies of every image: a copy downscaled to
//! at most 1920 px wide on Cloudinary, and the untouched original in an S3
//! bucket. Both backends are written and deleted concurrently.

mod adapters;
mod bootstrap;
mod errors;
mod provider;
mod registration;

pub use adapters::{BucketAdapter, ImageAdapter};
pub use bootstrap::logging;
pub use errors::ProviderError;
pub use provider::{DualBackendProvider, UploadProvider};
pub use registration::{
    init, init_from_file, init_with_config, registration, ProviderRegistration, PROVIDER_ID, PROVIDER_NAME,
};

pub use originals_config::*;
pub use originals_events::*;
pub use originals_media::*;
pub use originals_models::*;
pub use originals_storage::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{init, DualBackendProvider, ProviderError, UploadProvider};
    pub use originals_config::ProviderConfig;
    pub use originals_models::FileRecord;
}
