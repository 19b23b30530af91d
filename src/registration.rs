use crate::bootstrap::{backends, config};
use crate::{DualBackendProvider, ProviderError};
use originals_config::{auth_schema, AuthField, ProviderConfig};
use originals_events::{AppEvent, EventBus};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::path::Path;

/// Stable identifier the host registers the provider under
pub const PROVIDER_ID: &str = "cloudinary-s3-originals";

/// Display name shown in the host's settings screen
pub const PROVIDER_NAME: &str = "Cloudinary with S3 originals";

/// What the host reads before calling `init`: identifier, name and the
/// credential form, keyed by option name in display order.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderRegistration {
    pub provider: &'static str,
    pub name: &'static str,
    #[serde(serialize_with = "serialize_auth")]
    pub auth: Vec<AuthField>,
}

fn serialize_auth<S: Serializer>(fields: &[AuthField], serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for field in fields {
        map.serialize_entry(field.key, field)?;
    }
    map.end()
}

pub fn registration() -> ProviderRegistration {
    ProviderRegistration {
        provider: PROVIDER_ID,
        name: PROVIDER_NAME,
        auth: auth_schema(),
    }
}

/// Host entry point: normalizes the raw options and builds the provider
pub async fn init(raw: &Value) -> Result<DualBackendProvider, ProviderError> {
    init_with_config(ProviderConfig::from_value(raw)).await
}

/// Builds the provider from options stored in a TOML file
pub async fn init_from_file<P: AsRef<Path>>(path: P) -> Result<DualBackendProvider, ProviderError> {
    let config = config::load(path.as_ref()).await?;
    init_with_config(config).await
}

pub async fn init_with_config(config: ProviderConfig) -> Result<DualBackendProvider, ProviderError> {
    let events = EventBus::new(false);

    let image = backends::initialize_image(&config.image);
    let bucket = backends::initialize_storage(&config.bucket).await?;

    events.emit(AppEvent::ProviderInitialized {
        provider: PROVIDER_ID.to_string(),
        bucket: config.bucket.bucket.clone(),
        region: config.bucket.region.map(|r| r.to_string()),
    });

    Ok(DualBackendProvider::from_backends(
        image,
        bucket,
        config.image.max_width,
        events,
    ))
}
