use super::models::{BucketServiceConfig, ImageServiceConfig, ProviderConfig, S3Region};
use serde_json::Value;

/// Trims a string option; anything that isn't a non-blank string is absent
pub fn trim_param(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

impl ProviderConfig {
    /// Builds both backend configurations from the host's raw options.
    ///
    /// Never fails: malformed values are dropped (and logged) so that the
    /// backends report the problem when they are first used.
    pub fn from_value(raw: &Value) -> Self {
        let field = |name: &str| trim_param(raw.get(name));

        let image = ImageServiceConfig {
            cloud_name: field("cloudinary_cloud_name"),
            api_key: field("cloudinary_api_key"),
            api_secret: field("cloudinary_api_secret"),
            api_base: field("cloudinary_api_base")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(super::defaults::cloudinary_api_base),
            max_width: max_width(raw.get("image_max_width")),
        };

        let bucket = BucketServiceConfig {
            access_key_id: field("s3_api_token"),
            secret_access_key: field("s3_secret_access_token"),
            region: field("s3_region").and_then(|region| match region.parse::<S3Region>() {
                Ok(region) => Some(region),
                Err(e) => {
                    tracing::warn!("Ignoring s3_region: {}", e);
                    None
                }
            }),
            bucket: field("s3_bucket"),
            endpoint_url: field("s3_endpoint").map(|url| url.trim_end_matches('/').to_string()),
        };

        Self { image, bucket }
    }
}

fn max_width(value: Option<&Value>) -> u32 {
    let parsed = match value {
        None => return super::defaults::max_width(),
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(width) if width > 0 => width,
        _ => {
            tracing::warn!("Ignoring image_max_width {:?}, using default", value);
            super::defaults::max_width()
        }
    }
}
