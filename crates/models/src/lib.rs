use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// File descriptor handed over by the host framework.
///
/// The host fills the identifying fields; `upload` adds the image-service and
/// bucket fields in place. On `delete` only `public_id`, `hash`, `ext` and
/// `path` are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(skip)]
    pub buffer: Bytes,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub mime: String,

    // Image service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, rename = "cloudinaryUrl", skip_serializing_if = "Option::is_none")]
    pub cloudinary_url: Option<String>,

    // Bucket service
    #[serde(default, rename = "s3Url", skip_serializing_if = "Option::is_none")]
    pub s3_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FileRecord {
    /// Record as supplied for an upload
    pub fn new(
        buffer: impl Into<Bytes>,
        hash: impl Into<String>,
        ext: impl Into<String>,
        mime: impl Into<String>,
    ) -> Self {
        Self {
            buffer: buffer.into(),
            hash: hash.into(),
            ext: ext.into(),
            mime: mime.into(),
            ..Default::default()
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }

    /// Writes the image-service result onto the record
    pub fn apply_image(&mut self, asset: ImageAsset) {
        self.public_id = Some(asset.public_id);
        self.cloudinary_url = Some(asset.secure_url);
    }

    /// Writes the bucket result onto the record; the bucket location is the canonical URL
    pub fn apply_bucket(&mut self, asset: BucketAsset) {
        self.s3_url = Some(asset.location.clone());
        self.url = Some(asset.location);
    }

    /// True once both backends have reported their URLs
    pub fn is_fully_uploaded(&self) -> bool {
        self.public_id.is_some()
            && self.cloudinary_url.is_some()
            && self.s3_url.is_some()
            && self.url.is_some()
    }
}

/// Image stored on the image service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub public_id: String,
    pub secure_url: String,
}

/// Object stored in the bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketAsset {
    pub key: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_assets() {
        let mut file = FileRecord::new(vec![1u8, 2, 3], "abc123", ".png", "image/png");
        assert!(!file.is_fully_uploaded());

        file.apply_image(ImageAsset {
            public_id: "abc".to_string(),
            secure_url: "https://res.example/abc.png".to_string(),
        });
        assert!(!file.is_fully_uploaded());

        file.apply_bucket(BucketAsset {
            key: "abc123.png".to_string(),
            location: "https://bucket.example/abc123.png".to_string(),
        });
        assert!(file.is_fully_uploaded());
        assert_eq!(file.url, file.s3_url);
        assert_eq!(file.buffer.as_ref(), &[1u8, 2, 3]);
    }

    #[test]
    fn test_host_field_names() {
        let mut file = FileRecord::new(Vec::<u8>::new(), "abc123", ".png", "image/png").with_path("avatars");
        file.apply_image(ImageAsset {
            public_id: "abc".to_string(),
            secure_url: "https://res.example/abc.png".to_string(),
        });

        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(value["cloudinaryUrl"], "https://res.example/abc.png");
        assert_eq!(value["public_id"], "abc");
        assert_eq!(value["path"], "avatars");
        assert!(value.get("buffer").is_none());
        assert!(value.get("s3Url").is_none());
    }

    #[test]
    fn test_delete_shape_deserializes() {
        let file: FileRecord = serde_json::from_str(
            r#"{"public_id":"abc","hash":"abc123","ext":".png","path":"avatars"}"#,
        )
        .unwrap();

        assert_eq!(file.public_id.as_deref(), Some("abc"));
        assert_eq!(file.path.as_deref(), Some("avatars"));
        assert!(file.buffer.is_empty());
        assert!(file.mime.is_empty());
    }
}
