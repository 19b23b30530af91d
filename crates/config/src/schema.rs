use super::models::S3Region;
use serde::Serialize;

/// Form field kinds understood by the host's settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Password,
    Enum,
}

/// One credential field of the provider's `auth` schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthField {
    #[serde(skip)]
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<&'static str>>,
}

impl AuthField {
    const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, values: None }
    }
}

/// Credential fields in the order the host should render them
pub fn auth_schema() -> Vec<AuthField> {
    vec![
        AuthField::new("cloudinary_cloud_name", "Cloudinary cloud name", FieldKind::Text),
        AuthField::new("cloudinary_api_key", "Cloudinary API Key", FieldKind::Text),
        AuthField::new("cloudinary_api_secret", "Cloudinary API secret", FieldKind::Password),
        AuthField::new("s3_api_token", "S3 API token", FieldKind::Text),
        AuthField::new("s3_secret_access_token", "S3 secret access token", FieldKind::Text),
        AuthField {
            values: Some(S3Region::ALL.iter().map(S3Region::as_str).collect()),
            ..AuthField::new("s3_region", "S3 region", FieldKind::Enum)
        },
        AuthField::new("s3_bucket", "S3 bucket name", FieldKind::Text),
    ]
}
