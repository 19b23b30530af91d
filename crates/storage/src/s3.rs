use crate::backend::{BucketBackend, ObjectAcl, PutObject};
use crate::StorageError;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::{primitives::ByteStream, Client};
use originals_config::{BucketServiceConfig, S3Region};

/// S3 storage backend
/// Compatible with: AWS S3, and with `endpoint_url` set, MinIO, Cloudflare R2, etc.
pub struct S3Backend {
    client: Client,
    bucket_name: Option<String>,
    region: Option<S3Region>,
    endpoint_url: Option<String>,
}

impl S3Backend {
    pub async fn new(config: &BucketServiceConfig) -> Result<Self, StorageError> {
        let credentials = Credentials::new(
            config.access_key_id.clone().unwrap_or_default(),
            config.secret_access_key.clone().unwrap_or_default(),
            None,
            None,
            "originals-s3",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).credentials_provider(credentials);
        if let Some(region) = config.region {
            loader = loader.region(Region::new(region.as_str()));
        }
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }
        let sdk_config = loader.load().await;

        // Custom endpoints rarely support virtual-hosted buckets
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        if config.bucket.is_none() {
            tracing::warn!("No S3 bucket configured, uploads will fail until s3_bucket is set");
        }

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket_name: config.bucket.clone(),
            region: config.region,
            endpoint_url: config.endpoint_url.clone(),
        })
    }

    fn bucket(&self) -> Result<&str, StorageError> {
        self.bucket_name
            .as_deref()
            .ok_or_else(|| StorageError::ConfigError("s3_bucket is not configured".to_string()))
    }
}

fn canned_acl(acl: ObjectAcl) -> ObjectCannedAcl {
    match acl {
        ObjectAcl::PublicRead => ObjectCannedAcl::PublicRead,
    }
}

/// Public location of an object.
///
/// `PutObject` responses carry no location, so it is rebuilt from the bucket
/// addressing rules: path style for custom endpoints, virtual-hosted otherwise.
fn public_url(endpoint_url: Option<&str>, bucket: &str, region: Option<S3Region>, key: &str) -> String {
    match (endpoint_url, region) {
        (Some(endpoint), _) => format!("{}/{}/{}", endpoint, bucket, key),
        (None, Some(region)) => {
            let suffix = if region.is_china() { "amazonaws.com.cn" } else { "amazonaws.com" };
            format!("https://{}.s3.{}.{}/{}", bucket, region, suffix, key)
        }
        (None, None) => format!("https://{}.s3.amazonaws.com/{}", bucket, key),
    }
}

#[async_trait::async_trait]
impl BucketBackend for S3Backend {
    async fn put_object(&self, request: PutObject) -> Result<String, StorageError> {
        let bucket = self.bucket()?;

        tracing::info!("Uploading {} to S3 bucket {}", request.key, bucket);

        self.client
            .put_object()
            .bucket(bucket)
            .key(&request.key)
            .body(ByteStream::from(request.body))
            .acl(canned_acl(request.acl))
            .content_type(request.content_type)
            .send()
            .await
            .map_err(|e| StorageError::UploadError(request.key.clone(), DisplayErrorContext(&e).to_string()))?;

        let url = self.get_url(&request.key);
        tracing::info!("Upload complete: {}", url);

        Ok(url)
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let bucket = self.bucket()?;

        tracing::info!("Deleting {} from S3 bucket {}", key, bucket);

        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().and_then(|se| se.code()) == Some("NoSuchKey") {
                    StorageError::NotFound(key.to_string())
                } else {
                    StorageError::DeleteError(key.to_string(), DisplayErrorContext(&e).to_string())
                }
            })?;

        tracing::info!("Delete complete: {}", key);
        Ok(())
    }

    fn get_url(&self, key: &str) -> String {
        public_url(
            self.endpoint_url.as_deref(),
            self.bucket_name.as_deref().unwrap_or_default(),
            self.region,
            key,
        )
    }

    fn bucket_name(&self) -> Option<&str> {
        self.bucket_name.as_deref()
    }
}
