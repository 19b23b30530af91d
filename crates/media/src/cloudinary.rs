use crate::backend::{DestroyResult, ImageBackend, UploadedImage};
use crate::signature::sign_params;
use crate::MediaError;
use bytes::Bytes;
use originals_config::ImageServiceConfig;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;

type Result<T> = std::result::Result<T, MediaError>;

/// Cloudinary upload API client
pub struct CloudinaryClient {
    cloud_name: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
    api_base: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl CloudinaryClient {
    pub fn new(config: &ImageServiceConfig) -> Self {
        Self {
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn cloud_name(&self) -> Option<&str> {
        self.cloud_name.as_deref()
    }

    fn endpoint(&self, resource_type: &str, action: &str) -> Result<String> {
        let cloud_name = self
            .cloud_name
            .as_deref()
            .ok_or_else(|| MediaError::ConfigError("cloudinary_cloud_name is not configured".to_string()))?;
        Ok(format!("{}/{}/{}/{}", self.api_base, cloud_name, resource_type, action))
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) => Ok((key, secret)),
            _ => Err(MediaError::ConfigError(
                "cloudinary_api_key and cloudinary_api_secret are required".to_string(),
            )),
        }
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        Err(MediaError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

#[async_trait::async_trait]
impl ImageBackend for CloudinaryClient {
    async fn upload(&self, data: Bytes) -> Result<UploadedImage> {
        let url = self.endpoint("auto", "upload")?;
        let (api_key, api_secret) = self.credentials()?;

        let timestamp = timestamp();
        let signature = sign_params(&[("timestamp", timestamp.as_str())], api_secret);

        tracing::debug!("Uploading {} bytes to Cloudinary", data.len());

        let form = Form::new()
            .text("api_key", api_key.to_string())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .part("file", Part::bytes(data.to_vec()).file_name("file"));

        let response = self.client.post(&url).multipart(form).send().await?;
        let image: UploadedImage = Self::parse_response(response).await?;

        tracing::info!("Cloudinary upload complete: {}", image.secure_url);
        Ok(image)
    }

    async fn destroy(&self, public_id: &str, invalidate: bool) -> Result<DestroyResult> {
        let url = self.endpoint("image", "destroy")?;
        let (api_key, api_secret) = self.credentials()?;

        let timestamp = timestamp();
        let invalidate = if invalidate { "true" } else { "" };
        let signature = sign_params(
            &[
                ("public_id", public_id),
                ("invalidate", invalidate),
                ("timestamp", timestamp.as_str()),
            ],
            api_secret,
        );

        tracing::debug!("Destroying Cloudinary image {}", public_id);

        let mut params = vec![
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
            ("api_key", api_key),
            ("signature", signature.as_str()),
        ];
        if !invalidate.is_empty() {
            params.push(("invalidate", invalidate));
        }

        let response = self.client.post(&url).form(&params).send().await?;
        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> CloudinaryClient {
        CloudinaryClient::new(&ImageServiceConfig {
            cloud_name: Some("demo".to_string()),
            api_key: Some("1234".to_string()),
            api_secret: Some("secret".to_string()),
            api_base: server.url("/v1_1"),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_upload() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1_1/demo/auto/upload")
                    .body_contains("name=\"api_key\"")
                    .body_contains("name=\"signature\"")
                    .body_contains("name=\"file\"");
                then.status(200).json_body(serde_json::json!({
                    "public_id": "abc",
                    "secure_url": "https://res.cloudinary.com/demo/image/upload/abc.png",
                    "resource_type": "image"
                }));
            })
            .await;

        let image = client(&server).upload(Bytes::from_static(b"png")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(image.public_id, "abc");
        assert_eq!(image.secure_url, "https://res.cloudinary.com/demo/image/upload/abc.png");
    }

    #[tokio::test]
    async fn test_upload_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1_1/demo/auto/upload");
                then.status(401)
                    .json_body(serde_json::json!({"error": {"message": "Invalid Signature"}}));
            })
            .await;

        let result = client(&server).upload(Bytes::from_static(b"png")).await;

        match result {
            Err(MediaError::ApiError { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid Signature");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_destroy_requests_invalidation() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1_1/demo/image/destroy")
                    .x_www_form_urlencoded_tuple("public_id", "abc")
                    .x_www_form_urlencoded_tuple("invalidate", "true")
                    .x_www_form_urlencoded_tuple("api_key", "1234");
                then.status(200).json_body(serde_json::json!({"result": "not found"}));
            })
            .await;

        let result = client(&server).destroy("abc", true).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.result, "not found");
        assert!(!result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_cloud_name() {
        let client = CloudinaryClient::new(&ImageServiceConfig::default());
        let result = client.upload(Bytes::from_static(b"png")).await;
        assert!(matches!(result, Err(MediaError::ConfigError(_))));
        assert_eq!(client.cloud_name(), None);
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let client = CloudinaryClient::new(&ImageServiceConfig {
            cloud_name: Some("demo".to_string()),
            ..Default::default()
        });
        let result = client.destroy("abc", true).await;
        assert!(matches!(result, Err(MediaError::ConfigError(_))));
    }
}
