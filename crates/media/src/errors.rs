use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Resize task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Cloudinary API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Cloudinary destroy returned '{0}'")]
    DestroyRejected(String),

    #[error("File has no public_id")]
    MissingPublicId,

    #[error("Invalid Cloudinary configuration: {0}")]
    ConfigError(String),
}

// Convert reqwest errors to MediaError
impl From<reqwest::Error> for MediaError {
    fn from(err: reqwest::Error) -> Self {
        MediaError::HttpError(err.to_string())
    }
}
