use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Upload failed for '{0}': {1}")]
    UploadError(String, String),

    #[error("Delete failed for '{0}': {1}")]
    DeleteError(String, String),

    #[error("Invalid storage configuration: {0}")]
    ConfigError(String),

    #[error("No such key: {0}")]
    NotFound(String),
}
