use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    // Provider lifecycle
    ProviderInitialized {
        provider: String,
        bucket: Option<String>,
        region: Option<String>,
    },

    // Upload
    UploadStarted { key: String, size: usize },
    ImageUploaded { public_id: String, url: String },
    ObjectUploaded { key: String, url: String },
    UploadCompleted { key: String },

    // Delete
    DeleteStarted { key: String },
    ImageDestroyed { public_id: String },
    ObjectDeleted { key: String },
    ObjectAlreadyMissing { key: String },
    DeleteCompleted { key: String },

    // Errors
    Error { context: String, error: String },
}

pub struct EventBus {
    pub(super) silent_mode: bool,
}
