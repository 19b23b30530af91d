use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "cloudinary_s3_originals=info,originals_media=info,originals_storage=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`.
///
/// Does nothing when the host already installed a global subscriber.
pub fn initialize() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("Global tracing subscriber already set, keeping it");
    }
}
