mod models;
mod defaults;
mod normalize;
mod loader;
mod schema;
mod errors;

pub use models::*;
pub use normalize::trim_param;
pub use schema::{auth_schema, AuthField, FieldKind};
pub use errors::ConfigError;
pub use defaults::{DEFAULT_CLOUDINARY_API_BASE, DEFAULT_MAX_WIDTH};
