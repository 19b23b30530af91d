mod backend;
mod keys;
mod memory;
mod errors;

#[cfg(feature = "s3")]
mod s3;

pub use backend::{BucketBackend, ObjectAcl, PutObject};
pub use keys::derive_key;
pub use memory::{MemoryBackend, StoredObject};
pub use errors::*;

#[cfg(feature = "s3")]
pub use s3::S3Backend;
