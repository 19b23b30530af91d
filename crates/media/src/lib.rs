mod backend;
mod cloudinary;
mod resize;
mod signature;
mod errors;

pub use backend::{DestroyResult, ImageBackend, UploadedImage};
pub use cloudinary::CloudinaryClient;
pub use resize::{resize_to_width, ResizedImage};
pub use signature::sign_params;
pub use errors::MediaError;
