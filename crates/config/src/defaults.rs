//! Default values for configuration fields

/// Widest image sent to the image service
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

pub const DEFAULT_CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

pub fn max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

pub fn cloudinary_api_base() -> String {
    DEFAULT_CLOUDINARY_API_BASE.to_string()
}
