mod bucket;
mod image;

pub use bucket::BucketAdapter;
pub use image::ImageAdapter;
