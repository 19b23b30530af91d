use crate::MediaError;
use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat, ImageReader};
use std::io::Cursor;

/// Output of [`resize_to_width`]
#[derive(Debug, Clone)]
pub struct ResizedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
    pub resized: bool,
}

/// Downscales an image so it is at most `max_width` pixels wide.
///
/// Aspect ratio is kept and images are never enlarged; an image already
/// within the limit is returned byte-for-byte. The result is encoded in the
/// source format, or PNG when that format can't be written.
pub fn resize_to_width(data: &[u8], max_width: u32) -> Result<ResizedImage, MediaError> {
    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let format = reader.format();
    let (width, height) = reader.into_dimensions()?;

    if width <= max_width {
        return Ok(ResizedImage {
            data: Bytes::copy_from_slice(data),
            width,
            height,
            resized: false,
        });
    }

    let source = image::load_from_memory(data)?;
    let target_height = scaled_height(width, height, max_width);
    let output = source.resize_exact(max_width, target_height, FilterType::Lanczos3);

    tracing::debug!(
        "Resized image from {}x{} to {}x{}",
        width,
        height,
        output.width(),
        output.height()
    );

    Ok(ResizedImage {
        data: encode(&output, format.unwrap_or(ImageFormat::Png))?,
        width: output.width(),
        height: output.height(),
        resized: true,
    })
}

fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let scaled = (u64::from(height) * u64::from(target_width) + u64::from(width) / 2) / u64::from(width);
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Bytes, MediaError> {
    let mut out = Cursor::new(Vec::new());
    match image.write_to(&mut out, format) {
        Ok(()) => {}
        Err(ImageError::Unsupported(e)) => {
            tracing::debug!("Cannot encode {:?} ({}), falling back to PNG", format, e);
            out = Cursor::new(Vec::new());
            image.write_to(&mut out, ImageFormat::Png)?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(Bytes::from(out.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let image = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_downscales_wide_image() {
        let resized = resize_to_width(&png(2400, 1200), 1920).unwrap();

        assert!(resized.resized);
        assert_eq!((resized.width, resized.height), (1920, 960));

        let decoded = image::load_from_memory(&resized.data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1920, 960));
        assert_eq!(image::guess_format(&resized.data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_narrow_image_is_untouched() {
        let source = png(640, 480);
        let resized = resize_to_width(&source, 1920).unwrap();

        assert!(!resized.resized);
        assert_eq!((resized.width, resized.height), (640, 480));
        assert_eq!(resized.data.as_ref(), source.as_slice());
    }

    #[test]
    fn test_exact_width_is_untouched() {
        let resized = resize_to_width(&png(1920, 10), 1920).unwrap();
        assert!(!resized.resized);
        assert_eq!(resized.width, 1920);
    }

    #[test]
    fn test_rejects_non_image() {
        assert!(resize_to_width(b"definitely not an image", 1920).is_err());
        assert!(resize_to_width(&[], 1920).is_err());
    }

    #[test]
    fn test_scaled_height() {
        assert_eq!(scaled_height(3000, 2000, 1920), 1280);
        assert_eq!(scaled_height(1921, 1081, 1920), 1080);
        // Extreme panoramas keep at least one row
        assert_eq!(scaled_height(100_000, 1, 1920), 1);
    }
}
