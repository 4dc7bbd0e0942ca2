//! Raster encoding of finished canvases.

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult, RgbImage};
use log::debug;

/// Quality requested for every published image.
pub const DEFAULT_QUALITY: u8 = 82;

pub trait RasterEncoder {
    /// Serialises `image`; `quality` is handed to the codec unchanged.
    fn encode(&self, image: &RgbImage, quality: u8) -> ImageResult<Vec<u8>>;
}

/// WebP through the `image` crate.
///
/// The pure-Rust codec only writes lossless WebP, so `quality` is accepted and
/// logged but has no effect on the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpEncoder;

impl RasterEncoder for WebpEncoder {
    fn encode(&self, image: &RgbImage, quality: u8) -> ImageResult<Vec<u8>> {
        let mut buf = Vec::new();
        WebPEncoder::new_lossless(&mut buf).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )?;
        debug!(
            "encoded {}x{} webp at quality {}: {} bytes",
            image.width(),
            image.height(),
            quality,
            buf.len()
        );
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb};

    #[test]
    fn test_webp_roundtrip_dimensions() {
        let image = RgbImage::from_pixel(37, 21, Rgb([30, 130, 150]));
        let bytes = WebpEncoder.encode(&image, DEFAULT_QUALITY).unwrap();
        assert!(!bytes.is_empty());
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (37, 21));
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let image = RgbImage::from_fn(64, 48, |x, y| Rgb([x as u8 * 3, y as u8 * 5, 90]));
        let a = WebpEncoder.encode(&image, DEFAULT_QUALITY).unwrap();
        let b = WebpEncoder.encode(&image, DEFAULT_QUALITY).unwrap();
        assert_eq!(a, b);
    }
}
