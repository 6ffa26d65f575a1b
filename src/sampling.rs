/// Pixel sampling of decoded team spot images
use crate::error::SampleError;
use crate::types::BrandColor;
use image::RgbaImage;
use std::fmt;

/// Pixels whose alpha is at or below this are treated as background
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 200;

/// Which pixels of the image contribute to the color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleMode {
    /// Mean of every pixel above the alpha threshold
    Average,
    /// The single pixel at (width / 2, height / 2), alpha ignored
    CenterPixel,
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleMode::Average => f.write_str("average"),
            SampleMode::CenterPixel => f.write_str("center"),
        }
    }
}

/// Decode PNG (or JPEG) bytes into an RGBA8 buffer
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, SampleError> {
    let image = image::load_from_memory(bytes)?;
    Ok(image.to_rgba8())
}

/// Mean R, G, B over all pixels with alpha strictly above `alpha_threshold`
///
/// `rgba` is a raw RGBA8 buffer; a trailing partial pixel is ignored.
/// Channel means round half up. Returns `None` when no pixel qualifies.
pub fn average_color(rgba: &[u8], alpha_threshold: u8) -> Option<BrandColor> {
    let mut sums = [0u64; 3];
    let mut count = 0u64;

    for px in rgba.chunks_exact(4) {
        if px[3] > alpha_threshold {
            sums[0] += px[0] as u64;
            sums[1] += px[1] as u64;
            sums[2] += px[2] as u64;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let mean = |sum: u64| ((2 * sum + count) / (2 * count)) as u8;
    Some(BrandColor::new(mean(sums[0]), mean(sums[1]), mean(sums[2])))
}

/// Color of the center pixel, `None` for an empty image
pub fn center_pixel(image: &RgbaImage) -> Option<BrandColor> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return None;
    }
    let px = image.get_pixel(width / 2, height / 2);
    Some(BrandColor::new(px[0], px[1], px[2]))
}

/// Apply `mode` to a decoded image
pub fn sample(image: &RgbaImage, mode: SampleMode, alpha_threshold: u8) -> Option<BrandColor> {
    match mode {
        SampleMode::Average => average_color(image.as_raw(), alpha_threshold),
        SampleMode::CenterPixel => center_pixel(image),
    }
}

/// Decode and sample in one step
pub fn sample_bytes(
    bytes: &[u8],
    mode: SampleMode,
    alpha_threshold: u8,
) -> Result<BrandColor, SampleError> {
    let image = decode_image(bytes)?;
    sample(&image, mode, alpha_threshold).ok_or(SampleError::Empty { alpha_threshold })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, BLUE, CLEAR, RED};

    #[test]
    fn test_average_of_red_and_blue() {
        let pixels = [RED, RED, BLUE, BLUE].concat();
        let color = average_color(&pixels, DEFAULT_ALPHA_THRESHOLD).unwrap();
        assert_eq!(color.to_hex(), "#800080");
    }

    #[test]
    fn test_transparent_pixels_are_excluded() {
        let pixels = [RED, CLEAR, CLEAR, CLEAR].concat();
        let color = average_color(&pixels, DEFAULT_ALPHA_THRESHOLD).unwrap();
        assert_eq!(color.to_hex(), "#ff0000");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let pixels = [[10, 20, 30, 200], [200, 100, 50, 201]].concat();
        let color = average_color(&pixels, 200).unwrap();
        assert_eq!(color, BrandColor::new(200, 100, 50));
    }

    #[test]
    fn test_no_qualifying_pixel() {
        assert_eq!(average_color(&[CLEAR, CLEAR].concat(), DEFAULT_ALPHA_THRESHOLD), None);
        assert_eq!(average_color(&[], DEFAULT_ALPHA_THRESHOLD), None);
    }

    #[test]
    fn test_partial_trailing_pixel_ignored() {
        let mut pixels = RED.to_vec();
        pixels.extend_from_slice(&[0, 0, 255]);
        assert_eq!(average_color(&pixels, 0), Some(BrandColor::new(255, 0, 0)));
    }

    #[test]
    fn test_rounding_matches_half_up() {
        // (1 + 2) / 2 = 1.5 -> 2
        let pixels = [[1, 0, 0, 255], [2, 0, 0, 255]].concat();
        assert_eq!(average_color(&pixels, 0), Some(BrandColor::new(2, 0, 0)));
    }

    #[test]
    fn test_center_pixel() {
        let image = RgbaImage::from_raw(2, 2, [RED, RED, RED, BLUE].concat()).unwrap();
        assert_eq!(center_pixel(&image), Some(BrandColor::new(0, 0, 255)));
        assert_eq!(center_pixel(&RgbaImage::new(0, 0)), None);
    }

    #[test]
    fn test_sample_bytes_png() {
        let png = fixtures::png_from_pixels(2, 2, &[RED, RED, BLUE, BLUE]);
        let color = sample_bytes(&png, SampleMode::Average, DEFAULT_ALPHA_THRESHOLD).unwrap();
        assert_eq!(color.to_hex(), "#800080");
    }

    #[test]
    fn test_sample_bytes_transparent_png_is_empty() {
        let png = fixtures::png_from_pixels(2, 2, &[CLEAR; 4]);
        let err = sample_bytes(&png, SampleMode::Average, DEFAULT_ALPHA_THRESHOLD).unwrap_err();
        assert!(matches!(err, SampleError::Empty { alpha_threshold: 200 }));
    }

    #[test]
    fn test_sample_bytes_garbage_is_decode_error() {
        let err = sample_bytes(b"not an image", SampleMode::Average, 200).unwrap_err();
        assert!(matches!(err, SampleError::Decode(_)));
    }
}
