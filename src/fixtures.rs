/// Mock fixture data for testing and development
///
/// Synthetic spot images and branding feed payloads with known colors, used by
/// unit tests and the mock provider.
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Encode `pixels` (row-major, RGBA) as a PNG
pub fn png_from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    let raw: Vec<u8> = pixels.concat();
    let image = RgbaImage::from_raw(width, height, raw)
        .unwrap_or_else(|| panic!("{} pixels do not fill {}x{}", pixels.len(), width, height));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding of an in-memory buffer");
    bytes
}

/// A spot image the way the CDN serves them: a solid disc on a transparent square
pub fn spot_png(size: u32, rgb: [u8; 3]) -> Vec<u8> {
    let image = spot_image(size, rgb);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("PNG encoding of an in-memory buffer");
    bytes
}

/// Decoded form of `spot_png`
pub fn spot_image(size: u32, rgb: [u8; 3]) -> RgbaImage {
    let center = size as f64 / 2.0;
    let radius = center * 0.9;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f64 + 0.5 - center;
        let dy = y as f64 + 0.5 - center;
        if dx * dx + dy * dy <= radius * radius {
            image::Rgba([rgb[0], rgb[1], rgb[2], 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    })
}

/// Minimal `branding.json` covering the shapes the feed parser accepts
pub fn branding_json() -> &'static str {
    r##"{
  "version": 3,
  "teams": [
    {
      "teamID": 147,
      "teamName": "New York Yankees",
      "teamColors": {
        "primary": "#132448",
        "primaryLight": "#1c3a6e",
        "primaryDark": "#0a1226",
        "secondary": "#c4ced3"
      }
    },
    {
      "teamID": 119,
      "teamColors": {
        "primary": "#005a9c"
      }
    },
    {
      "teamID": 121,
      "teamColors": {
        "primaryLight": "not-a-color"
      }
    },
    {
      "teamID": 160
    }
  ]
}"##
}
