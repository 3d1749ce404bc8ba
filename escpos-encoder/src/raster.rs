//! Image to monochrome raster pipeline
//!
//! decode → scale to the printer's dot width → Floyd-Steinberg dither →
//! pack rows MSB first, ready for the `GS v 0` raster command.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::{debug, instrument};

use crate::error::{EncodeError, EncodeResult};

/// 1-bit image, `true` = black, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitonalImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<bool>,
}

impl BitonalImage {
    fn row(&self, y: u32) -> &[bool] {
        let start = (y * self.width) as usize;
        &self.pixels[start..start + self.width as usize]
    }
}

/// Packed raster rows
///
/// `data.len() == height * ceil(width / 8)`. Bit `1 << (7 - x % 8)` of byte
/// `row * bytes_per_line + x / 8` is set iff pixel `(x, row)` is black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRaster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl ImageRaster {
    pub fn bytes_per_line(&self) -> u32 {
        self.width.div_ceil(8)
    }

    /// `GS v 0 0 xL xH yL yH` followed by the raster bytes
    ///
    /// Fails when `data` does not hold exactly `height` rows.
    pub fn command(&self) -> EncodeResult<Vec<u8>> {
        let expected = self.bytes_per_line() as usize * self.height as usize;
        if self.data.len() != expected {
            return Err(EncodeError::InvalidParameter(format!(
                "raster {}x{} needs {expected} bytes, got {}",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        let x_bytes = u16::try_from(self.bytes_per_line()).map_err(|_| {
            EncodeError::InvalidParameter(format!("image too wide: {} dots", self.width))
        })?;
        let rows = u16::try_from(self.height).map_err(|_| {
            EncodeError::InvalidParameter(format!("image too tall: {} rows", self.height))
        })?;

        let mut command = Vec::with_capacity(8 + self.data.len());
        command.extend_from_slice(&[0x1D, 0x76, 0x30, 0x00]);
        command.extend_from_slice(&x_bytes.to_le_bytes());
        command.extend_from_slice(&rows.to_le_bytes());
        command.extend_from_slice(&self.data);
        Ok(command)
    }
}

/// Decode base64 image text
///
/// Surrounding and embedded whitespace is ignored, as is a
/// `data:image/...;base64,` prefix.
pub fn decode_base64(input: &str) -> EncodeResult<Vec<u8>> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let payload = match cleaned.split_once(',') {
        Some((_, data)) => data,
        None => cleaned.as_str(),
    };
    STANDARD
        .decode(payload)
        .map_err(|e| EncodeError::Decode(format!("invalid base64 image data: {e}")))
}

/// Decode an image, format detected from its content
pub fn load(bytes: &[u8]) -> EncodeResult<DynamicImage> {
    image::load_from_memory(bytes)
        .map_err(|e| EncodeError::Decode(format!("failed to decode image data: {e}")))
}

/// Decode a base64 encoded image
pub fn load_base64(input: &str) -> EncodeResult<DynamicImage> {
    load(&decode_base64(input)?)
}

/// Downscale to `max_width` dots, keeping the aspect ratio
///
/// Images that already fit are returned unchanged.
pub fn scale_for_printer(image: DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    if width <= max_width {
        return image;
    }

    let new_height = (u64::from(height) * u64::from(max_width) / u64::from(width)).max(1) as u32;
    debug!(
        from = ?(width, height),
        to = ?(max_width, new_height),
        "scaling image to printer width"
    );
    image.resize_exact(max_width, new_height, FilterType::Triangle)
}

/// Floyd-Steinberg error diffusion to 1 bit
///
/// Works on ink coverage `(1 - luminance) * alpha`, so transparent pixels
/// come out white. A pixel is black when its diffused ink reaches 0.5.
/// Pixels are visited in raster order and each one sees the error already
/// pushed onto it.
pub fn dither(image: &DynamicImage) -> BitonalImage {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let (w, h) = (width as usize, height as usize);

    let mut ink: Vec<f32> = rgba
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            let luminance =
                (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) / 255.0;
            (1.0 - luminance) * (f32::from(a) / 255.0)
        })
        .collect();
    let mut pixels = vec![false; w * h];

    for y in 0..h {
        for x in 0..w {
            let index = y * w + x;
            let value = ink[index];
            let black = value >= 0.5;
            pixels[index] = black;

            let error = value - if black { 1.0 } else { 0.0 };
            if x + 1 < w {
                ink[index + 1] += error * 7.0 / 16.0;
            }
            if y + 1 < h {
                let below = index + w;
                if x > 0 {
                    ink[below - 1] += error * 3.0 / 16.0;
                }
                ink[below] += error * 5.0 / 16.0;
                if x + 1 < w {
                    ink[below + 1] += error * 1.0 / 16.0;
                }
            }
        }
    }

    BitonalImage {
        width,
        height,
        pixels,
    }
}

/// Pack one row of pixels MSB first, trailing bits zero
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; pixels.len().div_ceil(8)];
    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            bytes[i / 8] |= 1 << (7 - (i % 8));
        }
    }
    bytes
}

/// Pack a bitonal image into raster rows
pub fn pack(bitonal: &BitonalImage) -> EncodeResult<ImageRaster> {
    let expected = bitonal.width as usize * bitonal.height as usize;
    if bitonal.pixels.len() != expected {
        return Err(EncodeError::InvalidParameter(format!(
            "bitonal image {}x{} needs {expected} pixels, got {}",
            bitonal.width,
            bitonal.height,
            bitonal.pixels.len()
        )));
    }

    let mut data = Vec::with_capacity(bitonal.width.div_ceil(8) as usize * bitonal.height as usize);
    for y in 0..bitonal.height {
        data.extend(pack_row(bitonal.row(y)));
    }
    Ok(ImageRaster {
        width: bitonal.width,
        height: bitonal.height,
        data,
    })
}

/// Full pipeline from encoded image bytes
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn rasterize(bytes: &[u8], max_width: u32) -> EncodeResult<ImageRaster> {
    let decoded = load(bytes)?;
    debug!(dimensions = ?decoded.dimensions(), "image decoded");
    let scaled = scale_for_printer(decoded, max_width);
    pack(&dither(&scaled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)))
    }

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_pack_row_msb_first() {
        assert_eq!(pack_row(&[true, false, false, false, false, false, false, false]), vec![0x80]);
        assert_eq!(pack_row(&[false, false, false, false, false, false, false, true]), vec![0x01]);
        assert_eq!(pack_row(&[true; 16]), vec![0xFF, 0xFF]);
    }

    #[test]
    fn test_pack_nine_black_pixels() {
        let bitonal = BitonalImage {
            width: 9,
            height: 1,
            pixels: vec![true; 9],
        };
        let raster = pack(&bitonal).unwrap();
        assert_eq!(raster.bytes_per_line(), 2);
        assert_eq!(raster.data, vec![0xFF, 0x80]);
    }

    #[test]
    fn test_pack_length() {
        let bitonal = BitonalImage {
            width: 13,
            height: 5,
            pixels: vec![false; 65],
        };
        assert_eq!(pack(&bitonal).unwrap().data.len(), 5 * 2);
    }

    #[test]
    fn test_dither_solid_colors() {
        let black = dither(&solid(4, 3, [0, 0, 0, 255]));
        assert!(black.pixels.iter().all(|&p| p));
        let white = dither(&solid(4, 3, [255, 255, 255, 255]));
        assert!(white.pixels.iter().all(|&p| !p));
    }

    #[test]
    fn test_dither_transparent_is_white() {
        let clear = dither(&solid(5, 2, [0, 0, 0, 0]));
        assert!(clear.pixels.iter().all(|&p| !p));
    }

    #[test]
    fn test_dither_mid_gray_is_half_black() {
        let gray = dither(&solid(16, 16, [128, 128, 128, 255]));
        let black = gray.pixels.iter().filter(|&&p| p).count();
        assert!((100..=156).contains(&black), "{black} black pixels");
    }

    #[test]
    fn test_dither_deterministic() {
        let mut img = RgbaImage::new(23, 7);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let v = ((x * 11 + y * 37) % 256) as u8;
            *pixel = Rgba([v, v / 2, 255 - v, 255]);
        }
        let img = DynamicImage::ImageRgba8(img);
        assert_eq!(pack(&dither(&img)).unwrap(), pack(&dither(&img)).unwrap());
    }

    #[test]
    fn test_scale_for_printer() {
        let wide = scale_for_printer(solid(1000, 500, [0, 0, 0, 255]), 576);
        assert_eq!(wide.dimensions(), (576, 288));

        let thin = scale_for_printer(solid(2000, 1, [0, 0, 0, 255]), 464);
        assert_eq!(thin.dimensions(), (464, 1));

        let small = scale_for_printer(solid(100, 40, [0, 0, 0, 255]), 576);
        assert_eq!(small.dimensions(), (100, 40));
    }

    #[test]
    fn test_decode_base64_prefix_and_whitespace() {
        assert_eq!(decode_base64("  aGVs\nbG8=  ").unwrap(), b"hello");
        assert_eq!(decode_base64("data:image/png;base64,aGVsbG8=").unwrap(), b"hello");
        assert!(matches!(decode_base64("not base64!"), Err(EncodeError::Decode(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(matches!(load(b"definitely not an image"), Err(EncodeError::Decode(_))));
    }

    #[test]
    fn test_rasterize_and_command() {
        let bytes = png_bytes(&solid(9, 2, [0, 0, 0, 255]));
        let raster = rasterize(&bytes, 576).unwrap();
        assert_eq!(raster.data, vec![0xFF, 0x80, 0xFF, 0x80]);

        let command = raster.command().unwrap();
        assert_eq!(&command[..8], &[0x1D, 0x76, 0x30, 0x00, 2, 0, 2, 0]);
        assert_eq!(&command[8..], raster.data.as_slice());
    }

    #[test]
    fn test_command_rejects_oversized() {
        let raster = ImageRaster {
            width: 8,
            height: 70_000,
            data: vec![0; 70_000],
        };
        assert!(matches!(raster.command(), Err(EncodeError::InvalidParameter(_))));
    }

    #[test]
    fn test_pack_rejects_short_pixels() {
        let bitonal = BitonalImage {
            width: 4,
            height: 2,
            pixels: vec![true; 5],
        };
        assert!(matches!(pack(&bitonal), Err(EncodeError::InvalidParameter(_))));
    }

    #[test]
    fn test_command_rejects_mismatched_data() {
        let raster = ImageRaster {
            width: 9,
            height: 2,
            data: vec![0xFF, 0x80, 0xFF],
        };
        assert!(matches!(raster.command(), Err(EncodeError::InvalidParameter(_))));
    }
}
