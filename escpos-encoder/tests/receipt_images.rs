use escpos_encoder::{
    EncodeError, FEED_LINES, ReceiptConfig, ReceiptModel, render_base64_images, render_images,
};
use image::{DynamicImage, ImageFormat, Luma, GrayImage};
use std::io::Cursor;

fn striped_png(width: u32, height: u32) -> Vec<u8> {
    let img = GrayImage::from_fn(width, height, |_, y| {
        if y % 2 == 0 { Luma([0]) } else { Luma([255]) }
    });
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode PNG");
    bytes
}

fn tail() -> Vec<u8> {
    let mut tail = Vec::new();
    for _ in 0..FEED_LINES {
        tail.extend([0x0A, 0x0D]);
    }
    tail.extend([0x1D, 0x56, 0x00]);
    tail
}

#[test]
fn test_receipt_layout() {
    let bytes = render_images(&ReceiptConfig::new(ReceiptModel::Model80), &[striped_png(16, 4)])
        .expect("Failed to render receipt");

    // 1. Initialize, then center; auto mode itself emits nothing
    assert_eq!(&bytes[..5], &[0x1B, 0x40, 0x1B, 0x61, 0x01]);

    // 2. One raster image, rows alternate black and white
    let image = &bytes[5..5 + 8 + 8];
    assert_eq!(&image[..8], &[0x1D, 0x76, 0x30, 0x00, 2, 0, 4, 0]);
    assert_eq!(&image[8..], &[0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);

    // 3. Feed and full cut
    assert_eq!(&bytes[5 + 16..], tail().as_slice());
}

#[test]
fn test_receipt_images_in_order() {
    let first = striped_png(8, 1);
    let second = striped_png(24, 2);
    let bytes = render_images(&ReceiptConfig::default(), &[first, second])
        .expect("Failed to render receipt");

    let first_at = 5;
    assert_eq!(&bytes[first_at..first_at + 8], &[0x1D, 0x76, 0x30, 0x00, 1, 0, 1, 0]);
    let second_at = first_at + 8 + 1;
    assert_eq!(&bytes[second_at..second_at + 8], &[0x1D, 0x76, 0x30, 0x00, 3, 0, 2, 0]);
    assert!(bytes.ends_with(&tail()));
}

#[test]
fn test_model_58_limits_width() {
    let wide = striped_png(1000, 2);
    let bytes = render_images(&ReceiptConfig::new(ReceiptModel::Model58), &[wide])
        .expect("Failed to render receipt");

    // 464 dots = 58 bytes per line
    assert_eq!(bytes[9], 58);
    assert_eq!(bytes[10], 0);
}

#[test]
fn test_base64_receipt() {
    use base64::Engine;
    let encoded = base64::engine::general_purpose::STANDARD.encode(striped_png(8, 2));
    let bytes = render_base64_images(&ReceiptConfig::default(), &[encoded])
        .expect("Failed to render receipt");
    assert_eq!(&bytes[5..15], &[0x1D, 0x76, 0x30, 0x00, 1, 0, 2, 0, 0xFF, 0x00]);
}

#[test]
fn test_receipt_fails_on_bad_image() {
    let result = render_images(&ReceiptConfig::default(), &[striped_png(8, 1), b"nope".to_vec()]);
    assert!(matches!(result, Err(EncodeError::Decode(_))));
}
