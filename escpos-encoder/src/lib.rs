//! # escpos-encoder
//!
//! ESC/POS command encoder for thermal receipt printers.
//!
//! ## Scope
//!
//! This crate turns formatting calls into bytes:
//! - ESC/POS command stream with a persistent formatting state
//! - Code page registry and per-character automatic code page selection
//! - Vendor specific code page selectors
//! - Image scaling, dithering and raster packing
//! - Receipts built from pre-rendered images
//!
//! Delivering the bytes (TCP port 9100, Bluetooth, serial, drivers) stays
//! with the caller.
//!
//! ## Example
//!
//! ```ignore
//! use escpos_encoder::{EncoderOptions, EscPosEncoder};
//!
//! let mut encoder = EscPosEncoder::new(EncoderOptions {
//!     width: Some(32),
//!     ..EncoderOptions::default()
//! });
//! encoder.initialize().codepage("auto")?;
//! encoder.align("center")?.bold(Some(true));
//! encoder.line("Кафе «Ромашка»", None);
//! encoder.bold(Some(false)).align("left")?;
//! encoder.line("Café crème x2", None);
//! encoder.feed(3).cut(None)?;
//!
//! let bytes = encoder.encode();
//! ```

pub mod codepage;
mod encoding;
mod error;
mod escpos;
mod options;
mod raster;
mod receipt;
mod vendor;

// Re-exports
pub use codepage::{CodePageDefinition, CodePageInfo};
pub use encoding::{
    EncodingFragment, PLACEHOLDER, auto_encode, can_encode, encode, encode_with, strip_diacritics,
};
pub use error::{EncodeError, EncodeResult};
pub use escpos::{CodepageMode, EscPosEncoder, FormatState};
pub use options::{Alignment, DEFAULT_CANDIDATES, EncoderOptions, ImageMode, PrinterProfile};
pub use raster::{
    BitonalImage, ImageRaster, decode_base64, dither, load, load_base64, pack, pack_row,
    rasterize, scale_for_printer,
};
pub use receipt::{
    FEED_LINES, ReceiptConfig, ReceiptModel, render_base64_images, render_images,
};
pub use vendor::PrinterType;
