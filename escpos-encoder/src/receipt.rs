//! Whole-receipt rendering from pre-rendered images
//!
//! A receipt is a stack of images printed centered on the full paper width,
//! followed by a short feed and a full cut.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{EncodeError, EncodeResult};
use crate::escpos::EscPosEncoder;
use crate::options::{EncoderOptions, PrinterProfile};

/// Blank lines between the last image and the cut
pub const FEED_LINES: usize = 5;

/// Paper model, serialized as its width in millimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiptModel {
    #[serde(rename = "58")]
    Model58,
    #[default]
    #[serde(rename = "80")]
    Model80,
}

impl ReceiptModel {
    pub fn profile(self) -> PrinterProfile {
        match self {
            ReceiptModel::Model58 => PrinterProfile::Mm58,
            ReceiptModel::Model80 => PrinterProfile::Mm80,
        }
    }

    /// Auto mode candidates used for receipts
    pub fn codepage_candidates(self) -> Vec<String> {
        vec!["cp866".to_string()]
    }

    /// Encoder options for this model
    pub fn options(self) -> EncoderOptions {
        EncoderOptions {
            codepage_candidates: self.codepage_candidates(),
            ..EncoderOptions::for_profile(self.profile())
        }
    }
}

impl fmt::Display for ReceiptModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReceiptModel::Model58 => "58",
            ReceiptModel::Model80 => "80",
        })
    }
}

impl FromStr for ReceiptModel {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "58" => Ok(ReceiptModel::Model58),
            "80" => Ok(ReceiptModel::Model80),
            other => Err(EncodeError::InvalidParameter(format!(
                "unknown receipt model {other}, expected 58 or 80"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    pub model: ReceiptModel,
}

impl ReceiptConfig {
    pub fn new(model: ReceiptModel) -> Self {
        Self { model }
    }
}

fn render(
    config: &ReceiptConfig,
    print: impl FnOnce(&mut EscPosEncoder) -> EncodeResult<()>,
) -> EncodeResult<Vec<u8>> {
    let mut encoder = EscPosEncoder::new(config.model.options());
    encoder.initialize().codepage("auto")?.align("center")?;
    print(&mut encoder)?;
    encoder.feed(FEED_LINES).cut(None)?;

    let bytes = encoder.encode();
    info!(model = %config.model, bytes = bytes.len(), "receipt rendered");
    Ok(bytes)
}

/// Render encoded images (PNG, JPEG, WebP) into one receipt
///
/// The first image that fails to decode aborts the whole receipt.
#[instrument(skip(images), fields(count = images.len()))]
pub fn render_images<B: AsRef<[u8]>>(
    config: &ReceiptConfig,
    images: &[B],
) -> EncodeResult<Vec<u8>> {
    render(config, |encoder| {
        for image in images {
            encoder.image_bytes(image.as_ref())?;
        }
        Ok(())
    })
}

/// Render base64 encoded images into one receipt
#[instrument(skip(images), fields(count = images.len()))]
pub fn render_base64_images<S: AsRef<str>>(
    config: &ReceiptConfig,
    images: &[S],
) -> EncodeResult<Vec<u8>> {
    render(config, |encoder| {
        for image in images {
            encoder.image(image.as_ref())?;
        }
        Ok(())
    })
}
