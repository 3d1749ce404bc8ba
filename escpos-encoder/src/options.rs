//! Encoder configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EncodeError;
use crate::vendor::PrinterType;

/// Candidates tried by `codepage("auto")` when none are configured
pub const DEFAULT_CANDIDATES: [&str; 11] = [
    "cp437", "cp858", "cp860", "cp861", "cp863", "cp865", "cp852", "cp857", "cp855", "cp866",
    "cp869",
];

/// Image rendering mode tag
///
/// Informational only, images are always sent with the raster command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    #[default]
    Column,
    Raster,
}

/// Per-encoder configuration
///
/// Deserializes from a partial camelCase object; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncoderOptions {
    /// Printable width in character columns
    pub width: Option<usize>,
    /// Render into a sub-region (table cell, box); requires `width`
    pub embedded: bool,
    pub word_wrap: bool,
    pub image_mode: ImageMode,
    /// Vendor selector table for `ESC t`
    pub codepage_mapping: PrinterType,
    /// Ordered pages tried by automatic code page selection
    pub codepage_candidates: Vec<String>,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            width: None,
            embedded: false,
            word_wrap: true,
            image_mode: ImageMode::default(),
            codepage_mapping: PrinterType::default(),
            codepage_candidates: DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl EncoderOptions {
    /// Options for a printer profile's full paper width
    pub fn for_profile(profile: PrinterProfile) -> Self {
        Self {
            width: Some(profile.columns()),
            ..Self::default()
        }
    }

    /// Embedded mode only takes effect with a configured width
    pub fn is_embedded(&self) -> bool {
        self.embedded && self.width.is_some()
    }

    /// Maximum raster width in dots for the configured width
    pub fn max_dots(&self) -> u32 {
        PrinterProfile::max_dots_for_columns(self.width)
    }
}

/// Paper profiles with known column and dot widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterProfile {
    /// 58mm paper
    Mm58,
    /// 80mm paper
    Mm80,
}

impl PrinterProfile {
    pub fn columns(self) -> usize {
        match self {
            PrinterProfile::Mm58 => 32,
            PrinterProfile::Mm80 => 46,
        }
    }

    pub fn max_dots(self) -> u32 {
        match self {
            PrinterProfile::Mm58 => 464,
            PrinterProfile::Mm80 => 576,
        }
    }

    /// Dot width for a column count, 576 when the count matches no profile
    pub fn max_dots_for_columns(width: Option<usize>) -> u32 {
        match width {
            Some(columns) if columns == PrinterProfile::Mm58.columns() => {
                PrinterProfile::Mm58.max_dots()
            }
            _ => PrinterProfile::Mm80.max_dots(),
        }
    }
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Payload of `ESC a`
    pub fn code(self) -> u8 {
        match self {
            Alignment::Left => 0x00,
            Alignment::Center => 0x01,
            Alignment::Right => 0x02,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        })
    }
}

impl FromStr for Alignment {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(EncodeError::InvalidAlignment(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncoderOptions::default();
        assert_eq!(options.width, None);
        assert!(!options.embedded);
        assert!(options.word_wrap);
        assert_eq!(options.image_mode, ImageMode::Column);
        assert_eq!(options.codepage_mapping, PrinterType::Epson);
        assert_eq!(options.codepage_candidates.len(), 11);
        assert_eq!(options.codepage_candidates[0], "cp437");
    }

    #[test]
    fn test_partial_json() {
        let options: EncoderOptions =
            serde_json::from_str(r#"{"width": 32, "codepageMapping": "star"}"#).unwrap();
        assert_eq!(options.width, Some(32));
        assert_eq!(options.codepage_mapping, PrinterType::Star);
        assert!(options.word_wrap);
        assert_eq!(options.codepage_candidates[10], "cp869");
    }

    #[test]
    fn test_embedded_needs_width() {
        let mut options = EncoderOptions {
            embedded: true,
            ..EncoderOptions::default()
        };
        assert!(!options.is_embedded());
        options.width = Some(20);
        assert!(options.is_embedded());
    }

    #[test]
    fn test_max_dots() {
        assert_eq!(EncoderOptions::for_profile(PrinterProfile::Mm58).max_dots(), 464);
        assert_eq!(EncoderOptions::for_profile(PrinterProfile::Mm80).max_dots(), 576);
        assert_eq!(EncoderOptions::default().max_dots(), 576);
        assert_eq!(PrinterProfile::max_dots_for_columns(Some(42)), 576);
    }

    #[test]
    fn test_alignment_parse() {
        assert_eq!("center".parse::<Alignment>(), Ok(Alignment::Center));
        assert_eq!(
            "middle".parse::<Alignment>(),
            Err(EncodeError::InvalidAlignment("middle".into()))
        );
        assert_eq!(Alignment::Right.code(), 0x02);
    }
}
