//! JSON print jobs
//!
//! A job is an options object plus an ordered list of encoder operations,
//! each tagged by `op`:
//!
//! ```json
//! {
//!   "options": { "width": 32, "codepageMapping": "epson" },
//!   "commands": [
//!     { "op": "initialize" },
//!     { "op": "codepage", "name": "auto" },
//!     { "op": "align", "value": "center" },
//!     { "op": "line", "value": "Café crème" },
//!     { "op": "image", "path": "logo.png" },
//!     { "op": "cut" }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use escpos_encoder::{EncoderOptions, EscPosEncoder};
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrintJob {
    pub options: EncoderOptions,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    Initialize,
    Codepage {
        name: String,
    },
    Text {
        value: String,
        wrap: Option<usize>,
    },
    Line {
        value: String,
        wrap: Option<usize>,
    },
    Newline,
    Feed {
        lines: usize,
    },
    Bold {
        value: Option<bool>,
    },
    Italic {
        value: Option<bool>,
    },
    Underline {
        value: Option<bool>,
    },
    Invert {
        value: Option<bool>,
    },
    Width {
        value: u8,
    },
    Height {
        value: u8,
    },
    Size {
        value: String,
    },
    Align {
        value: String,
    },
    /// Either inline base64 or a file path, relative paths resolve against the job file
    Image {
        base64: Option<String>,
        path: Option<PathBuf>,
    },
    Cut {
        mode: Option<String>,
    },
    Pulse {
        #[serde(default)]
        device: u8,
        #[serde(default = "default_pulse_on")]
        on: u32,
        #[serde(default = "default_pulse_off")]
        off: u32,
    },
    Raw {
        bytes: Vec<u8>,
    },
}

fn default_pulse_on() -> u32 {
    100
}

fn default_pulse_off() -> u32 {
    500
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Initialize => "initialize",
            Command::Codepage { .. } => "codepage",
            Command::Text { .. } => "text",
            Command::Line { .. } => "line",
            Command::Newline => "newline",
            Command::Feed { .. } => "feed",
            Command::Bold { .. } => "bold",
            Command::Italic { .. } => "italic",
            Command::Underline { .. } => "underline",
            Command::Invert { .. } => "invert",
            Command::Width { .. } => "width",
            Command::Height { .. } => "height",
            Command::Size { .. } => "size",
            Command::Align { .. } => "align",
            Command::Image { .. } => "image",
            Command::Cut { .. } => "cut",
            Command::Pulse { .. } => "pulse",
            Command::Raw { .. } => "raw",
        }
    }

    /// Apply this operation to `encoder`
    pub fn apply(&self, encoder: &mut EscPosEncoder, base_dir: &Path) -> anyhow::Result<()> {
        match self {
            Command::Initialize => {
                encoder.initialize();
            }
            Command::Codepage { name } => {
                encoder.codepage(name)?;
            }
            Command::Text { value, wrap } => {
                encoder.text(value, *wrap);
            }
            Command::Line { value, wrap } => {
                encoder.line(value, *wrap);
            }
            Command::Newline => {
                encoder.newline();
            }
            Command::Feed { lines } => {
                encoder.feed(*lines);
            }
            Command::Bold { value } => {
                encoder.bold(*value);
            }
            Command::Italic { value } => {
                encoder.italic(*value);
            }
            Command::Underline { value } => {
                encoder.underline(*value);
            }
            Command::Invert { value } => {
                encoder.invert(*value);
            }
            Command::Width { value } => {
                encoder.width(*value)?;
            }
            Command::Height { value } => {
                encoder.height(*value)?;
            }
            Command::Size { value } => {
                encoder.size(value);
            }
            Command::Align { value } => {
                encoder.align(value)?;
            }
            Command::Image { base64, path } => match (base64, path) {
                (Some(data), None) => {
                    encoder.image(data)?;
                }
                (None, Some(path)) => {
                    let path = base_dir.join(path);
                    let bytes = std::fs::read(&path)
                        .with_context(|| format!("failed to read image {}", path.display()))?;
                    encoder.image_bytes(&bytes)?;
                }
                _ => bail!("image needs exactly one of `base64` or `path`"),
            },
            Command::Cut { mode } => {
                encoder.cut(mode.as_deref())?;
            }
            Command::Pulse { device, on, off } => {
                encoder.pulse(*device, *on, *off)?;
            }
            Command::Raw { bytes } => {
                encoder.raw(bytes);
            }
        }
        Ok(())
    }
}

impl PrintJob {
    /// Run every command on a fresh encoder and return the document bytes
    ///
    /// Stops at the first failing command; nothing is returned for a
    /// partially applied job.
    #[instrument(skip(self), fields(commands = self.commands.len()))]
    pub fn run(&self, base_dir: &Path) -> anyhow::Result<Vec<u8>> {
        let mut encoder = EscPosEncoder::new(self.options.clone());
        for (index, command) in self.commands.iter().enumerate() {
            debug!(index, op = command.name(), "applying command");
            command
                .apply(&mut encoder, base_dir)
                .with_context(|| format!("command #{index} ({}) failed", command.name()))?;
        }
        Ok(encoder.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escpos_encoder::{EncodeError, PrinterType};
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

    fn parse(json: &str) -> PrintJob {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        let job = parse(
            r#"{
                "options": { "width": 32, "codepageMapping": "citizen" },
                "commands": [
                    { "op": "initialize" },
                    { "op": "bold" },
                    { "op": "line", "value": "hi", "wrap": 10 },
                    { "op": "pulse", "device": 1 }
                ]
            }"#,
        );
        assert_eq!(job.options.width, Some(32));
        assert_eq!(job.options.codepage_mapping, PrinterType::Citizen);
        assert_eq!(
            job.commands,
            vec![
                Command::Initialize,
                Command::Bold { value: None },
                Command::Line {
                    value: "hi".into(),
                    wrap: Some(10)
                },
                Command::Pulse {
                    device: 1,
                    on: 100,
                    off: 500
                },
            ]
        );
    }

    #[test]
    fn test_unknown_op_rejected() {
        let result = serde_json::from_str::<PrintJob>(r#"{"commands": [{"op": "beep"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_simple_document() {
        let job = parse(
            r#"{
                "commands": [
                    { "op": "initialize" },
                    { "op": "align", "value": "center" },
                    { "op": "line", "value": "OK" },
                    { "op": "cut", "mode": "partial" }
                ]
            }"#,
        );
        let bytes = job.run(Path::new(".")).unwrap();
        assert_eq!(
            bytes,
            vec![
                0x1B, 0x40, 0x1B, 0x61, 0x01, b'O', b'K', 0x0A, 0x0D, 0x1D, 0x56, 0x01
            ]
        );
    }

    #[test]
    fn test_run_reports_failing_command() {
        let job = parse(
            r#"{
                "commands": [
                    { "op": "initialize" },
                    { "op": "width", "value": 9 }
                ]
            }"#,
        );
        let err = job.run(Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("#1 (width)"));
        assert!(matches!(
            err.downcast_ref::<EncodeError>(),
            Some(EncodeError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_embedded_cut_fails() {
        let job = parse(
            r#"{
                "options": { "width": 10, "embedded": true },
                "commands": [{ "op": "cut" }]
            }"#,
        );
        let err = job.run(Path::new(".")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EncodeError>(),
            Some(EncodeError::EmbeddedNotSupported(_))
        ));
    }

    #[test]
    fn test_image_from_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 1, Rgba([0, 0, 0, 255])));
        image
            .save_with_format(dir.path().join("dot.png"), ImageFormat::Png)
            .unwrap();

        let job = parse(r#"{"commands": [{ "op": "image", "path": "dot.png" }]}"#);
        let bytes = job.run(dir.path()).unwrap();
        assert_eq!(bytes, vec![0x1D, 0x76, 0x30, 0x00, 1, 0, 1, 0, 0xFF]);
    }

    #[test]
    fn test_image_needs_one_source() {
        let job = parse(r#"{"commands": [{ "op": "image" }]}"#);
        assert!(job.run(Path::new(".")).is_err());

        let job = parse(r#"{"commands": [{ "op": "image", "path": "missing.png" }]}"#);
        let err = job.run(Path::new(".")).unwrap_err();
        assert!(format!("{err:#}").contains("missing.png"));
    }
}
