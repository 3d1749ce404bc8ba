//! ESC/POS command encoder
//!
//! Provides a fluent API that turns formatting calls, text and images into
//! one ESC/POS byte stream. Bytes collect in a pending line (`queued`) that
//! is moved into the output (`buffer`) at line boundaries; in embedded mode
//! alignment is simulated by padding the pending line at that point.

use std::iter;

use tracing::{debug, instrument, trace};

use crate::codepage;
use crate::encoding::{self, auto_encode};
use crate::error::{EncodeError, EncodeResult};
use crate::options::{Alignment, EncoderOptions, PrinterProfile};
use crate::raster::{self, ImageRaster};

/// Formatting the printer is currently in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatState {
    /// Last `ESC t` selector sent
    pub codepage: u8,
    pub align: Alignment,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub invert: bool,
    /// Character width multiplier, 1..=8
    pub width: u8,
    /// Character height multiplier, 1..=8
    pub height: u8,
}

impl Default for FormatState {
    fn default() -> Self {
        Self {
            codepage: 0,
            align: Alignment::Left,
            bold: false,
            italic: false,
            underline: false,
            invert: false,
            width: 1,
            height: 1,
        }
    }
}

/// How text is mapped onto code pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodepageMode {
    /// Every character goes through one page
    Fixed(String),
    /// Pages are picked per character from the configured candidates
    Auto,
}

impl Default for CodepageMode {
    fn default() -> Self {
        CodepageMode::Fixed("ascii".to_string())
    }
}

/// ESC/POS command encoder
///
/// One instance serves one logical writer; calls mutate the formatting state
/// and buffers in place. [`EscPosEncoder::encode`] returns the stream and
/// resets the encoder for the next document, keeping its options.
#[derive(Debug, Clone)]
pub struct EscPosEncoder {
    options: EncoderOptions,
    buffer: Vec<u8>,
    queued: Vec<u8>,
    cursor: usize,
    codepage: CodepageMode,
    state: FormatState,
}

impl EscPosEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self {
            options,
            buffer: Vec::with_capacity(4096),
            queued: Vec::new(),
            cursor: 0,
            codepage: CodepageMode::default(),
            state: FormatState::default(),
        }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    pub fn state(&self) -> &FormatState {
        &self.state
    }

    /// Columns already used on the current line
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn codepage_mode(&self) -> &CodepageMode {
        &self.codepage
    }

    fn embedded(&self) -> bool {
        self.options.is_embedded()
    }

    // === Buffering ===

    fn queue(&mut self, bytes: &[u8]) {
        self.queued.extend_from_slice(bytes);
    }

    /// Move the pending line into the output, padding it in embedded mode
    fn flush(&mut self) {
        if self.embedded() {
            let width = self.options.width.unwrap_or(0);
            let indent = width.saturating_sub(self.cursor);

            match self.state.align {
                Alignment::Left => self.queued.extend(iter::repeat_n(b' ', indent)),
                Alignment::Center => {
                    let half = indent / 2;
                    self.queued.extend(iter::repeat_n(b' ', half));
                    self.queued
                        .splice(0..0, iter::repeat_n(b' ', half + indent % 2));
                }
                Alignment::Right => {
                    self.queued.splice(0..0, iter::repeat_n(b' ', indent));
                }
            }
        }

        trace!(bytes = self.queued.len(), "flushing line");
        self.buffer.append(&mut self.queued);
        self.cursor = 0;
    }

    /// Re-send formatting after an embedded line break
    fn restore_state(&mut self) {
        let state = self.state.clone();
        self.bold(Some(state.bold))
            .italic(Some(state.italic))
            .underline(Some(state.underline))
            .invert(Some(state.invert));
        self.queue(&[0x1B, 0x74, state.codepage]);
    }

    // === Text Encoding ===

    /// Encode one line, selecting pages per fragment in auto mode
    fn encode_line(&mut self, line: &str) -> Vec<u8> {
        let candidates = match &self.codepage {
            CodepageMode::Fixed(page) => return encoding::encode(line, page),
            CodepageMode::Auto => &self.options.codepage_candidates,
        };

        let fragments = auto_encode(line, candidates.as_slice());
        let mut bytes = Vec::with_capacity(line.len() + 3 * fragments.len());
        for fragment in fragments {
            let selector = self
                .options
                .codepage_mapping
                .selector(&fragment.codepage)
                .unwrap_or(0);
            if selector != self.state.codepage {
                debug!(codepage = %fragment.codepage, selector, "switching codepage");
            }
            bytes.extend_from_slice(&[0x1B, 0x74, selector]);
            bytes.extend_from_slice(&fragment.bytes);
            self.state.codepage = selector;
        }
        bytes
    }

    /// Greedy word wrap
    ///
    /// The first line starts `cursor` columns in, so it gets that much less
    /// room. Wrapping is off unless a width is passed or word wrap is on with
    /// a configured width.
    fn wrap(&self, value: &str, position: Option<usize>) -> Vec<String> {
        let configured = self.options.width.filter(|_| self.options.word_wrap);
        let Some(width) = position.or(configured) else {
            return vec![value.to_string()];
        };

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_len = 0;

        for (index, word) in value.split(' ').enumerate() {
            let indent = if index == 0 { self.cursor } else { 0 };
            let word_len = indent + word.chars().count();
            let separator = usize::from(current_len > 0);

            if current_len + word_len + separator > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(word);
                current_len = word_len;
            } else {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
            }
        }

        if current_len > 0 {
            lines.push(current);
        }
        lines
    }

    // === Document ===

    /// Reset the printer (ESC @)
    pub fn initialize(&mut self) -> &mut Self {
        self.queue(&[0x1B, 0x40]);
        self.flush();
        self
    }

    /// Select a code page by name, or `"auto"` for per-character selection
    pub fn codepage(&mut self, name: &str) -> EncodeResult<&mut Self> {
        if name == "auto" {
            self.codepage = CodepageMode::Auto;
            return Ok(self);
        }

        if !codepage::supports(name) {
            return Err(EncodeError::UnknownCodepage(name.to_string()));
        }

        let mapping = self.options.codepage_mapping;
        let selector = mapping
            .selector(name)
            .ok_or_else(|| EncodeError::UnsupportedByPrinter(format!("{name} on {mapping}")))?;

        self.codepage = CodepageMode::Fixed(name.to_string());
        self.state.codepage = selector;
        self.queue(&[0x1B, 0x74, selector]);
        Ok(self)
    }

    // === Text Output ===

    /// Write text, wrapped at `wrap` columns or the configured width
    pub fn text(&mut self, value: &str, wrap: Option<usize>) -> &mut Self {
        let lines = self.wrap(value, wrap);
        let last = lines.len().saturating_sub(1);

        for (index, line) in lines.iter().enumerate() {
            let bytes = self.encode_line(line);

            // 80mm paper prints with a two column margin
            if self.options.width == Some(PrinterProfile::Mm80.columns())
                && self.state.align != Alignment::Center
            {
                self.queue(b"  ");
            }
            self.queue(&bytes);

            self.cursor += line.chars().count() * usize::from(self.state.width);
            if !self.embedded() {
                if let Some(width) = self.options.width.filter(|w| *w > 0) {
                    self.cursor %= width;
                }
            }

            if index < last {
                self.newline();
            }
        }
        self
    }

    /// End the current line (LF CR)
    pub fn newline(&mut self) -> &mut Self {
        self.flush();
        self.queue(&[0x0A, 0x0D]);
        if self.embedded() {
            self.restore_state();
        }
        self
    }

    /// Write text followed by a newline
    pub fn line(&mut self, value: &str, wrap: Option<usize>) -> &mut Self {
        self.text(value, wrap);
        self.newline()
    }

    /// Write `lines` empty lines
    pub fn feed(&mut self, lines: usize) -> &mut Self {
        for _ in 0..lines {
            self.newline();
        }
        self
    }

    // === Text Style ===

    /// Bold (ESC E), toggled when `value` is `None`
    pub fn bold(&mut self, value: Option<bool>) -> &mut Self {
        self.state.bold = value.unwrap_or(!self.state.bold);
        self.queue(&[0x1B, 0x45, u8::from(self.state.bold)]);
        self
    }

    /// Italic (ESC 4), toggled when `value` is `None`
    pub fn italic(&mut self, value: Option<bool>) -> &mut Self {
        self.state.italic = value.unwrap_or(!self.state.italic);
        self.queue(&[0x1B, 0x34, u8::from(self.state.italic)]);
        self
    }

    /// Underline (ESC -), toggled when `value` is `None`
    pub fn underline(&mut self, value: Option<bool>) -> &mut Self {
        self.state.underline = value.unwrap_or(!self.state.underline);
        self.queue(&[0x1B, 0x2D, u8::from(self.state.underline)]);
        self
    }

    /// White on black (GS B), toggled when `value` is `None`
    pub fn invert(&mut self, value: Option<bool>) -> &mut Self {
        self.state.invert = value.unwrap_or(!self.state.invert);
        self.queue(&[0x1D, 0x42, u8::from(self.state.invert)]);
        self
    }

    fn character_size(&mut self) {
        let payload = (self.state.height - 1) | ((self.state.width - 1) << 4);
        self.queue(&[0x1D, 0x21, payload]);
    }

    /// Character width multiplier (GS !)
    pub fn width(&mut self, width: u8) -> EncodeResult<&mut Self> {
        if !(1..=8).contains(&width) {
            return Err(EncodeError::InvalidParameter(format!(
                "width must be between 1 and 8, got {width}"
            )));
        }
        self.state.width = width;
        self.character_size();
        Ok(self)
    }

    /// Character height multiplier (GS !)
    pub fn height(&mut self, height: u8) -> EncodeResult<&mut Self> {
        if !(1..=8).contains(&height) {
            return Err(EncodeError::InvalidParameter(format!(
                "height must be between 1 and 8, got {height}"
            )));
        }
        self.state.height = height;
        self.character_size();
        Ok(self)
    }

    /// Font size (ESC M), `"small"` selects font B
    pub fn size(&mut self, value: &str) -> &mut Self {
        self.queue(&[0x1B, 0x4D, u8::from(value == "small")]);
        self
    }

    // === Alignment ===

    /// Align by name: left, center or right
    pub fn align(&mut self, value: &str) -> EncodeResult<&mut Self> {
        let alignment = value.parse::<Alignment>()?;
        Ok(self.alignment(alignment))
    }

    /// Set alignment (ESC a); embedded mode pads at flush instead
    pub fn alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.state.align = alignment;
        if !self.embedded() {
            self.queue(&[0x1B, 0x61, alignment.code()]);
        }
        self
    }

    // === Images ===

    /// Print a base64 encoded image
    pub fn image(&mut self, base64: &str) -> EncodeResult<&mut Self> {
        let bytes = raster::decode_base64(base64)?;
        self.image_bytes(&bytes)
    }

    /// Print an encoded image (PNG, JPEG, WebP), scaled to the paper width
    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn image_bytes(&mut self, bytes: &[u8]) -> EncodeResult<&mut Self> {
        let raster = raster::rasterize(bytes, self.options.max_dots())?;
        self.image_raster(&raster)
    }

    /// Print an already packed raster (GS v 0); never buffered for wrapping
    pub fn image_raster(&mut self, raster: &ImageRaster) -> EncodeResult<&mut Self> {
        let command = raster.command()?;
        debug!(
            width = raster.width,
            height = raster.height,
            bytes = raster.data.len(),
            "queueing raster image"
        );
        self.queue(&command);
        self.flush();
        Ok(self)
    }

    // === Paper Control ===

    /// Cut paper (GS V), `"partial"` leaves a small connection
    pub fn cut(&mut self, mode: Option<&str>) -> EncodeResult<&mut Self> {
        if self.embedded() {
            return Err(EncodeError::EmbeddedNotSupported("Cut"));
        }
        self.queue(&[0x1D, 0x56, u8::from(mode == Some("partial"))]);
        Ok(self)
    }

    // === Cash Drawer ===

    /// Pulse a drawer kick pin (ESC p), times in milliseconds
    pub fn pulse(&mut self, device: u8, on_ms: u32, off_ms: u32) -> EncodeResult<&mut Self> {
        if self.embedded() {
            return Err(EncodeError::EmbeddedNotSupported("Pulse"));
        }
        let ticks = |ms: u32| ((f64::from(ms) / 2.0).round() as u32).min(500) as u8;
        self.queue(&[0x1B, 0x70, u8::from(device != 0), ticks(on_ms), ticks(off_ms)]);
        Ok(self)
    }

    // === Raw Commands ===

    /// Write raw bytes directly
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.queue(bytes);
        self
    }

    // === Build ===

    /// Finish the document and return its bytes
    ///
    /// Buffers, formatting state, cursor and code page mode are reset;
    /// options are kept.
    #[instrument(skip(self))]
    pub fn encode(&mut self) -> Vec<u8> {
        self.flush();
        let result = std::mem::take(&mut self.buffer);
        self.queued.clear();
        self.cursor = 0;
        self.codepage = CodepageMode::default();
        self.state = FormatState::default();
        debug!(bytes = result.len(), "encoded document");
        result
    }
}

impl Default for EscPosEncoder {
    fn default() -> Self {
        Self::new(EncoderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::PrinterType;

    fn with_width(width: usize) -> EscPosEncoder {
        EscPosEncoder::new(EncoderOptions {
            width: Some(width),
            ..EncoderOptions::default()
        })
    }

    fn embedded(width: usize) -> EscPosEncoder {
        EscPosEncoder::new(EncoderOptions {
            width: Some(width),
            embedded: true,
            ..EncoderOptions::default()
        })
    }

    #[test]
    fn test_initialize() {
        let mut e = EscPosEncoder::default();
        assert_eq!(e.initialize().encode(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_style_toggles() {
        let mut e = EscPosEncoder::default();
        e.bold(None).bold(None).italic(Some(true)).underline(None).invert(Some(false));
        assert_eq!(
            e.encode(),
            vec![
                0x1B, 0x45, 0x01, 0x1B, 0x45, 0x00, 0x1B, 0x34, 0x01, 0x1B, 0x2D, 0x01, 0x1D,
                0x42, 0x00
            ]
        );
    }

    #[test]
    fn test_width_height_payload() {
        let mut e = EscPosEncoder::default();
        e.width(3).unwrap();
        assert_eq!(e.encode(), vec![0x1D, 0x21, 0x20]);

        e.width(2).unwrap().height(4).unwrap();
        assert_eq!(e.encode(), vec![0x1D, 0x21, 0x10, 0x1D, 0x21, 0x13]);
    }

    #[test]
    fn test_width_out_of_range() {
        let mut e = EscPosEncoder::default();
        assert!(matches!(e.width(0), Err(EncodeError::InvalidParameter(_))));
        assert!(matches!(e.height(9), Err(EncodeError::InvalidParameter(_))));
        assert_eq!(e.state().width, 1);
        assert!(e.encode().is_empty());
    }

    #[test]
    fn test_size() {
        let mut e = EscPosEncoder::default();
        e.size("small").size("normal");
        assert_eq!(e.encode(), vec![0x1B, 0x4D, 0x01, 0x1B, 0x4D, 0x00]);
    }

    #[test]
    fn test_align() {
        let mut e = EscPosEncoder::default();
        e.align("center").unwrap();
        assert_eq!(e.state().align, Alignment::Center);
        assert_eq!(e.encode(), vec![0x1B, 0x61, 0x01]);

        assert_eq!(
            e.align("justify").err(),
            Some(EncodeError::InvalidAlignment("justify".into()))
        );
    }

    #[test]
    fn test_align_embedded_is_silent() {
        let mut e = embedded(10);
        e.align("right").unwrap();
        assert_eq!(e.state().align, Alignment::Right);
        assert!(e.queued.is_empty());
    }

    #[test]
    fn test_cut() {
        let mut e = EscPosEncoder::default();
        e.cut(None).unwrap();
        assert_eq!(e.encode(), vec![0x1D, 0x56, 0x00]);
        e.cut(Some("partial")).unwrap();
        assert_eq!(e.encode(), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_cut_and_pulse_refused_when_embedded() {
        let mut e = embedded(20);
        assert_eq!(e.cut(None).err(), Some(EncodeError::EmbeddedNotSupported("Cut")));
        assert_eq!(
            e.pulse(0, 100, 500).err(),
            Some(EncodeError::EmbeddedNotSupported("Pulse"))
        );
    }

    #[test]
    fn test_pulse() {
        let mut e = EscPosEncoder::default();
        e.pulse(0, 100, 500).unwrap();
        assert_eq!(e.encode(), vec![0x1B, 0x70, 0x00, 0x32, 0xFA]);
        e.pulse(1, 2000, 2000).unwrap();
        assert_eq!(e.encode(), vec![0x1B, 0x70, 0x01, 0xF4, 0xF4]);
        e.pulse(7, 3, 0).unwrap();
        assert_eq!(e.encode(), vec![0x1B, 0x70, 0x01, 0x02, 0x00]);
    }

    #[test]
    fn test_codepage_fixed() {
        let mut e = EscPosEncoder::default();
        e.codepage("cp866").unwrap().text("Жa", None);
        assert_eq!(e.state().codepage, 0x11);
        assert_eq!(e.encode(), vec![0x1B, 0x74, 0x11, 0x86, b'a']);
    }

    #[test]
    fn test_codepage_errors() {
        let mut e = EscPosEncoder::default();
        assert_eq!(
            e.codepage("cp9999").err(),
            Some(EncodeError::UnknownCodepage("cp9999".into()))
        );

        let mut bixolon = EscPosEncoder::new(EncoderOptions {
            codepage_mapping: PrinterType::Bixolon,
            ..EncoderOptions::default()
        });
        assert!(matches!(
            bixolon.codepage("cp866"),
            Err(EncodeError::UnsupportedByPrinter(_))
        ));
        assert!(bixolon.encode().is_empty());
    }

    #[test]
    fn test_default_codepage_is_ascii() {
        let mut e = EscPosEncoder::default();
        e.text("café", None);
        assert_eq!(e.encode(), b"caf?".to_vec());
    }

    #[test]
    fn test_auto_codepage() {
        let mut e = EscPosEncoder::default();
        e.codepage("auto").unwrap().text("né Жм", None);
        assert_eq!(e.state().codepage, 0x22);
        assert_eq!(
            e.encode(),
            vec![0x1B, 0x74, 0x00, b'n', 0x82, b' ', 0x1B, 0x74, 0x22, 0xEA, 0xD2]
        );
    }

    #[test]
    fn test_wrap_at_width() {
        let mut e = with_width(10);
        e.line("hello world foo", None);
        assert_eq!(e.encode(), b"hello\n\rworld foo\n\r".to_vec());
    }

    #[test]
    fn test_wrap_accounts_for_cursor() {
        let mut e = EscPosEncoder::default();
        e.text("abc", None).text("defg hij", Some(8));
        assert_eq!(e.encode(), b"abcdefg\n\rhij".to_vec());
    }

    #[test]
    fn test_wrap_disabled() {
        let mut e = EscPosEncoder::new(EncoderOptions {
            width: Some(5),
            word_wrap: false,
            ..EncoderOptions::default()
        });
        e.text("one two three", None);
        assert_eq!(e.encode(), b"one two three".to_vec());
    }

    #[test]
    fn test_wrap_empty_value() {
        let mut e = with_width(10);
        e.text("", None);
        assert!(e.encode().is_empty());
    }

    #[test]
    fn test_wrap_keeps_tabs() {
        let mut e = with_width(32);
        e.text("a\tb", None);
        assert_eq!(e.encode(), b"a\tb".to_vec());

        let mut narrow = with_width(4);
        narrow.text("x\ty z", None);
        assert_eq!(narrow.encode(), b"x\ty\n\rz".to_vec());
    }

    #[test]
    fn test_cursor_wraps_modulo_width() {
        let mut e = with_width(5);
        e.text("abcdefg", None);
        assert_eq!(e.cursor(), 2);

        let mut wide = EscPosEncoder::default();
        wide.width(2).unwrap().text("ab", None);
        assert_eq!(wide.cursor(), 4);
    }

    #[test]
    fn test_80mm_margin() {
        let mut e = with_width(46);
        e.text("hi", None);
        assert_eq!(e.encode(), b"  hi".to_vec());

        e.align("center").unwrap().text("hi", None);
        assert_eq!(e.encode(), vec![0x1B, 0x61, 0x01, b'h', b'i']);
    }

    #[test]
    fn test_embedded_padding() {
        let mut left = embedded(10);
        left.text("abc", None);
        assert_eq!(left.encode(), b"abc       ".to_vec());

        let mut right = embedded(10);
        right.align("right").unwrap().text("abc", None);
        assert_eq!(right.encode(), b"       abc".to_vec());

        let mut center = embedded(10);
        center.align("center").unwrap().text("abc", None);
        assert_eq!(center.encode(), b"    abc   ".to_vec());
    }

    #[test]
    fn test_embedded_newline_restores_state() {
        let mut e = embedded(10);
        e.bold(Some(true)).text("ab", None).newline();

        let mut expected = vec![0x1B, 0x45, 0x01, b'a', b'b'];
        expected.extend(b"        ");
        expected.extend([0x0A, 0x0D]);
        expected.extend([0x1B, 0x45, 0x01, 0x1B, 0x34, 0x00, 0x1B, 0x2D, 0x00]);
        expected.extend([0x1D, 0x42, 0x00, 0x1B, 0x74, 0x00]);
        expected.extend(b"          ");
        assert_eq!(e.encode(), expected);
    }

    #[test]
    fn test_feed() {
        let mut e = EscPosEncoder::default();
        e.feed(3);
        assert_eq!(e.encode(), vec![0x0A, 0x0D, 0x0A, 0x0D, 0x0A, 0x0D]);
    }

    #[test]
    fn test_raw() {
        let mut e = EscPosEncoder::default();
        e.raw(&[0x1B, 0x64, 0x02]);
        assert_eq!(e.encode(), vec![0x1B, 0x64, 0x02]);
    }

    #[test]
    fn test_encode_resets_but_keeps_options() {
        let mut e = with_width(32);
        e.codepage("auto").unwrap().bold(None).width(2).unwrap().text("x", None);
        assert!(!e.encode().is_empty());

        assert_eq!(e.state(), &FormatState::default());
        assert_eq!(e.cursor(), 0);
        assert_eq!(e.codepage_mode(), &CodepageMode::default());
        assert_eq!(e.options().width, Some(32));
        assert!(e.encode().is_empty());
    }

    #[test]
    fn test_image_raster_flushes() {
        let mut e = EscPosEncoder::default();
        let raster = ImageRaster {
            width: 9,
            height: 1,
            data: vec![0xFF, 0x80],
        };
        e.text("a", None).image_raster(&raster).unwrap();
        assert!(e.queued.is_empty());
        assert_eq!(
            e.encode(),
            vec![b'a', 0x1D, 0x76, 0x30, 0x00, 0x02, 0x00, 0x01, 0x00, 0xFF, 0x80]
        );
    }

    #[test]
    fn test_image_raster_rejects_short_data() {
        let mut e = EscPosEncoder::default();
        let raster = ImageRaster {
            width: 9,
            height: 2,
            data: vec![0xFF, 0x80],
        };
        assert!(matches!(
            e.image_raster(&raster),
            Err(EncodeError::InvalidParameter(_))
        ));
        assert!(e.encode().is_empty());
    }
}
