//! Code page registry
//!
//! Maps a code page identifier onto either a single-byte table (most pages)
//! or an `encoding_rs` multi-byte encoding (the CJK pages). The registry is
//! static data and safe to share between any number of encoders.

mod samples;
mod tables;
mod vietnamese;

use encoding_rs::{Encoding, EncoderResult};

pub(crate) use vietnamese::combining_sequence;

/// Single-byte code page table
///
/// `chars[i]` encodes to byte `offset + i`. Only the upper part of the page
/// is listed; bytes below `offset` are ASCII or pass-through.
#[derive(Debug, Clone, Copy)]
pub struct CodePageDefinition {
    pub name: &'static str,
    pub languages: &'static [&'static str],
    pub offset: u16,
    pub chars: &'static str,
}

impl CodePageDefinition {
    /// Byte for `ch` if the table lists it
    pub fn byte_for(&self, ch: char) -> Option<u8> {
        if ch == '\0' {
            return None;
        }
        self.chars
            .chars()
            .position(|c| c == ch)
            .map(|index| (usize::from(self.offset) + index) as u8)
    }

    /// Number of table positions, defined or not
    pub fn len(&self) -> usize {
        self.chars.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether `codepoint` falls inside the byte range the table occupies
    pub fn covers(&self, codepoint: u32) -> bool {
        let start = u32::from(self.offset);
        codepoint >= start && codepoint < start + self.len() as u32
    }
}

struct StandardCharset {
    name: &'static str,
    languages: &'static [&'static str],
}

static STANDARD: &[(&str, StandardCharset)] = &[
    (
        "shiftjis",
        StandardCharset {
            name: "Japanese",
            languages: &["jp"],
        },
    ),
    (
        "cp936",
        StandardCharset {
            name: "Simplified Chinese",
            languages: &["zh"],
        },
    ),
    (
        "cp949",
        StandardCharset {
            name: "Korean",
            languages: &["ko"],
        },
    ),
    (
        "cp950",
        StandardCharset {
            name: "Traditional Chinese",
            languages: &["zh"],
        },
    ),
];

fn standard_encoding(id: &str) -> Option<&'static Encoding> {
    match id {
        "shiftjis" => Some(encoding_rs::SHIFT_JIS),
        "cp936" => Some(encoding_rs::GBK),
        "cp949" => Some(encoding_rs::EUC_KR),
        "cp950" => Some(encoding_rs::BIG5),
        _ => None,
    }
}

/// Alternative spellings used by vendor tables and callers
static ALIASES: &[(&str, &str)] = &[
    ("cp932", "shiftjis"),
    ("windows874", "cp874"),
    ("cp1250", "windows1250"),
    ("cp1251", "windows1251"),
    ("cp1252", "windows1252"),
    ("cp1253", "windows1253"),
    ("cp1254", "windows1254"),
    ("cp1255", "windows1255"),
    ("cp1256", "windows1256"),
    ("cp1257", "windows1257"),
    ("cp1258", "windows1258"),
];

/// Registry entry as listed by [`registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePageInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub languages: &'static [&'static str],
    /// True for pages backed by a multi-byte encoding
    pub multi_byte: bool,
}

/// Resolved form of a code page identifier
#[derive(Debug, Clone, Copy)]
pub(crate) enum Charset {
    Ascii,
    Table(&'static CodePageDefinition),
    MultiByte(&'static Encoding),
}

/// Every registered page in registry order: tables first, then multi-byte pages
pub fn registry() -> impl Iterator<Item = CodePageInfo> {
    let tables = tables::DEFINITIONS.iter().map(|(id, def)| CodePageInfo {
        id: *id,
        name: def.name,
        languages: def.languages,
        multi_byte: false,
    });
    let standard = STANDARD.iter().map(|(id, charset)| CodePageInfo {
        id: *id,
        name: charset.name,
        languages: charset.languages,
        multi_byte: true,
    });
    tables.chain(standard)
}

/// Canonical identifier for `codepage`, resolving aliases
pub fn canonical(codepage: &str) -> Option<&'static str> {
    let id = ALIASES
        .iter()
        .find(|(alias, _)| *alias == codepage)
        .map_or(codepage, |(_, target)| *target);
    registry().map(|info| info.id).find(|known| *known == id)
}

/// Aliases that resolve to `canonical_id`
pub(crate) fn aliases_of(canonical_id: &str) -> impl Iterator<Item = &'static str> + '_ {
    ALIASES
        .iter()
        .filter(move |(_, target)| *target == canonical_id)
        .map(|(alias, _)| *alias)
}

/// Table definition for a single-byte page
pub fn definition(codepage: &str) -> Option<&'static CodePageDefinition> {
    let id = canonical(codepage)?;
    tables::DEFINITIONS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, def)| def)
}

/// Whether `codepage` (or an alias of it) is registered
pub fn supports(codepage: &str) -> bool {
    canonical(codepage).is_some()
}

/// Canonical identifiers of all registered pages
pub fn encodings() -> Vec<&'static str> {
    registry().map(|info| info.id).collect()
}

/// Canonical identifiers of pages tagged with `language`
pub fn codepages_for_language(language: &str) -> Vec<&'static str> {
    registry()
        .filter(|info| info.languages.iter().any(|tag| *tag == language))
        .map(|info| info.id)
        .collect()
}

/// Sample sentences for each language the page is tagged with
pub fn sample_strings(codepage: &str) -> Vec<(&'static str, &'static str)> {
    let Some(id) = canonical(codepage) else {
        return Vec::new();
    };
    let Some(info) = registry().find(|info| info.id == id) else {
        return Vec::new();
    };
    info.languages
        .iter()
        .filter_map(|language| {
            samples::SAMPLES
                .iter()
                .find(|(tag, _)| tag == language)
                .copied()
        })
        .collect()
}

/// Unknown identifiers resolve to ASCII
pub(crate) fn charset(codepage: &str) -> Charset {
    if let Some(def) = definition(codepage) {
        return Charset::Table(def);
    }
    canonical(codepage)
        .and_then(standard_encoding)
        .map_or(Charset::Ascii, Charset::MultiByte)
}

/// Encode one character with a multi-byte encoding, `None` if unmappable
pub(crate) fn encode_standard(encoding: &'static Encoding, ch: char) -> Option<Vec<u8>> {
    let mut encoder = encoding.new_encoder();
    let mut utf8 = [0u8; 4];
    let src: &str = ch.encode_utf8(&mut utf8);
    let capacity = encoder.max_buffer_length_from_utf8_without_replacement(src.len())?;
    let mut out = Vec::with_capacity(capacity);
    let (result, _) = encoder.encode_from_utf8_to_vec_without_replacement(src, &mut out, true);
    match result {
        EncoderResult::InputEmpty => Some(out),
        EncoderResult::OutputFull | EncoderResult::Unmappable(_) => None,
    }
}
