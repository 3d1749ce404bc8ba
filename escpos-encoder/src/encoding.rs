//! Text encoding for thermal printer code pages
//!
//! Printers understand one 8-bit code page at a time. This module provides:
//! - Encoding a string for one fixed code page
//! - Splitting a string into runs ("fragments") that each use the candidate
//!   page best able to represent them
//! - A diacritic-stripping fallback for characters no candidate can print

use tracing::{instrument, trace, warn};
use unicode_normalization::UnicodeNormalization;

use crate::codepage::{self, Charset};

/// Byte emitted for characters the target page cannot represent
pub const PLACEHOLDER: u8 = 0x3F;

/// A run of bytes that must be printed under one code page
///
/// Produced by [`auto_encode`]. Order is significant and fragments are never
/// merged or reordered; the caller selects `codepage` before writing `bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingFragment {
    pub codepage: String,
    pub bytes: Vec<u8>,
}

/// Encode `text` for a single code page
///
/// Characters below 128 pass through. Unknown identifiers and `ascii` encode
/// as plain ASCII. Unrepresentable characters become `?`.
pub fn encode(text: &str, codepage: &str) -> Vec<u8> {
    encode_with(text, codepage, false)
}

/// Encode `text`, optionally allowing two-byte Vietnamese sequences
///
/// With `allow_combining` a precomposed windows1258 letter that has no byte
/// of its own is written as base letter plus floating tone mark. Without it
/// only the base letter is written.
pub fn encode_with(text: &str, codepage: &str, allow_combining: bool) -> Vec<u8> {
    let charset = codepage::charset(codepage);
    let vietnamese = codepage::canonical(codepage) == Some("windows1258");

    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        encode_char(ch, charset, vietnamese, allow_combining, &mut out);
    }
    out
}

fn encode_char(
    ch: char,
    charset: Charset,
    vietnamese: bool,
    allow_combining: bool,
    out: &mut Vec<u8>,
) {
    let codepoint = u32::from(ch);
    if codepoint < 128 {
        out.push(codepoint as u8);
        return;
    }

    match charset {
        Charset::Ascii => out.push(PLACEHOLDER),
        Charset::Table(def) => {
            if let Some(byte) = def.byte_for(ch) {
                out.push(byte);
            } else if codepoint < 256 && !def.covers(codepoint) {
                // Outside the table the page agrees with Latin-1
                out.push(codepoint as u8);
            } else if let Some(sequence) = vietnamese
                .then(|| codepage::combining_sequence(ch))
                .flatten()
            {
                if allow_combining {
                    out.extend_from_slice(&sequence);
                } else {
                    out.push(sequence[0]);
                }
            } else {
                out.push(PLACEHOLDER);
            }
        }
        Charset::MultiByte(encoding) => match codepage::encode_standard(encoding, ch) {
            Some(bytes) => out.extend_from_slice(&bytes),
            None => out.push(PLACEHOLDER),
        },
    }
}

/// Whether `codepage` has a native representation for `ch`
pub fn can_encode(ch: char, codepage: &str) -> bool {
    if u32::from(ch) < 128 {
        return true;
    }
    match codepage::charset(codepage) {
        Charset::Ascii => false,
        Charset::Table(def) => def.byte_for(ch).is_some(),
        Charset::MultiByte(encoding) => codepage::encode_standard(encoding, ch).is_some(),
    }
}

/// Remove accents: canonical decomposition, drop U+0300..=U+036F, đ/Đ to d/D
pub fn strip_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036F}').contains(c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .collect()
}

/// Split `text` into fragments, each tagged with a candidate code page
///
/// The current page starts at `candidates[0]` and only changes when a
/// character is missing from it but present in another candidate. A new
/// fragment starts exactly when the page changes. Characters no candidate
/// knows are stripped of diacritics and printed on the current page, or
/// replaced by `?` when stripping does not help.
#[instrument(skip(text), fields(chars = text.chars().count()))]
pub fn auto_encode<S: AsRef<str> + std::fmt::Debug>(
    text: &str,
    candidates: &[S],
) -> Vec<EncodingFragment> {
    let first = candidates.first().map_or("ascii", |c| c.as_ref());
    let mut fragments: Vec<EncodingFragment> = Vec::new();
    let mut current: Option<&str> = None;
    let mut buf = [0u8; 4];

    for ch in text.chars() {
        let (page, bytes): (&str, Vec<u8>) = if u32::from(ch) < 128 {
            (current.unwrap_or(first), vec![u32::from(ch) as u8])
        } else if let Some(page) = current.filter(|page| can_encode(ch, page)) {
            (page, encode(ch.encode_utf8(&mut buf), page))
        } else if let Some(page) = candidates
            .iter()
            .map(|c| c.as_ref())
            .find(|page| can_encode(ch, page))
        {
            (page, encode(ch.encode_utf8(&mut buf), page))
        } else {
            let page = current.unwrap_or(first);
            (page, fallback(ch, page))
        };

        match fragments.last_mut() {
            Some(fragment) if current == Some(page) => fragment.bytes.extend_from_slice(&bytes),
            _ => {
                trace!(codepage = page, "opening fragment");
                fragments.push(EncodingFragment {
                    codepage: page.to_string(),
                    bytes,
                });
                current = Some(page);
            }
        }
    }

    fragments
}

fn fallback(ch: char, page: &str) -> Vec<u8> {
    let mut buf = [0u8; 4];
    let stripped = strip_diacritics(ch.encode_utf8(&mut buf));
    match stripped.chars().next() {
        Some(base) if base != ch && can_encode(base, page) => encode(base.encode_utf8(&mut buf), page),
        _ => {
            warn!(character = %ch, codepage = page, "no candidate can print character");
            vec![PLACEHOLDER]
        }
    }
}
