//! Vendor code page selector tables
//!
//! `ESC t n` selects a code page, but every vendor numbers its pages
//! differently and supports a different subset. A missing key means the
//! printer cannot select that page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codepage;
use crate::error::EncodeError;

/// Printer manufacturer whose selector numbering to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrinterType {
    #[default]
    Epson,
    Zjiang,
    Bixolon,
    Star,
    Citizen,
    Legacy,
}

impl PrinterType {
    pub const ALL: [PrinterType; 6] = [
        PrinterType::Epson,
        PrinterType::Zjiang,
        PrinterType::Bixolon,
        PrinterType::Star,
        PrinterType::Citizen,
        PrinterType::Legacy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PrinterType::Epson => "epson",
            PrinterType::Zjiang => "zjiang",
            PrinterType::Bixolon => "bixolon",
            PrinterType::Star => "star",
            PrinterType::Citizen => "citizen",
            PrinterType::Legacy => "legacy",
        }
    }

    /// Raw `(codepage, selector)` table for this vendor
    pub fn table(self) -> &'static [(&'static str, u8)] {
        match self {
            PrinterType::Epson => EPSON,
            PrinterType::Zjiang => ZJIANG,
            PrinterType::Bixolon => BIXOLON,
            PrinterType::Star => STAR,
            PrinterType::Citizen => CITIZEN,
            PrinterType::Legacy => LEGACY,
        }
    }

    /// `ESC t` selector for `codepage`
    ///
    /// The identifier is looked up as given first, then by its canonical
    /// registry id and that id's aliases.
    pub fn selector(self, codepage: &str) -> Option<u8> {
        let table = self.table();
        let lookup = |id: &str| {
            table
                .iter()
                .find(|(known, _)| *known == id)
                .map(|(_, selector)| *selector)
        };

        if let Some(selector) = lookup(codepage) {
            return Some(selector);
        }
        let canonical = codepage::canonical(codepage)?;
        lookup(canonical).or_else(|| codepage::aliases_of(canonical).find_map(lookup))
    }
}

impl fmt::Display for PrinterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrinterType {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrinterType::ALL
            .into_iter()
            .find(|vendor| vendor.as_str() == s)
            .ok_or_else(|| EncodeError::InvalidParameter(format!("unknown printer type {s}")))
    }
}

static EPSON: &[(&str, u8)] = &[
    ("cp437", 0x00),
    ("shiftjis", 0x01),
    ("cp850", 0x02),
    ("cp860", 0x03),
    ("cp863", 0x04),
    ("cp865", 0x05),
    ("cp851", 0x0B),
    ("cp853", 0x0C),
    ("cp857", 0x0D),
    ("cp737", 0x0E),
    ("iso88597", 0x0F),
    ("windows1252", 0x10),
    ("cp866", 0x11),
    ("cp852", 0x12),
    ("cp858", 0x13),
    ("cp720", 0x20),
    ("cp775", 0x21),
    ("cp855", 0x22),
    ("cp861", 0x23),
    ("cp862", 0x24),
    ("cp864", 0x25),
    ("cp869", 0x26),
    ("iso88592", 0x27),
    ("iso885915", 0x28),
    ("cp1098", 0x29),
    ("cp1118", 0x2A),
    ("cp1119", 0x2B),
    ("cp1125", 0x2C),
    ("windows1250", 0x2D),
    ("windows1251", 0x2E),
    ("windows1253", 0x2F),
    ("windows1254", 0x30),
    ("windows1255", 0x31),
    ("windows1256", 0x32),
    ("windows1257", 0x33),
    ("windows1258", 0x34),
    ("rk1048", 0x35),
];

static ZJIANG: &[(&str, u8)] = &[
    ("cp437", 0x00),
    ("shiftjis", 0x01),
    ("cp850", 0x02),
    ("cp860", 0x03),
    ("cp863", 0x04),
    ("cp865", 0x05),
    ("windows1252", 0x10),
    ("cp866", 0x11),
    ("cp852", 0x12),
    ("cp858", 0x13),
    ("windows1255", 0x20),
    ("cp861", 0x38),
    ("cp855", 0x3C),
    ("cp857", 0x3D),
    ("cp862", 0x3E),
    ("cp864", 0x3F),
    ("cp737", 0x40),
    ("cp851", 0x41),
    ("cp869", 0x42),
    ("cp1119", 0x44),
    ("cp1118", 0x45),
    ("windows1250", 0x48),
    ("windows1251", 0x49),
    ("cp3840", 0x4A),
    ("cp3843", 0x4C),
    ("cp3844", 0x4D),
    ("cp3845", 0x4E),
    ("cp3846", 0x4F),
    ("cp3847", 0x50),
    ("cp3848", 0x51),
    ("cp2001", 0x53),
    ("cp3001", 0x54),
    ("cp3002", 0x55),
    ("cp3011", 0x56),
    ("cp3012", 0x57),
    ("cp3021", 0x58),
    ("cp3041", 0x59),
    ("windows1253", 0x5A),
    ("windows1254", 0x5B),
    ("windows1256", 0x5C),
    ("cp720", 0x5D),
    ("windows1258", 0x5E),
    ("cp775", 0x5F),
];

static BIXOLON: &[(&str, u8)] = &[
    ("cp437", 0x00),
    ("shiftjis", 0x01),
    ("cp850", 0x02),
    ("cp860", 0x03),
    ("cp863", 0x04),
    ("cp865", 0x05),
    ("cp851", 0x0B),
    ("cp858", 0x13),
];

static STAR: &[(&str, u8)] = &[
    ("cp437", 0x00),
    ("shiftjis", 0x01),
    ("cp850", 0x02),
    ("cp860", 0x03),
    ("cp863", 0x04),
    ("cp865", 0x05),
    ("windows1252", 0x10),
    ("cp866", 0x11),
    ("cp852", 0x12),
    ("cp858", 0x13),
];

static CITIZEN: &[(&str, u8)] = &[
    ("cp437", 0x00),
    ("shiftjis", 0x01),
    ("cp850", 0x02),
    ("cp860", 0x03),
    ("cp863", 0x04),
    ("cp865", 0x05),
    ("cp852", 0x12),
    ("cp866", 0x11),
    ("cp857", 0x08),
    ("windows1252", 0x10),
    ("cp858", 0x13),
    ("cp864", 0x28),
];

static LEGACY: &[(&str, u8)] = &[
    ("cp437", 0x00),
    ("cp737", 0x40),
    ("cp850", 0x02),
    ("cp775", 0x5F),
    ("cp852", 0x12),
    ("cp855", 0x3C),
    ("cp857", 0x3D),
    ("cp858", 0x13),
    ("cp860", 0x03),
    ("cp861", 0x38),
    ("cp862", 0x3E),
    ("cp863", 0x04),
    ("cp864", 0x1C),
    ("cp865", 0x05),
    ("cp866", 0x11),
    ("cp869", 0x42),
    ("cp936", 0xFF),
    ("cp949", 0xFD),
    ("cp950", 0xFE),
    ("cp1252", 0x10),
    ("iso88596", 0x16),
    ("shiftjis", 0xFC),
    ("windows874", 0x1E),
    ("windows1250", 0x48),
    ("windows1251", 0x49),
    ("windows1252", 0x47),
    ("windows1253", 0x5A),
    ("windows1254", 0x5B),
    ("windows1255", 0x20),
    ("windows1256", 0x5C),
    ("windows1257", 0x19),
    ("windows1258", 0x5E),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_exact() {
        assert_eq!(PrinterType::Epson.selector("cp437"), Some(0x00));
        assert_eq!(PrinterType::Epson.selector("windows1258"), Some(0x34));
        assert_eq!(PrinterType::Zjiang.selector("cp775"), Some(0x5F));
        assert_eq!(PrinterType::Citizen.selector("cp864"), Some(0x28));
    }

    #[test]
    fn test_selector_missing() {
        assert_eq!(PrinterType::Bixolon.selector("cp866"), None);
        assert_eq!(PrinterType::Star.selector("windows1258"), None);
        assert_eq!(PrinterType::Epson.selector("nope"), None);
    }

    #[test]
    fn test_selector_through_aliases() {
        // epson only knows the windows spelling
        assert_eq!(PrinterType::Epson.selector("cp1250"), Some(0x2D));
        // legacy lists both spellings with different selectors
        assert_eq!(PrinterType::Legacy.selector("cp1252"), Some(0x10));
        assert_eq!(PrinterType::Legacy.selector("windows1252"), Some(0x47));
        // cp874 is only listed as windows874
        assert_eq!(PrinterType::Legacy.selector("cp874"), Some(0x1E));
        assert_eq!(PrinterType::Legacy.selector("cp932"), Some(0xFC));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("zjiang".parse::<PrinterType>(), Ok(PrinterType::Zjiang));
        assert!("acme".parse::<PrinterType>().is_err());
        assert_eq!(PrinterType::default().to_string(), "epson");
    }

    #[test]
    fn test_serde_lowercase() {
        let vendor: PrinterType = serde_json::from_str("\"citizen\"").unwrap();
        assert_eq!(vendor, PrinterType::Citizen);
        assert_eq!(serde_json::to_string(&PrinterType::Star).unwrap(), "\"star\"");
    }
}
