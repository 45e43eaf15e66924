//! Character encodings that case transformations run under.
//!
//! An [`Encoding`] decides which code points have case, which ones count as
//! whitespace, digits, upper-case letters or word characters, and therefore
//! what every regex in [`crate::transform`] matches. Text is always a Rust
//! `&str`, so patterns match whole code points and never split a multi-byte
//! character.

use crate::error::EncodingError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Highest code point representable in ISO-8859-1.
const LATIN1_MAX: char = '\u{FF}';

/// A named character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Full Unicode case mapping and Unicode character classes.
    #[default]
    Utf8,
    /// Only `A-Z` and `a-z` have case.
    Ascii,
    /// ISO-8859-1: case exists only between pairs that both fit in one byte.
    Latin1,
}

impl Encoding {
    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "ASCII",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// All supported encodings.
    pub fn all() -> &'static [Encoding] {
        &[Self::Utf8, Self::Ascii, Self::Latin1]
    }

    /// Encoding implied by a POSIX locale string such as `en_US.UTF-8@euro`.
    ///
    /// `C` and `POSIX` map to ASCII. A locale with no codeset, or with a codeset
    /// this crate does not know, maps to UTF-8.
    pub fn from_locale(locale: &str) -> Self {
        let Some(codeset) = par_case_config::codeset_from_locale(locale) else {
            return Self::Utf8;
        };
        codeset.parse().unwrap_or_else(|_| {
            log::warn!("Unsupported locale codeset {codeset:?}, falling back to UTF-8");
            Self::Utf8
        })
    }

    /// Whether `c` is whitespace under this encoding.
    pub fn is_space(self, c: char) -> bool {
        match self {
            Self::Utf8 => c.is_whitespace(),
            Self::Ascii => matches!(c, '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '),
            Self::Latin1 => c <= LATIN1_MAX && c.is_whitespace(),
        }
    }

    /// Whether `c` is a word character (letter, digit or underscore).
    pub fn is_word(self, c: char) -> bool {
        if c == '_' {
            return true;
        }
        match self {
            Self::Utf8 => c.is_alphanumeric(),
            Self::Ascii => c.is_ascii_alphanumeric(),
            Self::Latin1 => c <= LATIN1_MAX && c.is_alphanumeric(),
        }
    }

    /// Append the upper-case form of `c`.
    pub fn push_upper(self, c: char, out: &mut String) {
        match self {
            Self::Utf8 => out.extend(c.to_uppercase()),
            Self::Ascii => out.push(c.to_ascii_uppercase()),
            Self::Latin1 => out.push(latin1_fold(c, c.to_uppercase())),
        }
    }

    /// Append the lower-case form of `c`.
    pub fn push_lower(self, c: char, out: &mut String) {
        match self {
            Self::Utf8 => out.extend(c.to_lowercase()),
            Self::Ascii => out.push(c.to_ascii_lowercase()),
            Self::Latin1 => out.push(latin1_fold(c, c.to_lowercase())),
        }
    }

    /// Upper-case every code point of `s`.
    pub fn to_upper(self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            self.push_upper(c, &mut out);
        }
        out
    }

    /// Lower-case every code point of `s`.
    pub fn to_lower(self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            self.push_lower(c, &mut out);
        }
        out
    }

    /// Strip leading and trailing whitespace as this encoding defines it.
    pub fn trim<'a>(self, s: &'a str) -> &'a str {
        s.trim_matches(|c| self.is_space(c))
    }

    /// Regex class matching one whitespace code point.
    pub(crate) fn space_class(self) -> &'static str {
        match self {
            Self::Utf8 => r"\s",
            Self::Ascii => r"[\t\n\x0B\x0C\r ]",
            Self::Latin1 => r"[\t\n\x0B\x0C\r \x{85}\x{A0}]",
        }
    }

    /// Regex class matching one non-whitespace code point.
    pub(crate) fn non_space_class(self) -> &'static str {
        match self {
            Self::Utf8 => r"\S",
            Self::Ascii => r"[^\t\n\x0B\x0C\r ]",
            Self::Latin1 => r"[^\t\n\x0B\x0C\r \x{85}\x{A0}]",
        }
    }

    /// Regex class matching one decimal digit.
    pub(crate) fn digit_class(self) -> &'static str {
        match self {
            Self::Utf8 => r"\d",
            Self::Ascii | Self::Latin1 => r"[0-9]",
        }
    }

    /// Regex class matching one upper-case letter.
    pub(crate) fn upper_class(self) -> &'static str {
        match self {
            Self::Utf8 => r"\p{Lu}",
            Self::Ascii => r"[A-Z]",
            Self::Latin1 => r"[A-Z\x{C0}-\x{D6}\x{D8}-\x{DE}]",
        }
    }
}

/// Single-code-point case mapping restricted to ISO-8859-1.
///
/// Mappings that leave Latin-1 (`ÿ` → `Ÿ`) or expand (`ß` → `SS`) keep `c`.
fn latin1_fold(c: char, mut mapped: impl Iterator<Item = char>) -> char {
    if c > LATIN1_MAX {
        return c;
    }
    match (mapped.next(), mapped.next()) {
        (Some(m), None) if m <= LATIN1_MAX => m,
        _ => c,
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('_', "-");
        match normalized.as_str() {
            "UTF-8" | "UTF8" => Ok(Self::Utf8),
            "ASCII" | "US-ASCII" | "ANSI-X3.4-1968" | "646" => Ok(Self::Ascii),
            "ISO-8859-1" | "ISO8859-1" | "ISO-88591" | "LATIN1" | "LATIN-1" | "L1" => {
                Ok(Self::Latin1)
            }
            _ => Err(EncodingError::Unsupported(s.to_string())),
        }
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Encoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
