//! Textual form of code point sets: regex character-class syntax.
//!
//! Rendering produces `[a-cx]`-style classes; parsing accepts anything
//! `regex-syntax` resolves to a single Unicode class or a single character,
//! e.g. `[a-z&&[^aeiou]]`, `\d`, `(?i)k` or `(?s).`. The empty set is `[]`.

use std::fmt;

use regex_syntax::hir::{Class, HirKind};

use crate::charset::{CodePointSet, CodeRange};

/// Errors from [`CodePointSet::parse_class`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum CharSetError {
    #[error("invalid character class `{pattern}`: {message}")]
    Syntax { pattern: String, message: String },

    /// Valid regex, but it does not denote a set of characters.
    #[error("`{0}` is not a character class")]
    NotAClass(String),

    /// Byte classes appear only with Unicode mode disabled.
    #[error("`{0}` is a byte class; only Unicode classes are supported")]
    ByteClass(String),
}

impl CodePointSet {
    /// Parse a regex character class into a set.
    pub fn parse_class(pattern: &str) -> Result<Self, CharSetError> {
        if pattern == "[]" {
            return Ok(Self::empty());
        }

        let hir = regex_syntax::parse(pattern).map_err(|e| CharSetError::Syntax {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        match hir.kind() {
            HirKind::Class(Class::Unicode(cls)) => Ok(cls
                .ranges()
                .iter()
                .map(|r| CodeRange::new(r.start() as u32, r.end() as u32))
                .collect()),
            HirKind::Class(Class::Bytes(_)) => Err(CharSetError::ByteClass(pattern.to_string())),
            // Single-character classes are simplified to literals.
            HirKind::Literal(lit) => {
                let mut chars = std::str::from_utf8(&lit.0).ok().into_iter().flat_map(str::chars);
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::from_char(c)),
                    _ => Err(CharSetError::NotAClass(pattern.to_string())),
                }
            }
            _ => Err(CharSetError::NotAClass(pattern.to_string())),
        }
    }
}

/// Write one code point the way it would appear inside a class.
fn write_code_point(out: &mut impl fmt::Write, cp: u32) -> fmt::Result {
    match char::from_u32(cp) {
        Some(c) if c.is_ascii_graphic() => {
            if regex_syntax::is_meta_character(c) {
                out.write_char('\\')?;
            }
            out.write_char(c)
        }
        _ => write!(out, "\\x{{{cp:X}}}"),
    }
}

impl fmt::Display for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(2 + self.ranges().len() * 3);
        s.push('[');
        for r in self.ranges() {
            write_code_point(&mut s, r.lo)?;
            if r.hi != r.lo {
                s.push('-');
                write_code_point(&mut s, r.hi)?;
            }
        }
        s.push(']');
        f.write_str(&s)
    }
}

impl std::str::FromStr for CodePointSet {
    type Err = CharSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_class(s)
    }
}

impl serde::Serialize for CodePointSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CodePointSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pattern = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse_class(&pattern).map_err(serde::de::Error::custom)
    }
}
