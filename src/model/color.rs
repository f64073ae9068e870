//! CSS-style color values.
//!
//! Widget options take colors as CSS hex codes without the leading `#`
//! (e.g. `"00f"`, `"979797"`). [`Color`] validates the code at construction
//! time; the raw constructor is never exported.

use std::fmt;

/// A validated CSS hex color code, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Smart constructor: accepts 3- or 6-digit hex codes without `#`.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidColor> {
        let raw = raw.into();
        if !matches!(raw.len(), 3 | 6) {
            return Err(InvalidColor::BadLength(raw.len()));
        }
        if let Some(bad) = raw.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(InvalidColor::BadDigit(bad));
        }
        Ok(Self(raw))
    }

    /// The hex code without the leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    /// Renders as a CSS color literal, with the leading `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rejection reasons for [`Color::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColor {
    /// The code was neither 3 nor 6 characters long.
    #[error("Color code must be 3 or 6 hex digits, got {0} characters")]
    BadLength(usize),

    /// The code contained a non-hex character.
    #[error("Color code contains non-hex character {0:?}")]
    BadDigit(char),
}

// ===== Tests =====
