//! Colours for the particle field.
//!
//! Components are stored as 0-1 floats and printed as CSS `rgba(...)` for
//! the canvas fill style.

use std::fmt;

use serde::Deserialize;

use crate::error::FxError;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Indigo accent at half opacity, the default particle fill.
    pub const ACCENT: Self = Self::hex(0x818C_F880);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from hex value 0xRRGGBBAA.
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`FxError::InvalidColor`] for any other shape.
    pub fn parse(text: &str) -> Result<Self, FxError> {
        let digits = text.trim().trim_start_matches('#');
        let invalid = || FxError::InvalidColor(text.to_owned());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::hex((value << 8) | 0xFF)),
            8 => Ok(Self::hex(value)),
            _ => Err(invalid()),
        }
    }

    /// CSS `rgba(r, g, b, a)` string with 0-255 channels.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::ACCENT
    }
}

impl TryFrom<String> for Color {
    type Error = FxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}
