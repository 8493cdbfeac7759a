use crate::foundation::error::{MoodwaveError, MoodwaveResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Size of the host viewport the chart is laid out against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: f64,
    /// Viewport height in CSS pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite or non-positive sizes.
    pub fn new(width: f64, height: f64) -> MoodwaveResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(MoodwaveError::validation(format!(
                "viewport must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Drawing surface dimensions. Taller than the viewport so waves can slide in from below.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Surface width in CSS pixels.
    pub width: f64,
    /// Surface height in CSS pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Surface for `viewport` with `vertical_padding` extra rows below it.
    pub fn from_viewport(viewport: Viewport, vertical_padding: f64) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height + vertical_padding,
        }
    }

    /// Vertical center of the surface.
    pub fn center_y(self) -> f64 {
        self.height / 2.0
    }
}

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> MoodwaveResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(MoodwaveError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> MoodwaveResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| MoodwaveError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Lowercase `#rrggbb` form used in SVG attributes.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
