use anyhow::Context;

use crate::foundation::{
    core::Rgb8,
    error::{MoodwaveError, MoodwaveResult},
};

/// Rasterized frame, premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Convert to straight alpha, as expected by PNG encoders.
    pub fn into_straight_rgba8(mut self) -> Vec<u8> {
        for px in self.data.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        self.data
    }

    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

// Avoid pathological allocations for absurd viewports.
const MAX_DIM: u32 = 16_384;

/// Rasterize an SVG document at its intrinsic size, optionally over an opaque background.
pub fn rasterize_svg(svg: &str, background: Option<Rgb8>) -> MoodwaveResult<FrameRGBA> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts).context("parse svg tree")?;

    let size = tree.size();
    let to_px = |v: f32| -> MoodwaveResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(MoodwaveError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    };
    let width = to_px(size.width())?;
    let height = to_px(size.height())?;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(MoodwaveError::render(format!(
            "svg raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| MoodwaveError::render("failed to allocate svg pixmap"))?;
    if let Some(bg) = background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    }

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.take(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
