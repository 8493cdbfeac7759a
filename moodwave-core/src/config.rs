//! JSON-backed configuration for layout, reveal timing and page behavior.
//!
//! Every field has a default, so an empty object (`{}`) is a complete configuration that
//! reproduces the stock January chart.

use std::path::Path;

use anyhow::Context;

use crate::{
    animation::ease::Ease,
    foundation::error::{MoodwaveError, MoodwaveResult},
};

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Which records are charted and how they are grouped.
    pub data: DataConfig,
    /// Geometry of the drawing surface, waves and markers.
    pub layout: LayoutConfig,
    /// Timing of the one-shot reveal.
    pub reveal: RevealConfig,
    /// Visibility threshold, intro timer and tooltip placement.
    pub page: PageConfig,
}

/// Record selection and grouping.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Calendar month (1-12) kept by the month filter, matched in every year.
    pub month: u32,
    /// Records per group.
    pub group_len: usize,
    /// Number of groups; the last one takes the remainder.
    pub group_count: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            month: 1,
            group_len: 7,
            group_count: 4,
        }
    }
}

/// Chart geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Extra surface height below the viewport.
    pub vertical_padding: f64,
    /// Left/right inset of the horizontal scale range.
    pub x_margin: f64,
    /// Score domain `[min, max]` for amplitude and color.
    pub score_domain: [f64; 2],
    /// Amplitude range as a fraction of the surface height.
    pub amplitude_fraction: f64,
    /// Distance between neighbouring group baselines.
    pub baseline_spacing: f64,
    /// Marker radius.
    pub dot_radius: f64,
    /// Catmull-Rom parameterization (0 uniform, 0.5 centripetal, 1 chordal).
    pub curve_alpha: f64,
    /// Fractional distance of the synthetic endpoints outside the real points.
    pub endpoint_offset: f64,
    /// Blues ramp position of the first wave.
    pub wave_lightness_base: f64,
    /// Blues ramp increment per group.
    pub wave_lightness_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_padding: 200.0,
            x_margin: 100.0,
            score_domain: [0.0, 10.0],
            amplitude_fraction: 0.85,
            baseline_spacing: 120.0,
            dot_radius: 7.0,
            curve_alpha: 0.5,
            endpoint_offset: 0.4,
            wave_lightness_base: 0.4,
            wave_lightness_step: 0.12,
        }
    }
}

/// Reveal animation timing, in milliseconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay added per wave index.
    pub wave_delay_step_ms: u64,
    /// Duration of each wave's slide-in.
    pub wave_duration_ms: u64,
    /// Easing of the wave slide-in.
    pub wave_ease: Ease,
    /// Delay before the first marker group fades in.
    pub marker_delay_base_ms: u64,
    /// Delay added per marker group index.
    pub marker_delay_step_ms: u64,
    /// Duration of each marker group's fade.
    pub marker_duration_ms: u64,
    /// Easing of the marker fade.
    pub marker_ease: Ease,
    /// Opacity waves and markers settle at.
    pub target_opacity: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            wave_delay_step_ms: 200,
            wave_duration_ms: 1200,
            wave_ease: Ease::OutCubic,
            marker_delay_base_ms: 800,
            marker_delay_step_ms: 200,
            marker_duration_ms: 600,
            marker_ease: Ease::default(),
            target_opacity: 0.95,
        }
    }
}

/// Page-level behavior.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Visible fraction at which a region counts as intersecting.
    pub visibility_threshold: f64,
    /// Delay between the load event and the intro reveal.
    pub intro_delay_ms: u64,
    /// Class added to the intro element.
    pub intro_class: String,
    /// Tooltip offset from the pointer, `[dx, dy]`.
    pub tooltip_offset: [f64; 2],
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.4,
            intro_delay_ms: 200,
            intro_class: "rainbow-visible".to_owned(),
            tooltip_offset: [15.0, -30.0],
        }
    }
}

impl VizConfig {
    /// Read a JSON configuration file and validate it.
    pub fn from_path(path: &Path) -> MoodwaveResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Parse a JSON configuration string and validate it.
    pub fn from_json_str(text: &str) -> MoodwaveResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| MoodwaveError::serde(format!("config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the pipeline cannot lay out or animate.
    pub fn validate(&self) -> MoodwaveResult<()> {
        let d = &self.data;
        if !(1..=12).contains(&d.month) {
            return Err(MoodwaveError::validation(format!(
                "data.month must be in 1..=12, got {}",
                d.month
            )));
        }
        if d.group_len == 0 || d.group_count == 0 {
            return Err(MoodwaveError::validation(
                "data.group_len and data.group_count must be > 0",
            ));
        }

        let l = &self.layout;
        for (name, v) in [
            ("layout.vertical_padding", l.vertical_padding),
            ("layout.x_margin", l.x_margin),
            ("layout.amplitude_fraction", l.amplitude_fraction),
            ("layout.baseline_spacing", l.baseline_spacing),
            ("layout.curve_alpha", l.curve_alpha),
            ("layout.endpoint_offset", l.endpoint_offset),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(MoodwaveError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !l.dot_radius.is_finite() || l.dot_radius <= 0.0 {
            return Err(MoodwaveError::validation("layout.dot_radius must be > 0"));
        }
        let [lo, hi] = l.score_domain;
        if !lo.is_finite() || !hi.is_finite() || lo == hi {
            return Err(MoodwaveError::validation(
                "layout.score_domain must be two distinct finite values",
            ));
        }

        let r = &self.reveal;
        if !(0.0..=1.0).contains(&r.target_opacity) {
            return Err(MoodwaveError::validation(
                "reveal.target_opacity must be in [0, 1]",
            ));
        }

        let p = &self.page;
        if !(p.visibility_threshold > 0.0 && p.visibility_threshold <= 1.0) {
            return Err(MoodwaveError::validation(
                "page.visibility_threshold must be in (0, 1]",
            ));
        }
        if p.intro_class.trim().is_empty() {
            return Err(MoodwaveError::validation("page.intro_class must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
