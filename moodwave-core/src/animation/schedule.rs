//! Declarative reveal schedule: what animates, when, for how long and towards which values.

use crate::{
    animation::ease::Ease,
    chart::builder::{Target, VisualHandle},
    config::RevealConfig,
};

/// End value of one animated property.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "property", content = "to", rename_all = "snake_case")]
pub enum PropertyChange {
    Opacity(f64),
    TranslateY(f64),
}

/// A timed transition of one target, relative to the schedule start.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub target: Target,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub ease: Ease,
    pub props: Vec<PropertyChange>,
}

impl Tween {
    pub fn end_ms(&self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Eased progress at `elapsed_ms` after the schedule start, or `None` before the delay.
    pub fn progress(&self, elapsed_ms: u64) -> Option<f64> {
        if elapsed_ms < self.delay_ms {
            return None;
        }
        let local = elapsed_ms - self.delay_ms;
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            local as f64 / self.duration_ms as f64
        };
        Some(self.ease.apply(t))
    }
}

/// Ordered list of tweens started together.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSchedule {
    pub tweens: Vec<Tween>,
}

impl RevealSchedule {
    /// Staggered reveal over `handles` in group order: each wave fades in while sliding back
    /// to its drawn position, then each marker group fades in.
    pub fn for_handles(handles: &[VisualHandle], cfg: &RevealConfig) -> Self {
        let waves = handles.iter().enumerate().map(|(i, h)| Tween {
            target: h.wave,
            delay_ms: cfg.wave_delay_step_ms.saturating_mul(i as u64),
            duration_ms: cfg.wave_duration_ms,
            ease: cfg.wave_ease,
            props: vec![
                PropertyChange::Opacity(cfg.target_opacity),
                PropertyChange::TranslateY(0.0),
            ],
        });
        let markers = handles.iter().enumerate().map(|(i, h)| Tween {
            target: h.markers,
            delay_ms: cfg
                .marker_delay_base_ms
                .saturating_add(cfg.marker_delay_step_ms.saturating_mul(i as u64)),
            duration_ms: cfg.marker_duration_ms,
            ease: cfg.marker_ease,
            props: vec![PropertyChange::Opacity(cfg.target_opacity)],
        });
        Self {
            tweens: waves.chain(markers).collect(),
        }
    }

    /// Time at which the last tween settles.
    pub fn end_ms(&self) -> u64 {
        self.tweens.iter().map(Tween::end_ms).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/schedule.rs"]
mod tests;
