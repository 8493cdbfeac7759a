use crate::{
    animation::schedule::{PropertyChange, RevealSchedule},
    chart::builder::SceneState,
    foundation::error::{MoodwaveError, MoodwaveResult},
};

/// Interprets a [`RevealSchedule`] started at a fixed time against a captured scene.
///
/// Start values are taken from the scene at schedule start; properties no tween names keep
/// their start value. Sampling is pure, so any instant can be evaluated in any order.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    schedule: RevealSchedule,
    started_at_ms: u64,
    from: SceneState,
}

impl AnimationDriver {
    /// Fails if a tween targets an element absent from `from`.
    pub fn start(
        schedule: RevealSchedule,
        from: SceneState,
        started_at_ms: u64,
    ) -> MoodwaveResult<Self> {
        if let Some(t) = schedule.tweens.iter().find(|t| from.get(t.target).is_none()) {
            return Err(MoodwaveError::animation(format!(
                "tween targets {:?} which is not in the scene",
                t.target
            )));
        }
        Ok(Self {
            schedule,
            started_at_ms,
            from,
        })
    }

    pub fn schedule(&self) -> &RevealSchedule {
        &self.schedule
    }

    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    /// Absolute time at which every tween has settled.
    pub fn end_ms(&self) -> u64 {
        self.started_at_ms.saturating_add(self.schedule.end_ms())
    }

    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    pub fn sample(&self, now_ms: u64) -> SceneState {
        let elapsed = now_ms.saturating_sub(self.started_at_ms);
        let mut out = self.from.clone();
        if now_ms < self.started_at_ms {
            return out;
        }

        for tween in &self.schedule.tweens {
            let Some(p) = tween.progress(elapsed) else {
                continue;
            };
            let (Some(start), Some(node)) = (self.from.get(tween.target), out.get_mut(tween.target))
            else {
                continue;
            };
            for prop in &tween.props {
                match *prop {
                    PropertyChange::Opacity(to) => node.opacity = lerp(start.opacity, to, p),
                    PropertyChange::TranslateY(to) => {
                        node.translate_y = lerp(start.translate_y, to, p)
                    }
                }
            }
        }
        out
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
