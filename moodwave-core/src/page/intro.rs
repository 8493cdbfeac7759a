use crate::page::controller::UiMutation;

/// One-shot timer that reveals the intro element a fixed delay after load.
#[derive(Clone, Debug)]
pub struct IntroFadeTimer {
    delay_ms: u64,
    class: String,
    due_at_ms: Option<u64>,
    fired: bool,
}

impl IntroFadeTimer {
    pub fn new(delay_ms: u64, class: impl Into<String>) -> Self {
        Self {
            delay_ms,
            class: class.into(),
            due_at_ms: None,
            fired: false,
        }
    }

    /// Arm on the load event. Later calls are ignored: there is one load per page.
    pub fn arm(&mut self, loaded_at_ms: u64) {
        if self.due_at_ms.is_none() {
            self.due_at_ms = Some(loaded_at_ms.saturating_add(self.delay_ms));
        }
    }

    pub fn due_at_ms(&self) -> Option<u64> {
        self.due_at_ms
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// The reveal mutation, exactly once, at or after the due time.
    pub fn poll(&mut self, now_ms: u64) -> Option<UiMutation> {
        let due = self.due_at_ms?;
        if self.fired || now_ms < due {
            return None;
        }
        self.fired = true;
        Some(UiMutation::RevealIntro {
            class: self.class.clone(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/intro.rs"]
mod tests;
