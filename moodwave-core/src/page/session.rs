use crate::{
    animation::driver::AnimationDriver,
    chart::{
        builder::{Chart, SceneState},
        tooltip::{PointerEvent, TooltipState},
    },
    config::VizConfig,
    foundation::{core::Point, error::MoodwaveResult},
    page::{
        controller::{PageController, PageEvent, UiMutation},
        intro::IntroFadeTimer,
        theme::ThemeState,
        visibility::VisibilityObserver,
    },
};

/// Observable document state of a simulated page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct DocumentState {
    /// Theme classes on the page container.
    pub theme: ThemeState,
    /// Classes added to the intro element.
    pub intro_classes: Vec<String>,
    pub tooltip: TooltipState,
    /// When the reveal started, if it has.
    pub reveal_started_at_ms: Option<u64>,
}

/// One page load: the built chart plus everything that reacts to the host.
///
/// Events and timer ticks carry a monotonic timestamp in milliseconds; the session applies
/// the resulting mutations to its [`DocumentState`] and animation driver.
#[derive(Debug)]
pub struct PageSession {
    chart: Chart,
    controller: PageController,
    observer: VisibilityObserver,
    intro: IntroFadeTimer,
    driver: Option<AnimationDriver>,
    hovered: Option<(usize, usize)>,
    document: DocumentState,
}

impl PageSession {
    pub fn new(chart: Chart, config: VizConfig) -> Self {
        let observer = VisibilityObserver::new(config.page.visibility_threshold);
        let intro =
            IntroFadeTimer::new(config.page.intro_delay_ms, config.page.intro_class.clone());
        let controller = PageController::new(chart.handles.clone(), config);
        Self {
            chart,
            controller,
            observer,
            intro,
            driver: None,
            hovered: None,
            document: DocumentState::default(),
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn document(&self) -> &DocumentState {
        &self.document
    }

    pub fn driver(&self) -> Option<&AnimationDriver> {
        self.driver.as_ref()
    }

    /// Deliver one event at `now_ms`, then run due timers. Returns every applied mutation.
    pub fn dispatch(&mut self, event: &PageEvent, now_ms: u64) -> MoodwaveResult<Vec<UiMutation>> {
        let mut mutations = match event {
            PageEvent::Loaded => {
                self.intro.arm(now_ms);
                Vec::new()
            }
            PageEvent::VisibleRatios { ratios } => {
                let entries = self.observer.observe(ratios);
                self.controller.on_intersections(&entries)
            }
            PageEvent::PointerAt { x, y } => self.hover(Point::new(*x, *y)),
            PageEvent::Intersections { .. } | PageEvent::Pointer { .. } => {
                self.controller.handle(event)
            }
        };
        for m in &mutations {
            self.apply(m, now_ms)?;
        }
        mutations.extend(self.tick(now_ms)?);
        Ok(mutations)
    }

    /// Advance timers to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> MoodwaveResult<Vec<UiMutation>> {
        let due: Vec<UiMutation> = self.intro.poll(now_ms).into_iter().collect();
        for m in &due {
            self.apply(m, now_ms)?;
        }
        Ok(due)
    }

    /// Animated properties at `now_ms`: the hidden state until the reveal starts.
    pub fn scene_at(&self, now_ms: u64) -> SceneState {
        match &self.driver {
            Some(d) => d.sample(now_ms),
            None => self.chart.initial_state(),
        }
    }

    fn hover(&mut self, p: Point) -> Vec<UiMutation> {
        let hit = self.chart.dot_at(p);

        let mut out = Vec::new();
        if self.hovered != hit {
            if self.hovered.is_some() {
                out.push(self.controller.on_pointer(&PointerEvent::Leave));
            }
            if let Some(dot) = hit.and_then(|(g, i)| self.chart.dot(g, i)) {
                let record = dot.record.clone();
                out.push(self.controller.on_pointer(&PointerEvent::Enter { record }));
            }
            self.hovered = hit;
        }
        if hit.is_some() {
            out.push(self.controller.on_pointer(&PointerEvent::Move { page: p }));
        }
        out
    }

    fn apply(&mut self, m: &UiMutation, now_ms: u64) -> MoodwaveResult<()> {
        match m {
            UiMutation::AddThemeClass { class } => self.document.theme.add(*class),
            UiMutation::RemoveThemeClass { class } => self.document.theme.remove(*class),
            UiMutation::StartReveal { schedule } => {
                let from = self.scene_at(now_ms);
                self.driver = Some(AnimationDriver::start(schedule.clone(), from, now_ms)?);
                self.document.reveal_started_at_ms = Some(now_ms);
            }
            UiMutation::RevealIntro { class } => {
                if !self.document.intro_classes.contains(class) {
                    self.document.intro_classes.push(class.clone());
                }
            }
            UiMutation::Tooltip { change } => self.document.tooltip.apply(change),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/session.rs"]
mod tests;
