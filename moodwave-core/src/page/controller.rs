//! Scroll-driven page behavior as pure event handling.
//!
//! The controller owns the per-session state that the page script would otherwise keep in
//! globals: the chart handles, the one-shot reveal flag and each region's last reported
//! visibility. Handlers return the UI changes they intend; applying them is the caller's job.

use crate::{
    animation::schedule::RevealSchedule,
    chart::{
        builder::VisualHandle,
        tooltip::{PointerEvent, TooltipMutation, handle_pointer},
    },
    config::VizConfig,
    page::{
        theme::{Region, ThemeClass},
        visibility::{IntersectionEntry, RegionRatio},
    },
};

/// Input delivered to a page session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// The document finished loading.
    Loaded,
    /// A batch of region visibility changes, in delivery order.
    Intersections { entries: Vec<IntersectionEntry> },
    /// Raw visible fractions; converted to intersection entries by the session.
    VisibleRatios { ratios: Vec<RegionRatio> },
    /// Pointer interaction with a known marker.
    Pointer { event: PointerEvent },
    /// Pointer position in surface coordinates; the session hit-tests markers.
    PointerAt { x: f64, y: f64 },
}

/// Intended change to the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiMutation {
    AddThemeClass { class: ThemeClass },
    RemoveThemeClass { class: ThemeClass },
    StartReveal { schedule: RevealSchedule },
    RevealIntro { class: String },
    Tooltip { change: TooltipMutation },
}

#[derive(Clone, Debug)]
pub struct PageController {
    handles: Vec<VisualHandle>,
    config: VizConfig,
    animation_played: bool,
    intersecting: [bool; 2],
}

impl PageController {
    pub fn new(handles: Vec<VisualHandle>, config: VizConfig) -> Self {
        Self {
            handles,
            config,
            animation_played: false,
            intersecting: [false; 2],
        }
    }

    pub fn handles(&self) -> &[VisualHandle] {
        &self.handles
    }

    /// Set once the reveal has been triggered; never cleared.
    pub fn animation_played(&self) -> bool {
        self.animation_played
    }

    /// Last reported state of `region`.
    pub fn is_intersecting(&self, region: Region) -> bool {
        self.intersecting[region.slot()]
    }

    /// Events the controller does not own (`Loaded`, raw ratios, pointer positions)
    /// produce no mutations here.
    pub fn handle(&mut self, event: &PageEvent) -> Vec<UiMutation> {
        match event {
            PageEvent::Intersections { entries } => self.on_intersections(entries),
            PageEvent::Pointer { event } => vec![self.on_pointer(event)],
            PageEvent::Loaded | PageEvent::VisibleRatios { .. } | PageEvent::PointerAt { .. } => {
                Vec::new()
            }
        }
    }

    /// Entries are processed independently in delivery order, so within one batch the
    /// last applied entry decides the theme.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) -> Vec<UiMutation> {
        let mut out = Vec::new();
        for entry in entries {
            self.intersecting[entry.region.slot()] = entry.is_intersecting;
            match (entry.region, entry.is_intersecting) {
                (Region::January, true) => {
                    out.push(UiMutation::RemoveThemeClass {
                        class: ThemeClass::Pink,
                    });
                    out.push(UiMutation::AddThemeClass {
                        class: ThemeClass::Ocean,
                    });
                    if !self.animation_played {
                        self.animation_played = true;
                        tracing::info!(groups = self.handles.len(), "reveal triggered");
                        out.push(UiMutation::StartReveal {
                            schedule: RevealSchedule::for_handles(
                                &self.handles,
                                &self.config.reveal,
                            ),
                        });
                    }
                }
                (Region::January, false) => out.push(UiMutation::RemoveThemeClass {
                    class: ThemeClass::Ocean,
                }),
                (Region::February, true) => {
                    out.push(UiMutation::RemoveThemeClass {
                        class: ThemeClass::Ocean,
                    });
                    out.push(UiMutation::AddThemeClass {
                        class: ThemeClass::Pink,
                    });
                }
                (Region::February, false) => out.push(UiMutation::RemoveThemeClass {
                    class: ThemeClass::Pink,
                }),
            }
            tracing::debug!(
                region = entry.region.css_class(),
                intersecting = entry.is_intersecting,
                "region visibility changed"
            );
        }
        out
    }

    pub fn on_pointer(&self, event: &PointerEvent) -> UiMutation {
        UiMutation::Tooltip {
            change: handle_pointer(event, self.config.page.tooltip_offset),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/controller.rs"]
mod tests;
