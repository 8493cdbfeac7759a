//! Hover tooltip for data-point markers, as pure event handling.

use crate::{data::record::Record, foundation::core::Point};

/// Long date format shown in the tooltip heading, e.g. `January 05, 2024`.
pub const TOOLTIP_DATE_FORMAT: &str = "%B %d, %Y";

/// Pointer interaction with one marker.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// The pointer entered the marker drawn for `record`.
    Enter { record: Record },
    /// The pointer moved; `page` is in document coordinates.
    Move { page: Point },
    /// The pointer left the marker.
    Leave,
}

/// Intended change to the shared tooltip element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipMutation {
    Show { html: String },
    MoveTo { left: f64, top: f64 },
    Hide,
}

/// Tooltip element state.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TooltipState {
    pub visible: bool,
    pub html: String,
    pub left: f64,
    pub top: f64,
}

impl TooltipState {
    pub fn apply(&mut self, m: &TooltipMutation) {
        match m {
            TooltipMutation::Show { html } => {
                self.visible = true;
                self.html.clone_from(html);
            }
            TooltipMutation::MoveTo { left, top } => {
                self.left = *left;
                self.top = *top;
            }
            TooltipMutation::Hide => self.visible = false,
        }
    }
}

/// Shown in place of a value that was missing in the source row.
pub const MISSING_VALUE_TEXT: &str = "n/a";

/// Tooltip body for one record.
pub fn tooltip_html(record: &Record) -> String {
    format!(
        "<strong>{}</strong><br/>Overall Score: {}<br/>Anxiety: {}<br/>Energy: {}",
        record.date.format(TOOLTIP_DATE_FORMAT),
        value_text(record.overall_score),
        value_text(record.anxiety),
        value_text(record.energy),
    )
}

fn value_text(v: Option<f64>) -> String {
    v.map_or_else(|| MISSING_VALUE_TEXT.to_owned(), |v| v.to_string())
}

/// Map a pointer event to the tooltip change it causes. `offset` is added to the pointer
/// position on move.
pub fn handle_pointer(event: &PointerEvent, offset: [f64; 2]) -> TooltipMutation {
    match event {
        PointerEvent::Enter { record } => TooltipMutation::Show {
            html: tooltip_html(record),
        },
        PointerEvent::Move { page } => TooltipMutation::MoveTo {
            left: page.x + offset[0],
            top: page.y + offset[1],
        },
        PointerEvent::Leave => TooltipMutation::Hide,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/tooltip.rs"]
mod tests;
