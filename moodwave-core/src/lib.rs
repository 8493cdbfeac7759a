//! moodwave renders a month of mood-tracking entries as four stacked "wave" charts that
//! slide into view when the reader scrolls to them.
//!
//! # Pipeline overview
//!
//! 1. **Load**: CSV -> `Vec<Record>` (parsed, sorted by date, filtered to one month)
//! 2. **Build**: records -> [`Chart`] (week groups, wave areas, markers, handles), hidden
//! 3. **React**: [`PageEvent`]s -> [`UiMutation`]s via [`PageController`]; the first time the
//!    January section becomes visible a [`RevealSchedule`] starts
//! 4. **Render**: [`Chart`] + [`SceneState`] -> SVG ([`render_svg`]) -> pixels ([`rasterize_svg`])
//!
//! Handlers are pure: they return the changes they intend and never touch a live document.
//! [`PageSession`] is the in-process stand-in for the browser that applies them, runs the
//! intro timer and samples the reveal animation at any instant.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same dataset, viewport and event timeline give the same frames.
#![forbid(unsafe_code)]

mod animation;
mod chart;
mod config;
mod data;
mod foundation;
mod page;
mod pipeline;
mod render;

pub use animation::driver::AnimationDriver;
pub use animation::ease::Ease;
pub use animation::schedule::{PropertyChange, RevealSchedule, Tween};
pub use chart::builder::{
    Chart, Dot, MarkerGroup, NodeState, SceneState, Target, VisualHandle, WaveShape,
    baseline_offset, build_chart,
};
pub use chart::curve::{catmull_rom_area, catmull_rom_line};
pub use chart::scale::{LinearScale, SequentialScale, interpolate_blues};
pub use chart::tooltip::{
    MISSING_VALUE_TEXT, PointerEvent, TOOLTIP_DATE_FORMAT, TooltipMutation, TooltipState, handle_pointer,
    tooltip_html,
};
pub use chart::week::{ExtendedPoint, ExtendedWeek, WeekGroup, partition_weeks};
pub use config::{DataConfig, LayoutConfig, PageConfig, RevealConfig, VizConfig};
pub use data::loader::{
    DATE_FORMAT, LoadReport, MonthData, filter_month, load_month, load_records,
    month_from_reader, parse_date, parse_records, sort_chronological,
};
pub use data::record::Record;
pub use foundation::core::{BezPath, Point, Rgb8, SurfaceSize, Vec2, Viewport};
pub use foundation::error::{MoodwaveError, MoodwaveResult};
pub use page::controller::{PageController, PageEvent, UiMutation};
pub use page::intro::IntroFadeTimer;
pub use page::session::{DocumentState, PageSession};
pub use page::theme::{Region, ThemeClass, ThemeState};
pub use page::visibility::{IntersectionEntry, RegionRatio, VisibilityObserver};
pub use pipeline::{load_session, session_from_reader};
pub use render::raster::{FrameRGBA, rasterize_svg};
pub use render::svg::render_svg;
