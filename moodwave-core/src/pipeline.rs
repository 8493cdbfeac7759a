use std::{io::Read, path::Path};

use crate::{
    chart::builder::build_chart,
    config::VizConfig,
    data::loader::{MonthData, load_month, month_from_reader},
    foundation::{core::Viewport, error::MoodwaveResult},
    page::session::PageSession,
};

/// Load the dataset at `csv_path`, build the chart and wire a page session.
///
/// A load failure is logged and returned; no chart is ever built from a failed load.
#[tracing::instrument(skip(config))]
pub fn load_session(
    csv_path: &Path,
    viewport: Viewport,
    config: &VizConfig,
) -> MoodwaveResult<PageSession> {
    config.validate()?;
    let data = load_month(csv_path, config.data.month).inspect_err(|e| {
        tracing::error!(path = %csv_path.display(), error = %e, "dataset load failed");
    })?;
    Ok(session_from_month(&data, viewport, config))
}

/// Same as [`load_session`] for an in-memory or streamed dataset.
pub fn session_from_reader<R: Read>(
    reader: R,
    viewport: Viewport,
    config: &VizConfig,
) -> MoodwaveResult<PageSession> {
    config.validate()?;
    let data = month_from_reader(reader, config.data.month).inspect_err(|e| {
        tracing::error!(error = %e, "dataset load failed");
    })?;
    Ok(session_from_month(&data, viewport, config))
}

fn session_from_month(data: &MonthData, viewport: Viewport, config: &VizConfig) -> PageSession {
    let chart = build_chart(&data.records, viewport, config);
    PageSession::new(chart, config.clone())
}
