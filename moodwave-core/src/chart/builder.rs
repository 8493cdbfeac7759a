use crate::{
    chart::{
        curve::catmull_rom_area,
        scale::{LinearScale, SequentialScale, interpolate_blues},
        week::{ExtendedWeek, WeekGroup, partition_weeks},
    },
    config::VizConfig,
    data::record::Record,
    foundation::core::{BezPath, Point, Rgb8, SurfaceSize, Viewport},
};

/// Addressable animated element of a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "group", rename_all = "snake_case")]
pub enum Target {
    /// Filled wave of group `i`.
    Wave(usize),
    /// Marker group of group `i`.
    Markers(usize),
}

/// The animated pair for one group, plus the group's baseline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VisualHandle {
    pub wave: Target,
    pub markers: Target,
    pub baseline: f64,
}

/// Animatable properties of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeState {
    pub opacity: f64,
    /// Vertical translation applied on top of the drawn geometry.
    pub translate_y: f64,
}

/// Animatable properties of every wave and marker group, index-aligned with group order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    pub waves: Vec<NodeState>,
    pub markers: Vec<NodeState>,
}

impl SceneState {
    pub fn get(&self, target: Target) -> Option<&NodeState> {
        match target {
            Target::Wave(i) => self.waves.get(i),
            Target::Markers(i) => self.markers.get(i),
        }
    }

    pub fn get_mut(&mut self, target: Target) -> Option<&mut NodeState> {
        match target {
            Target::Wave(i) => self.waves.get_mut(i),
            Target::Markers(i) => self.markers.get_mut(i),
        }
    }
}

/// Filled area for one group. `path` is `None` for an empty group.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WaveShape {
    pub group_index: usize,
    pub baseline: f64,
    pub fill: Rgb8,
    pub path: Option<BezPath>,
}

/// One data-point marker.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb8,
    pub record: Record,
}

/// Markers of one group, one per real record.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MarkerGroup {
    pub group_index: usize,
    pub dots: Vec<Dot>,
}

/// Everything drawn on the surface, plus the handles the page controller animates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Chart {
    pub surface: SurfaceSize,
    pub groups: Vec<WeekGroup>,
    pub waves: Vec<WaveShape>,
    pub markers: Vec<MarkerGroup>,
    pub handles: Vec<VisualHandle>,
}

impl Chart {
    /// Hidden state: waves transparent and pushed one surface height down, markers
    /// transparent.
    pub fn initial_state(&self) -> SceneState {
        SceneState {
            waves: self
                .waves
                .iter()
                .map(|_| NodeState {
                    opacity: 0.0,
                    translate_y: self.surface.height,
                })
                .collect(),
            markers: self
                .markers
                .iter()
                .map(|_| NodeState {
                    opacity: 0.0,
                    translate_y: 0.0,
                })
                .collect(),
        }
    }

    /// `(group, dot)` of the topmost marker whose disc contains `p`, in surface coordinates.
    pub fn dot_at(&self, p: Point) -> Option<(usize, usize)> {
        self.markers.iter().rev().find_map(|g| {
            g.dots
                .iter()
                .rposition(|d| (d.center - p).hypot() <= d.radius)
                .map(|i| (g.group_index, i))
        })
    }

    pub fn dot(&self, group: usize, index: usize) -> Option<&Dot> {
        self.markers.get(group)?.dots.get(index)
    }
}

/// Vertical offset of group `index` from the surface center.
///
/// Baselines are evenly spaced and symmetric about the center, in calendar order:
/// `(index - (count - 1) / 2) * spacing`.
pub fn baseline_offset(index: usize, count: usize, spacing: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * spacing
}

/// Lay out the month's records as waves and markers on a surface sized to `viewport`.
#[tracing::instrument(skip(records, cfg), fields(record_count = records.len()))]
pub fn build_chart(records: &[Record], viewport: Viewport, cfg: &VizConfig) -> Chart {
    let layout = &cfg.layout;
    let surface = SurfaceSize::from_viewport(viewport, layout.vertical_padding);
    let groups = partition_weeks(records, cfg.data.group_len, cfg.data.group_count);

    let x = LinearScale::new(
        [0.0, cfg.data.group_len.saturating_sub(1) as f64],
        [layout.x_margin, surface.width - layout.x_margin],
    );
    let amplitude = LinearScale::new(
        layout.score_domain,
        [0.0, surface.height * layout.amplitude_fraction],
    );
    let [lo, hi] = layout.score_domain;
    let dot_color = SequentialScale::new([hi, lo], interpolate_blues);

    let mut waves = Vec::with_capacity(groups.len());
    let mut markers = Vec::with_capacity(groups.len());
    let mut handles = Vec::with_capacity(groups.len());

    for group in &groups {
        let i = group.index;
        let baseline =
            surface.center_y() + baseline_offset(i, groups.len(), layout.baseline_spacing);
        let fill = interpolate_blues(
            layout.wave_lightness_base + i as f64 * layout.wave_lightness_step,
        );

        let path = ExtendedWeek::from_group(group, layout.endpoint_offset).and_then(|ext| {
            let (upper, lower): (Vec<Point>, Vec<Point>) = ext
                .points
                .iter()
                .map(|p| {
                    let px = x.apply(p.position);
                    let half = amplitude.apply(p.record.score()) / 2.0;
                    (Point::new(px, baseline - half), Point::new(px, baseline + half))
                })
                .unzip();
            catmull_rom_area(&upper, &lower, layout.curve_alpha)
        });

        let dots = group
            .records
            .iter()
            .enumerate()
            .map(|(idx, r)| Dot {
                center: Point::new(
                    x.apply(idx as f64),
                    baseline - amplitude.apply(r.score()) / 2.0,
                ),
                radius: layout.dot_radius,
                fill: dot_color.apply(r.score()),
                record: r.clone(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            group = i,
            records = group.len(),
            baseline,
            fill = %fill.to_hex(),
            has_wave = path.is_some(),
            "group laid out"
        );

        waves.push(WaveShape {
            group_index: i,
            baseline,
            fill,
            path,
        });
        markers.push(MarkerGroup {
            group_index: i,
            dots,
        });
        handles.push(VisualHandle {
            wave: Target::Wave(i),
            markers: Target::Markers(i),
            baseline,
        });
    }

    tracing::info!(
        groups = groups.len(),
        width = surface.width,
        height = surface.height,
        "chart built"
    );

    Chart {
        surface,
        groups,
        waves,
        markers,
        handles,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/builder.rs"]
mod tests;
