use std::fmt::Write as _;

use crate::chart::builder::{Chart, SceneState};

/// Serialize `chart` with the animated properties of `scene` as a standalone SVG document.
///
/// Each group contributes its wave (when non-empty) followed by its markers, in group
/// order, so later groups paint over earlier ones.
pub fn render_svg(chart: &Chart, scene: &SceneState) -> String {
    let w = chart.surface.width;
    let h = chart.surface.height;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );

    for (wave, markers) in chart.waves.iter().zip(&chart.markers) {
        if let (Some(path), Some(state)) = (&wave.path, scene.waves.get(wave.group_index)) {
            let _ = writeln!(
                out,
                r#"  <path class="wave wave-{}" d="{}" fill="{}" opacity="{}" transform="translate(0, {})"/>"#,
                wave.group_index,
                path.to_svg(),
                wave.fill.to_hex(),
                state.opacity,
                state.translate_y,
            );
        }

        let opacity = scene
            .markers
            .get(markers.group_index)
            .map_or(0.0, |s| s.opacity);
        for dot in &markers.dots {
            let _ = writeln!(
                out,
                r#"  <circle class="dot dot-{}" cx="{}" cy="{}" r="{}" fill="{}" opacity="{}"/>"#,
                markers.group_index,
                dot.center.x,
                dot.center.y,
                dot.radius,
                dot.fill.to_hex(),
                opacity,
            );
        }
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
