use crate::page::theme::Region;

/// Visibility change of one region, as delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntersectionEntry {
    pub region: Region,
    pub is_intersecting: bool,
}

/// Visible fraction of one region, as measured by the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionRatio {
    pub region: Region,
    pub ratio: f64,
}

/// Turns raw visibility ratios into threshold-crossing entries.
///
/// A region intersects while its visible fraction is at least `threshold`. Only regions
/// whose state changed are reported, in the order their ratios were supplied.
#[derive(Clone, Debug)]
pub struct VisibilityObserver {
    threshold: f64,
    intersecting: [bool; 2],
}

impl VisibilityObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            intersecting: [false; 2],
        }
    }

    pub fn is_intersecting(&self, region: Region) -> bool {
        self.intersecting[region.slot()]
    }

    pub fn observe(&mut self, ratios: &[RegionRatio]) -> Vec<IntersectionEntry> {
        let mut out = Vec::new();
        for r in ratios {
            let now = r.ratio >= self.threshold;
            let slot = &mut self.intersecting[r.region.slot()];
            if *slot != now {
                *slot = now;
                out.push(IntersectionEntry {
                    region: r.region,
                    is_intersecting: now,
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/visibility.rs"]
mod tests;
