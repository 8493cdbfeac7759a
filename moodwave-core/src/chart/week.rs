use crate::data::record::Record;

/// A contiguous slice of the month, in calendar order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WeekGroup {
    /// Position of the group in calendar order.
    pub index: usize,
    pub records: Vec<Record>,
}

impl WeekGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Split `records` into exactly `group_count` groups by fixed offsets of `group_len`.
///
/// Group `i` holds `[i * group_len, (i + 1) * group_len)`; the last group takes everything
/// from its start to the end. Groups past the data are empty.
pub fn partition_weeks(records: &[Record], group_len: usize, group_count: usize) -> Vec<WeekGroup> {
    (0..group_count)
        .map(|index| {
            let start = (index * group_len).min(records.len());
            let end = if index + 1 == group_count {
                records.len()
            } else {
                ((index + 1) * group_len).min(records.len())
            };
            WeekGroup {
                index,
                records: records[start..end].to_vec(),
            }
        })
        .collect()
}

/// One sample of an [`ExtendedWeek`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExtendedPoint {
    /// Horizontal position in index units (may be fractional for synthetic samples).
    pub position: f64,
    pub record: Record,
    /// `true` for the duplicated endpoints that only shape the curve.
    pub synthetic: bool,
}

/// A week padded with duplicated first and last records at fractional positions so the
/// wave's ends taper smoothly. Geometry only.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExtendedWeek {
    pub points: Vec<ExtendedPoint>,
}

impl ExtendedWeek {
    /// `None` for an empty group. Otherwise `n + 2` samples: the first record at
    /// `-offset`, every record at its index, the last record at `(n - 1) + offset`.
    pub fn from_group(group: &WeekGroup, offset: f64) -> Option<Self> {
        let first = group.records.first()?;
        let last = group.records.last()?;
        let n = group.records.len();

        let mut points = Vec::with_capacity(n + 2);
        points.push(ExtendedPoint {
            position: -offset,
            record: first.clone(),
            synthetic: true,
        });
        points.extend(group.records.iter().enumerate().map(|(i, r)| ExtendedPoint {
            position: i as f64,
            record: r.clone(),
            synthetic: false,
        }));
        points.push(ExtendedPoint {
            position: (n - 1) as f64 + offset,
            record: last.clone(),
            synthetic: true,
        });
        Some(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The real records, without the synthetic endpoints.
    pub fn real_records(&self) -> impl Iterator<Item = &Record> {
        self.points.iter().filter(|p| !p.synthetic).map(|p| &p.record)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/week.rs"]
mod tests;
