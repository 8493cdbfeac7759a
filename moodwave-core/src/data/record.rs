use chrono::NaiveDate;

/// One day's mood entry. Immutable once loaded.
///
/// Numeric columns that were empty or non-numeric in the source are `None`; the day itself
/// is kept so week slicing stays aligned with the calendar.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Calendar day of the entry.
    pub date: NaiveDate,
    /// Overall positivity score, nominally `[0, 10]`.
    pub overall_score: Option<f64>,
    /// Anxiety level.
    pub anxiety: Option<f64>,
    /// Energy level.
    pub energy: Option<f64>,
}

impl Record {
    pub fn new(date: NaiveDate, overall_score: f64, anxiety: f64, energy: f64) -> Self {
        Self {
            date,
            overall_score: Some(overall_score),
            anxiety: Some(anxiety),
            energy: Some(energy),
        }
    }

    /// Score fed to the chart scales; a missing score counts as `0`.
    pub fn score(&self) -> f64 {
        self.overall_score.unwrap_or(0.0)
    }

    /// True when any numeric column was missing in the source row.
    pub fn has_missing_value(&self) -> bool {
        self.overall_score.is_none() || self.anxiety.is_none() || self.energy.is_none()
    }
}
