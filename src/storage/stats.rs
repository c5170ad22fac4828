//! GPA statistics
//!
//! Single-pass accumulation over a scan.

/// Aggregate figures over every record in the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of records
    pub count: usize,
    /// Mean gpa
    pub average: f64,
    /// Largest gpa seen
    pub highest: f32,
    /// Smallest gpa seen
    pub lowest: f32,
}

/// Running totals for `Statistics`
///
/// Extremes are always values that were actually observed, in or out of
/// the usual 0.0..=4.0 range. A NaN gpa is counted and makes the average
/// NaN, but never becomes an extreme; if every gpa is NaN the extremes are
/// NaN as well.
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    count: usize,
    sum: f64,
    highest: Option<f32>,
    lowest: Option<f32>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one gpa into the totals
    pub fn add(&mut self, gpa: f32) {
        self.count += 1;
        self.sum += f64::from(gpa);
        if gpa.is_nan() {
            return;
        }
        self.highest = Some(self.highest.map_or(gpa, |h| h.max(gpa)));
        self.lowest = Some(self.lowest.map_or(gpa, |l| l.min(gpa)));
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Final figures, or `None` when nothing was added
    pub fn finish(&self) -> Option<Statistics> {
        if self.count == 0 {
            return None;
        }
        Some(Statistics {
            count: self.count,
            average: self.sum / self.count as f64,
            highest: self.highest.unwrap_or(f32::NAN),
            lowest: self.lowest.unwrap_or(f32::NAN),
        })
    }
}

impl Extend<f32> for StatsAccumulator {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for gpa in iter {
            self.add(gpa);
        }
    }
}
