use crate::model::GridPoint;
use serde::{Deserialize, Serialize};

/// range and mean of the non-missing cells of a grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// number of cells that were missing (NaN)
    pub missing: usize,
}

impl GridSummary {
    /// summarizes a grid, returning None when every cell is missing
    pub fn from_points(points: &[GridPoint]) -> Option<Self> {
        Self::from_values(points.iter().map(|p| p.value))
    }

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;
        let mut missing = 0usize;
        for v in values {
            if v.is_nan() {
                missing += 1;
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Self {
            min,
            max,
            mean: sum / count as f64,
            missing,
        })
    }
}

#[cfg(test)]
mod test {
    use super::GridSummary;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_ignores_nan() {
        let summary = GridSummary::from_values(vec![2.0, f64::NAN, 6.0, 4.0])
            .expect("should have non-missing values");
        assert_relative_eq!(summary.min, 2.0);
        assert_relative_eq!(summary.max, 6.0);
        assert_relative_eq!(summary.mean, 4.0);
        assert_eq!(summary.missing, 1);
    }

    #[test]
    fn test_summary_all_missing() {
        assert!(GridSummary::from_values(vec![f64::NAN; 49]).is_none());
    }
}
