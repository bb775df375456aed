use super::{ColorScaleError, Palette, Rgb};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// number of buckets the dashboards split the value domain into
pub const DEFAULT_BUCKET_COUNT: usize = 24;

/// a discrete value to color mapping shared by every grid of a dashboard,
/// so that equal colors mean equal times across pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub domain_min: f64,
    pub domain_max: f64,
    /// `colors.len() + 1` evenly spaced bucket edges from min to max
    pub boundaries: Vec<f64>,
    pub colors: Vec<Rgb>,
}

/// builds the shared color scale over every value of the dataset.
///
/// # Arguments
/// * `all_values` - values of all rows, NaN and infinite entries are ignored
/// * `bucket_count` - number of discrete colors, at least 1
/// * `palette` - the ramp the colors are sampled from
///
/// # Result
/// a scale whose domain is the global min and max of `all_values`
pub fn build_color_scale(
    all_values: &[f64],
    bucket_count: usize,
    palette: Palette,
) -> Result<ColorScale, ColorScaleError> {
    if bucket_count == 0 {
        return Err(ColorScaleError::InvalidBucketCount(bucket_count));
    }
    let (domain_min, domain_max) = match all_values
        .iter()
        .filter(|v| v.is_finite())
        .minmax_by(|a, b| a.total_cmp(b))
    {
        itertools::MinMaxResult::NoElements => return Err(ColorScaleError::EmptyDomain),
        itertools::MinMaxResult::OneElement(v) => (*v, *v),
        itertools::MinMaxResult::MinMax(min, max) => (*min, *max),
    };

    let step = (domain_max - domain_min) / bucket_count as f64;
    let boundaries = (0..=bucket_count)
        .map(|i| {
            if i == bucket_count {
                domain_max
            } else {
                domain_min + step * i as f64
            }
        })
        .collect_vec();

    let colors = (0..bucket_count)
        .map(|i| {
            let t = if bucket_count == 1 {
                0.0
            } else {
                i as f64 / (bucket_count - 1) as f64
            };
            palette.sample(t)
        })
        .collect_vec();

    log::debug!(
        "built {bucket_count}-bucket {palette} color scale over [{domain_min}, {domain_max}]"
    );

    Ok(ColorScale {
        domain_min,
        domain_max,
        boundaries,
        colors,
    })
}

impl ColorScale {
    pub fn bucket_count(&self) -> usize {
        self.colors.len()
    }

    /// bucket of a value. values outside the domain clamp to the first or
    /// last bucket. NaN and a single-valued domain map to bucket 0.
    pub fn bucket_index(&self, value: f64) -> usize {
        let n = self.bucket_count();
        let span = self.domain_max - self.domain_min;
        if value.is_nan() || span <= 0.0 || n == 0 {
            return 0;
        }
        let scaled = ((value - self.domain_min) / span * n as f64).floor();
        if scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(n - 1)
        }
    }

    pub fn color_for(&self, value: f64) -> Rgb {
        self.colors
            .get(self.bucket_index(value))
            .copied()
            .unwrap_or(super::MISSING_COLOR)
    }

    /// colorbar ticks: each boundary and the domain ends, rounded to whole
    /// minutes, ascending without repeats
    pub fn ticks(&self) -> Vec<i64> {
        self.boundaries
            .iter()
            .copied()
            .chain([self.domain_min, self.domain_max])
            .map(|b| b.round() as i64)
            .sorted()
            .dedup()
            .collect_vec()
    }

    /// `(lower, upper, color)` of each bucket, lowest first
    pub fn buckets(&self) -> impl Iterator<Item = (f64, f64, Rgb)> + '_ {
        self.boundaries
            .iter()
            .tuple_windows()
            .zip(self.colors.iter())
            .map(|((lower, upper), color)| (*lower, *upper, *color))
    }
}
