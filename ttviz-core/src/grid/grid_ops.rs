use super::GridError;
use crate::model::{GridOrientation, GridPoint, GRID_CELLS};

/// lays a flattened row of 49 adjustment values onto the 7x7 grid.
///
/// # Arguments
/// * `values` - exactly 49 values in source column order
/// * `orientation` - the flat index to grid coordinate convention
///
/// # Result
/// 49 points, point `k` carrying `values[k]`, covering every `(col, row)`
/// in `[0,6]x[0,6]` exactly once. fails if `values` is not 49 long.
pub fn reshape_row_to_grid(
    values: &[f64],
    orientation: GridOrientation,
) -> Result<Vec<GridPoint>, GridError> {
    if values.len() != GRID_CELLS {
        return Err(GridError::InvalidLength {
            expected: GRID_CELLS,
            found: values.len(),
        });
    }
    let points = values
        .iter()
        .enumerate()
        .map(|(k, value)| {
            let (col, row) = orientation.coordinate(k);
            GridPoint::new(col, row, *value)
        })
        .collect();
    Ok(points)
}

/// travel times are shown to the user rounded up to whole minutes
pub fn display_minutes(value: f64) -> Option<i64> {
    if value.is_finite() {
        Some(value.ceil() as i64)
    } else {
        None
    }
}
