use super::{GRID_CELLS, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the convention used to lay a flattened row of 49 values onto the 7x7 grid.
///
/// the two conventions are not equivalent. for flat source index `k`:
///   - `RowMajorFlipY`: `col = k / 7`, `row = 6 - k % 7`. the values are
///     reshaped row-major, each matrix row is drawn along x and y is flipped
///     so that the first value sits at the top-left.
///   - `ColumnMajorFlipX`: `col = k % 7`, `row = 6 - k / 7`. the values are
///     reshaped column-major and the resulting matrix is mirrored
///     horizontally before drawing.
///
/// in both cases `col` is the coverage level axis and `row` is the
/// uncertainty level axis, with row 0 drawn at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridOrientation {
    RowMajorFlipY,
    #[default]
    ColumnMajorFlipX,
}

impl GridOrientation {
    /// grid coordinate `(col, row)` of the value at flat source index `k`.
    /// `k` must be less than 49.
    pub fn coordinate(&self, k: usize) -> (usize, usize) {
        debug_assert!(k < GRID_CELLS);
        match self {
            GridOrientation::RowMajorFlipY => (k / GRID_SIZE, GRID_SIZE - 1 - k % GRID_SIZE),
            GridOrientation::ColumnMajorFlipX => (k % GRID_SIZE, GRID_SIZE - 1 - k / GRID_SIZE),
        }
    }

    /// flat source index of the value drawn at `(col, row)`; the inverse of
    /// [GridOrientation::coordinate].
    pub fn source_index(&self, col: usize, row: usize) -> usize {
        debug_assert!(col < GRID_SIZE && row < GRID_SIZE);
        match self {
            GridOrientation::RowMajorFlipY => col * GRID_SIZE + (GRID_SIZE - 1 - row),
            GridOrientation::ColumnMajorFlipX => (GRID_SIZE - 1 - row) * GRID_SIZE + col,
        }
    }
}

impl Display for GridOrientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridOrientation::RowMajorFlipY => write!(f, "row_major_flip_y"),
            GridOrientation::ColumnMajorFlipX => write!(f, "column_major_flip_x"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GridOrientation;
    use crate::model::GRID_CELLS;

    #[test]
    fn test_source_index_inverts_coordinate() {
        for orientation in [
            GridOrientation::RowMajorFlipY,
            GridOrientation::ColumnMajorFlipX,
        ] {
            for k in 0..GRID_CELLS {
                let (col, row) = orientation.coordinate(k);
                assert_eq!(
                    orientation.source_index(col, row),
                    k,
                    "{orientation} should round trip index {k}"
                );
            }
        }
    }

    #[test]
    fn test_orientations_disagree() {
        // index 1 is the second value of the first matrix row
        assert_eq!(GridOrientation::RowMajorFlipY.coordinate(1), (0, 5));
        assert_eq!(GridOrientation::ColumnMajorFlipX.coordinate(1), (1, 6));
    }

    #[test]
    fn test_deserialize_snake_case() {
        let o: GridOrientation =
            serde_json::from_str("\"row_major_flip_y\"").expect("should deserialize");
        assert_eq!(o, GridOrientation::RowMajorFlipY);
    }
}
