use crate::model::{axis_level, GridPoint, OdPair, FULL_ALPHA};
use serde::{Deserialize, Serialize};

/// alpha of a cell de-emphasized by a selection
pub const DIMMED_ALPHA: f64 = 0.1;

/// what the dashboard user has picked. any part may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub origin: Option<String>,
    pub destination: Option<String>,
    /// selected coverage level, as a grid column
    pub coverage: Option<usize>,
    /// selected uncertainty level, as a grid row
    pub uncertainty: Option<usize>,
}

impl Selection {
    /// builds a selection from selector labels. unknown level labels are
    /// treated as unset.
    pub fn from_labels(
        origin: Option<&str>,
        destination: Option<&str>,
        coverage: Option<&str>,
        uncertainty: Option<&str>,
    ) -> Self {
        Self {
            origin: origin.map(String::from),
            destination: destination.map(String::from),
            coverage: coverage.and_then(axis_level::coverage_column),
            uncertainty: uncertainty.and_then(axis_level::uncertainty_row),
        }
    }

    /// the selected pair, once both halves are set
    pub fn pair(&self) -> Option<OdPair> {
        match (&self.origin, &self.destination) {
            (Some(o), Some(d)) => Some(OdPair::new(o, d)),
            _ => None,
        }
    }

    pub fn is_selected(&self, pair: &OdPair) -> bool {
        self.origin.as_deref() == Some(pair.origin.as_str())
            && self.destination.as_deref() == Some(pair.destination.as_str())
    }

    /// alpha of a pair's tile in the overview grid. every tile is at full
    /// alpha until a complete pair is selected.
    pub fn overview_alpha(&self, pair: &OdPair) -> f64 {
        match self.pair() {
            None => FULL_ALPHA,
            Some(_) if self.is_selected(pair) => FULL_ALPHA,
            Some(_) => DIMMED_ALPHA,
        }
    }

    /// alpha of one cell of a pair's enlarged grid. only the selected pair
    /// is ever dimmed; the coverage and uncertainty levels pick out a cell,
    /// a column, or a row.
    pub fn cell_alpha(&self, pair: &OdPair, col: usize, row: usize) -> f64 {
        if !self.is_selected(pair) {
            return FULL_ALPHA;
        }
        let lit = match (self.coverage, self.uncertainty) {
            (Some(c), Some(r)) => col == c && row == r,
            (None, Some(r)) => row == r,
            (Some(c), None) => col == c,
            (None, None) => true,
        };
        if lit {
            FULL_ALPHA
        } else {
            DIMMED_ALPHA
        }
    }
}

/// sets the highlight alpha of every point of a pair's grid
pub fn apply_highlight(points: &mut [GridPoint], pair: &OdPair, selection: &Selection) {
    for point in points.iter_mut() {
        point.highlight_alpha = selection.cell_alpha(pair, point.col, point.row);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::reshape_row_to_grid;
    use crate::model::GridOrientation;

    fn grid() -> Vec<GridPoint> {
        reshape_row_to_grid(&[5.0; 49], GridOrientation::ColumnMajorFlipX)
            .expect("49 values should reshape")
    }

    fn lit_cells(points: &[GridPoint]) -> usize {
        points.iter().filter(|p| p.highlight_alpha == FULL_ALPHA).count()
    }

    #[test]
    fn test_overview_alpha() {
        let chicago_detroit = OdPair::new("Chicago", "Detroit");
        let chicago_toronto = OdPair::new("Chicago", "Toronto");

        let partial = Selection::from_labels(Some("Chicago"), None, None, None);
        assert_eq!(partial.overview_alpha(&chicago_toronto), FULL_ALPHA);

        let full = Selection::from_labels(Some("Chicago"), Some("Detroit"), None, None);
        assert_eq!(full.overview_alpha(&chicago_detroit), FULL_ALPHA);
        assert_eq!(full.overview_alpha(&chicago_toronto), DIMMED_ALPHA);
    }

    #[test]
    fn test_cell_row_and_column_highlight() {
        let pair = OdPair::new("Chicago", "Detroit");
        let mut points = grid();

        let cell = Selection::from_labels(Some("Chicago"), Some("Detroit"), Some("0.8"), Some("0.9"));
        apply_highlight(&mut points, &pair, &cell);
        assert_eq!(lit_cells(&points), 1);
        let lit = points
            .iter()
            .find(|p| p.highlight_alpha == FULL_ALPHA)
            .expect("one cell should be lit");
        assert_eq!((lit.col, lit.row), (2, 2));

        let row = Selection::from_labels(Some("Chicago"), Some("Detroit"), None, Some("0.7"));
        apply_highlight(&mut points, &pair, &row);
        assert_eq!(lit_cells(&points), 7);
        assert!(points
            .iter()
            .filter(|p| p.highlight_alpha == FULL_ALPHA)
            .all(|p| p.row == 6));

        let column = Selection::from_labels(Some("Chicago"), Some("Detroit"), Some("1.0"), None);
        apply_highlight(&mut points, &pair, &column);
        assert_eq!(lit_cells(&points), 7);
        assert!(points
            .iter()
            .filter(|p| p.highlight_alpha == FULL_ALPHA)
            .all(|p| p.col == 6));

        let none = Selection::from_labels(Some("Chicago"), Some("Detroit"), None, None);
        apply_highlight(&mut points, &pair, &none);
        assert_eq!(lit_cells(&points), 49);
    }

    #[test]
    fn test_other_pairs_stay_lit() {
        let mut points = grid();
        let selection =
            Selection::from_labels(Some("Chicago"), Some("Detroit"), Some("0.8"), Some("0.9"));
        apply_highlight(&mut points, &OdPair::new("Detroit", "Chicago"), &selection);
        assert_eq!(lit_cells(&points), 49);
    }
}
