use super::{OdPair, GRID_CELLS};
use crate::grid::GridError;
use serde::{Deserialize, Serialize};

/// the 49 adjustment values recorded for one origin-destination pair, in
/// source column order. empty source cells are NaN.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTimeRow {
    pub origin: String,
    pub destination: String,
    values: Vec<f64>,
}

impl TravelTimeRow {
    /// builds a row, rejecting anything other than exactly 49 values
    pub fn new(origin: &str, destination: &str, values: Vec<f64>) -> Result<Self, GridError> {
        if values.len() != GRID_CELLS {
            return Err(GridError::InvalidLength {
                expected: GRID_CELLS,
                found: values.len(),
            });
        }
        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            values,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn pair(&self) -> OdPair {
        OdPair::new(&self.origin, &self.destination)
    }

    pub fn is_self_pair(&self) -> bool {
        self.origin == self.destination
    }
}

#[cfg(test)]
mod test {
    use super::TravelTimeRow;
    use crate::grid::GridError;

    #[test]
    fn test_rejects_short_rows() {
        let result = TravelTimeRow::new("Chicago", "Detroit", vec![1.0; 40]);
        match result {
            Err(GridError::InvalidLength { expected, found }) => {
                assert_eq!(expected, 49);
                assert_eq!(found, 40);
            }
            other => panic!("expected InvalidLength, found {other:?}"),
        }
    }
}
