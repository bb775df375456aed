use super::{TravelTimeRow, GRID_CELLS};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// what to draw for a pair whose origin and destination are the same city.
/// applied by callers before a row is reshaped, never by the reshape itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfPairPolicy {
    /// draw whatever the dataset recorded for the pair
    #[default]
    AsRecorded,
    /// replace the recorded values with 49 zeros
    Zeros,
}

impl SelfPairPolicy {
    /// the values to draw for this row under the policy
    pub fn values<'a>(&self, row: &'a TravelTimeRow) -> Cow<'a, [f64]> {
        match self {
            SelfPairPolicy::Zeros if row.is_self_pair() => Cow::Owned(vec![0.0; GRID_CELLS]),
            _ => Cow::Borrowed(row.values()),
        }
    }
}
