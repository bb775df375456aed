mod grid_orientation;
mod grid_point;
mod od_pair;
mod self_pair_policy;
mod travel_time_row;

pub mod axis_level;

pub use grid_orientation::GridOrientation;
pub use grid_point::{GridPoint, FULL_ALPHA};
pub use od_pair::OdPair;
pub use self_pair_policy::SelfPairPolicy;
pub use travel_time_row::TravelTimeRow;

/// number of rows (and columns) in an adjustment matrix
pub const GRID_SIZE: usize = 7;

/// number of values in a flattened adjustment matrix
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
