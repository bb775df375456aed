mod grid_error;
mod grid_summary;
mod selection;

pub mod grid_ops;

pub use grid_error::GridError;
pub use grid_ops::{display_minutes, reshape_row_to_grid};
pub use grid_summary::GridSummary;
pub use selection::{apply_highlight, Selection, DIMMED_ALPHA};
