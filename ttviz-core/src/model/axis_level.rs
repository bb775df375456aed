//! labels for the two axes of an adjustment matrix. the columns of a grid
//! are coverage levels and the rows are uncertainty levels.
use super::GRID_SIZE;

/// coverage level label of each grid column, left to right
pub const COVERAGE_LEVELS: [&str; GRID_SIZE] = ["0.7", "0.75", "0.8", "0.85", "0.9", "0.95", "1.0"];

/// uncertainty level label of each grid row, indexed by row
pub const UNCERTAINTY_LEVELS: [&str; GRID_SIZE] =
    ["1.0", "0.95", "0.9", "0.85", "0.8", "0.75", "0.7"];

/// selector option order for both levels, ascending
pub const LEVEL_OPTIONS: [&str; GRID_SIZE] = ["0.7", "0.75", "0.8", "0.85", "0.9", "0.95", "1.0"];

pub fn coverage_label(col: usize) -> Option<&'static str> {
    COVERAGE_LEVELS.get(col).copied()
}

pub fn uncertainty_label(row: usize) -> Option<&'static str> {
    UNCERTAINTY_LEVELS.get(row).copied()
}

/// grid column carrying the given coverage level label
pub fn coverage_column(label: &str) -> Option<usize> {
    COVERAGE_LEVELS.iter().position(|l| *l == label.trim())
}

/// grid row carrying the given uncertainty level label
pub fn uncertainty_row(label: &str) -> Option<usize> {
    UNCERTAINTY_LEVELS.iter().position(|l| *l == label.trim())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_level_lookups() {
        assert_eq!(coverage_column("0.7"), Some(0));
        assert_eq!(uncertainty_row("1.0"), Some(0));
        assert_eq!(coverage_column("1.0"), Some(6));
        assert_eq!(uncertainty_row(" 0.7 "), Some(6));
        assert_eq!(coverage_column("0.85"), uncertainty_row("0.85"));
        assert_eq!(coverage_column("0.72"), None);
        assert_eq!(uncertainty_label(1), Some("0.95"));
        assert_eq!(coverage_label(7), None);
    }
}
