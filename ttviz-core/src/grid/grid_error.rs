#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("expected {expected} values for a 7x7 grid, found {found}")]
    InvalidLength { expected: usize, found: usize },
}
