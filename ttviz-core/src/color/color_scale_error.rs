#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ColorScaleError {
    #[error("cannot build a color scale, input has no non-missing values")]
    EmptyDomain,
    #[error("color scale needs at least one bucket, found {0}")]
    InvalidBucketCount(usize),
}
