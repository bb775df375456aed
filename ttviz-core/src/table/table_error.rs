#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("failure reading travel time table {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failure parsing travel time table: {0}")]
    Csv(#[from] csv::Error),
    #[error("travel time table is missing required column '{0}'")]
    MissingColumn(String),
    #[error("malformed travel time row on line {line}: {msg}")]
    MalformedRow { line: u64, msg: String },
}
