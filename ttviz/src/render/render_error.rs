use ttviz_core::grid::GridError;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failure drawing grid for {pair}: {msg}")]
    PlotError { pair: String, msg: String },
    #[error(transparent)]
    GridError(#[from] GridError),
    #[error("failure serializing {what}: {source}")]
    SerializationError {
        what: String,
        source: serde_json::Error,
    },
    #[error("failure writing {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },
    #[error("failure formatting html: {0}")]
    FormatError(#[from] std::fmt::Error),
}
