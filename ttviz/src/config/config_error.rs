#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: ::config::ConfigError,
    },
    #[error("invalid dashboard configuration: {0}")]
    InvalidValue(String),
}
