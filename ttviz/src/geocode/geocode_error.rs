#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("failure building geocoding client: {0}")]
    ClientError(String),
    #[error("geocoding request for '{location}' failed: {source}")]
    RequestError {
        location: String,
        source: reqwest::Error,
    },
    #[error("geocoding request for '{location}' returned status {status}")]
    StatusError { location: String, status: u16 },
    #[error("unable to parse geocoding response for '{location}': {msg}")]
    ResponseError { location: String, msg: String },
    #[error("failure reading geocode cache {path}: {source}")]
    CacheReadError { path: String, source: csv::Error },
    #[error("failure writing geocode cache {path}: {source}")]
    CacheWriteError { path: String, source: csv::Error },
    #[error("failure creating directory for geocode cache {path}: {source}")]
    CacheDirectoryError {
        path: String,
        source: std::io::Error,
    },
}
