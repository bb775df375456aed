use crate::config::ConfigError;
use crate::geocode::GeocodeError;
use crate::render::RenderError;
use ttviz_core::color::ColorScaleError;
use ttviz_core::table::TableError;

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    TableError(#[from] TableError),
    #[error("failure building color scale: {0}")]
    ColorScaleError(#[from] ColorScaleError),
    #[error(transparent)]
    GeocodeError(#[from] GeocodeError),
    #[error(transparent)]
    RenderError(#[from] RenderError),
    #[error("failure writing {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },
}
