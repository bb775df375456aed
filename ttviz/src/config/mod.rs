mod config_error;
mod dashboard_config;

pub use config_error::ConfigError;
pub use dashboard_config::{
    DashboardConfig, GeocodeConfig, InitialSelection, MapConfig, TileConfig,
};
