use super::ConfigError;
use ::config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use ttviz_core::color::{Palette, DEFAULT_BUCKET_COUNT};
use ttviz_core::grid::Selection;
use ttviz_core::model::{axis_level, GridOrientation, SelfPairPolicy};

/// settings for building the dashboards. every key is optional, the
/// defaults reproduce the coverage and uncertainty dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub bucket_count: usize,
    pub palette: Palette,
    pub orientation: GridOrientation,
    pub self_pair_policy: SelfPairPolicy,
    pub geocode: GeocodeConfig,
    pub map: MapConfig,
    pub tiles: TileConfig,
    pub initial_selection: Option<InitialSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodeConfig {
    /// when false, only an existing cache file is used
    pub enabled: bool,
    pub endpoint: String,
    pub user_agent: String,
    /// pause between two geocoding requests
    pub delay_ms: u64,
    pub timeout_secs: u64,
    pub cache_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// the map widget is only embedded when a key is provided
    pub google_maps_api_key: Option<String>,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// edge length of an overview tile, in pixels
    pub thumbnail_px: u32,
    /// edge length of the enlarged grid, in pixels
    pub enlarged_px: u32,
}

/// a selection to bake into the generated page, by label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSelection {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub coverage: Option<String>,
    pub uncertainty: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: String::from("Great Lakes Travel Time Dashboard"),
            bucket_count: DEFAULT_BUCKET_COUNT,
            palette: Palette::default(),
            orientation: GridOrientation::default(),
            self_pair_policy: SelfPairPolicy::default(),
            geocode: GeocodeConfig::default(),
            map: MapConfig::default(),
            tiles: TileConfig::default(),
            initial_selection: None,
        }
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: String::from("https://nominatim.openstreetmap.org/search"),
            user_agent: String::from("travel-time-dashboard/1.0"),
            delay_ms: 1000,
            timeout_secs: 10,
            cache_file: String::from("data/location_coords.csv"),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            center_lat: 43.5,
            center_lon: -80.0,
            zoom: 5,
        }
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            thumbnail_px: 80,
            enlarged_px: 450,
        }
    }
}

impl InitialSelection {
    pub fn to_selection(&self) -> Selection {
        Selection::from_labels(
            self.origin.as_deref(),
            self.destination.as_deref(),
            self.coverage.as_deref(),
            self.uncertainty.as_deref(),
        )
    }
}

impl DashboardConfig {
    /// reads a TOML configuration file, or the defaults when no file is given
    pub fn from_optional_file(filepath: Option<&str>) -> Result<Self, ConfigError> {
        match filepath {
            Some(f) => Self::from_file(f),
            None => {
                log::info!("no configuration file provided, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self, ConfigError> {
        let filepath = filepath.as_ref().to_string_lossy().to_string();
        let config_file = File::new(&filepath, FileFormat::Toml);
        let config = Config::builder()
            .add_source(config_file)
            .build()
            .map_err(|e| ConfigError::ConfigReadError {
                msg: format!("failed reading '{filepath}'"),
                source: e,
            })?;
        let dashboard_config = config.try_deserialize::<DashboardConfig>().map_err(|e| {
            ConfigError::ConfigReadError {
                msg: format!("failed deserializing '{filepath}' as a dashboard configuration"),
                source: e,
            }
        })?;
        dashboard_config.validate()?;
        log::debug!("loaded dashboard configuration from {filepath}: {dashboard_config:?}");
        Ok(dashboard_config)
    }

    /// the selection rendered into the initial page state
    pub fn selection(&self) -> Selection {
        self.initial_selection
            .as_ref()
            .map(InitialSelection::to_selection)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_count == 0 {
            return Err(ConfigError::InvalidValue(String::from(
                "bucket_count must be at least 1",
            )));
        }
        if self.tiles.thumbnail_px == 0 || self.tiles.enlarged_px == 0 {
            return Err(ConfigError::InvalidValue(String::from(
                "tile sizes must be positive",
            )));
        }
        if !(-90.0..=90.0).contains(&self.map.center_lat)
            || !(-180.0..=180.0).contains(&self.map.center_lon)
        {
            return Err(ConfigError::InvalidValue(format!(
                "map center ({}, {}) is not a valid coordinate",
                self.map.center_lat, self.map.center_lon
            )));
        }
        if self.map.zoom > 21 {
            return Err(ConfigError::InvalidValue(format!(
                "map zoom {} is outside of [0, 21]",
                self.map.zoom
            )));
        }
        if let Some(initial) = &self.initial_selection {
            let bad_coverage = initial
                .coverage
                .as_deref()
                .filter(|l| axis_level::coverage_column(l).is_none());
            let bad_uncertainty = initial
                .uncertainty
                .as_deref()
                .filter(|l| axis_level::uncertainty_row(l).is_none());
            if let Some(label) = bad_coverage.or(bad_uncertainty) {
                return Err(ConfigError::InvalidValue(format!(
                    "initial selection level '{label}' is not one of {:?}",
                    axis_level::LEVEL_OPTIONS
                )));
            }
        }
        Ok(())
    }
}
