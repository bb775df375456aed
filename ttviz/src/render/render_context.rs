use super::RenderError;
use crate::config::DashboardConfig;
use crate::geocode::GeocodeCache;
use itertools::Itertools;
use ttviz_core::color::{build_color_scale, ColorScale, ColorScaleError};
use ttviz_core::grid::{apply_highlight, reshape_row_to_grid, Selection};
use ttviz_core::model::{GridPoint, OdPair};
use ttviz_core::table::TravelTimeTable;

/// everything a page or figure needs, built once per run and passed to
/// every render function
pub struct RenderContext<'a> {
    pub table: &'a TravelTimeTable,
    pub config: &'a DashboardConfig,
    pub coordinates: &'a GeocodeCache,
    pub scale: ColorScale,
    pub selection: Selection,
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    /// stamped into page footers
    pub generated_at: String,
}

impl<'a> RenderContext<'a> {
    /// builds the shared color scale over every value that will be drawn
    pub fn new(
        table: &'a TravelTimeTable,
        config: &'a DashboardConfig,
        coordinates: &'a GeocodeCache,
    ) -> Result<Self, ColorScaleError> {
        let all_values = table.all_values_with(config.self_pair_policy);
        let scale = build_color_scale(&all_values, config.bucket_count, config.palette)?;
        log::info!(
            "color scale covers {:.2} to {:.2} minutes in {} buckets",
            scale.domain_min,
            scale.domain_max,
            scale.bucket_count()
        );
        Ok(Self {
            table,
            config,
            coordinates,
            scale,
            selection: config.selection(),
            origins: table.origins(),
            destinations: table.destinations(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
        })
    }

    /// every origin-destination combination with its origin and destination
    /// positions, origins first
    pub fn pairs(&self) -> Vec<(usize, usize, OdPair)> {
        self.origins
            .iter()
            .enumerate()
            .cartesian_product(self.destinations.iter().enumerate())
            .map(|((i, o), (j, d))| (i, j, OdPair::new(o, d)))
            .collect_vec()
    }

    /// the grid of a pair at full alpha, or None when the table has no row
    pub fn grid_for(&self, pair: &OdPair) -> Result<Option<Vec<GridPoint>>, RenderError> {
        let Some(row) = self.table.get(&pair.origin, &pair.destination) else {
            return Ok(None);
        };
        let values = self.config.self_pair_policy.values(row);
        let points = reshape_row_to_grid(&values, self.config.orientation)?;
        Ok(Some(points))
    }

    /// the grid of a pair with the current selection applied
    pub fn highlighted_grid_for(
        &self,
        pair: &OdPair,
    ) -> Result<Option<Vec<GridPoint>>, RenderError> {
        let grid = self.grid_for(pair)?.map(|mut points| {
            apply_highlight(&mut points, pair, &self.selection);
            points
        });
        Ok(grid)
    }
}
