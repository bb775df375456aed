use super::figure::detail_path;
use super::{RenderContext, RenderError};
use itertools::Itertools;
use serde::Serialize;
use ttviz_core::grid::{display_minutes, GridSummary};
use ttviz_core::model::GRID_SIZE;

/// what the page holds for one origin-destination pair
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactHandle {
    pub origin: String,
    pub destination: String,
    /// element id of the overview tile
    pub tile_id: String,
    /// element id of the enlarged view
    pub enlarged_id: String,
    /// figure descriptor, relative to the output directory
    pub descriptor_path: String,
    pub has_data: bool,
    /// smallest and largest displayed value, in whole minutes
    pub range: Option<(i64, i64)>,
    /// displayed value of each cell, indexed by `row * 7 + col`
    pub cells: Vec<Option<i64>>,
}

/// every pair's artifacts, addressed by origin and destination position so
/// the page script never builds element ids out of location names
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactIndex {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    /// `handles[origin][destination]`
    pub handles: Vec<Vec<ArtifactHandle>>,
}

impl ArtifactIndex {
    pub fn build(ctx: &RenderContext) -> Result<Self, RenderError> {
        let mut handles: Vec<Vec<ArtifactHandle>> = ctx
            .origins
            .iter()
            .map(|_| Vec::with_capacity(ctx.destinations.len()))
            .collect_vec();
        for (i, j, pair) in ctx.pairs() {
            let points = ctx.grid_for(&pair)?;
            let mut cells = vec![None; GRID_SIZE * GRID_SIZE];
            if let Some(points) = &points {
                for p in points.iter() {
                    cells[p.row * GRID_SIZE + p.col] = display_minutes(p.value);
                }
            }
            let range = points
                .as_deref()
                .and_then(GridSummary::from_points)
                .and_then(|s| Some((display_minutes(s.min)?, display_minutes(s.max)?)));
            let handle = ArtifactHandle {
                origin: pair.origin.clone(),
                destination: pair.destination.clone(),
                tile_id: tile_id(i, j),
                enlarged_id: enlarged_id(i, j),
                descriptor_path: detail_path(&pair).to_string_lossy().replace('\\', "/"),
                has_data: points.is_some(),
                range,
                cells,
            };
            handles[i].push(handle);
        }
        Ok(Self {
            origins: ctx.origins.clone(),
            destinations: ctx.destinations.clone(),
            handles,
        })
    }

    /// handles with their positions, origins first
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &ArtifactHandle)> {
        self.handles
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, h)| (i, j, h)))
    }
}

pub fn tile_id(origin_index: usize, destination_index: usize) -> String {
    format!("tile-{origin_index}-{destination_index}")
}

pub fn enlarged_id(origin_index: usize, destination_index: usize) -> String {
    format!("enlarged-{origin_index}-{destination_index}")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::render::test_fixture::{sample_coordinates, sample_table};

    #[test]
    fn test_index_by_position() {
        let table = sample_table();
        let config = DashboardConfig::default();
        let coordinates = sample_coordinates();
        let ctx = RenderContext::new(&table, &config, &coordinates).expect("should build context");
        let index = ArtifactIndex::build(&ctx).expect("should build index");

        assert_eq!(index.iter().count(), 4);
        assert_eq!(index.origins, vec!["Chicago", "Detroit"]);
        assert_eq!(index.destinations, vec!["Chicago", "Detroit"]);
        let handle = &index.handles[0][1];
        assert_eq!(
            (handle.origin.as_str(), handle.destination.as_str()),
            ("Chicago", "Detroit")
        );
        assert_eq!(handle.tile_id, "tile-0-1");
        assert_eq!(handle.enlarged_id, "enlarged-0-1");
        assert_eq!(handle.descriptor_path, "static/details/Chicago_Detroit.json");
        assert!(handle.has_data);
        assert_eq!(handle.range, Some((0, 48)));
        // source value 0 is drawn at column 0, row 6
        assert_eq!(handle.cells[6 * 7], Some(0));
        assert_eq!(handle.cells.len(), 49);

        let gap = &index.handles[1][0];
        assert_eq!(gap.tile_id, "tile-1-0");
        assert_eq!(gap.cells.iter().filter(|c| c.is_none()).count(), 1);
        assert_eq!(gap.range, Some((10, 58)));

        let empty = &index.handles[1][1];
        assert!(!empty.has_data);
        assert!(empty.range.is_none());
        assert!(empty.cells.iter().all(|c| c.is_none()));
    }
}
