use super::{RenderContext, RenderError};
use crate::util::fs::write_file;
use itertools::Itertools;
use serde::Serialize;
use std::path::{Path, PathBuf};
use ttviz_core::color::{build_color_scale, ColorScale, Palette, Rgb, MISSING_COLOR};
use ttviz_core::grid::{display_minutes, GridSummary};
use ttviz_core::model::{axis_level, OdPair};

/// directory of the figure descriptors, relative to the output directory
pub const STATIC_DIRECTORY: &str = "static";
pub const OVERVIEW_FILENAME: &str = "main-grid.json";
pub const DETAILS_DIRECTORY: &str = "details";
const OVERVIEW_BUCKET_COUNT: usize = 256;
const OVERVIEW_SIZE_PX: u32 = 600;
const DETAIL_SIZE_PX: u32 = 400;

/// a plotting library neutral description of one pair's 7x7 grid
#[derive(Debug, Clone, Serialize)]
pub struct GridFigure {
    pub title: String,
    pub origin: String,
    pub destination: String,
    pub width: u32,
    pub height: u32,
    pub x_axis_label: &'static str,
    pub y_axis_label: &'static str,
    pub coverage_levels: Vec<&'static str>,
    pub uncertainty_levels: Vec<&'static str>,
    pub summary: Option<GridSummary>,
    /// empty when the dataset has no row for the pair
    pub cells: Vec<FigureCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureCell {
    pub col: usize,
    pub row: usize,
    pub value: Option<f64>,
    pub display_minutes: Option<i64>,
    pub coverage: &'static str,
    pub uncertainty: &'static str,
    pub color: Rgb,
    pub alpha: f64,
}

/// one tile per origin-destination pair, colored by the pair's mean
#[derive(Debug, Clone, Serialize)]
pub struct OverviewFigure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub scale: Option<ColorScale>,
    pub cells: Vec<OverviewCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewCell {
    /// destination position, left to right
    pub x: usize,
    /// origins read top to bottom
    pub y: usize,
    pub origin: String,
    pub destination: String,
    pub mean: Option<f64>,
    pub color: Rgb,
    pub alpha: f64,
}

pub fn grid_figure(ctx: &RenderContext, pair: &OdPair) -> Result<GridFigure, RenderError> {
    let points = ctx.highlighted_grid_for(pair)?;
    let title = match points {
        Some(_) => format!("{pair} (Travel Time Details)"),
        None => format!("{pair} (No Data)"),
    };
    let points = points.unwrap_or_default();
    let cells = points
        .iter()
        .map(|p| FigureCell {
            col: p.col,
            row: p.row,
            value: (!p.is_missing()).then_some(p.value),
            display_minutes: display_minutes(p.value),
            coverage: axis_level::coverage_label(p.col).unwrap_or_default(),
            uncertainty: axis_level::uncertainty_label(p.row).unwrap_or_default(),
            color: if p.is_missing() {
                MISSING_COLOR
            } else {
                ctx.scale.color_for(p.value)
            },
            alpha: p.highlight_alpha,
        })
        .collect_vec();
    Ok(GridFigure {
        title,
        origin: pair.origin.clone(),
        destination: pair.destination.clone(),
        width: DETAIL_SIZE_PX,
        height: DETAIL_SIZE_PX,
        x_axis_label: "Coverage Level",
        y_axis_label: "Uncertainty Level",
        coverage_levels: axis_level::COVERAGE_LEVELS.to_vec(),
        uncertainty_levels: axis_level::UNCERTAINTY_LEVELS.to_vec(),
        summary: GridSummary::from_points(&points),
        cells,
    })
}

pub fn overview_figure(ctx: &RenderContext) -> Result<OverviewFigure, RenderError> {
    let pairs = ctx.pairs();
    let means = pairs
        .iter()
        .map(|(_, _, pair)| {
            let mean = ctx
                .grid_for(pair)?
                .and_then(|points| GridSummary::from_points(&points))
                .map(|s| s.mean);
            Ok(mean)
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    let mean_values = means.iter().flatten().copied().collect_vec();
    let scale = build_color_scale(&mean_values, OVERVIEW_BUCKET_COUNT, Palette::Viridis).ok();

    let n_origins = ctx.origins.len();
    let cells = pairs
        .into_iter()
        .zip(means)
        .map(|((i, j, pair), mean)| {
            let color = match (&scale, mean) {
                (Some(s), Some(m)) => s.color_for(m),
                _ => MISSING_COLOR,
            };
            OverviewCell {
                x: j,
                y: n_origins - 1 - i,
                alpha: ctx.selection.overview_alpha(&pair),
                origin: pair.origin,
                destination: pair.destination,
                mean,
                color,
            }
        })
        .collect_vec();
    Ok(OverviewFigure {
        title: format!("{} - Travel Time Matrix", ctx.config.title),
        width: OVERVIEW_SIZE_PX,
        height: OVERVIEW_SIZE_PX,
        origins: ctx.origins.clone(),
        destinations: ctx.destinations.clone(),
        scale,
        cells,
    })
}

/// path of a pair's descriptor relative to the output directory
pub fn detail_path(pair: &OdPair) -> PathBuf {
    Path::new(STATIC_DIRECTORY)
        .join(DETAILS_DIRECTORY)
        .join(format!("{}.json", pair.stem()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RenderError> {
    let path_str = path.to_string_lossy().to_string();
    let json =
        serde_json::to_string_pretty(value).map_err(|source| RenderError::SerializationError {
            what: path_str.clone(),
            source,
        })?;
    write_file(path, json).map_err(|source| RenderError::WriteError {
        path: path_str,
        source,
    })
}

/// writes the overview descriptor and one descriptor per pair, returning
/// the number of files written
pub fn write_figures(ctx: &RenderContext, output_directory: &Path) -> Result<usize, RenderError> {
    let overview_path = output_directory
        .join(STATIC_DIRECTORY)
        .join(OVERVIEW_FILENAME);
    write_json(&overview_path, &overview_figure(ctx)?)?;
    log::info!("wrote {}", overview_path.to_string_lossy());

    let pairs = ctx.pairs();
    let pair_iter = kdam::tqdm!(
        pairs.iter(),
        total = pairs.len(),
        desc = "writing figure descriptors"
    );
    for (_, _, pair) in pair_iter {
        write_json(&output_directory.join(detail_path(pair)), &grid_figure(ctx, pair)?)?;
    }
    eprintln!();
    log::info!(
        "wrote {} figure descriptors to {}",
        pairs.len(),
        output_directory
            .join(STATIC_DIRECTORY)
            .join(DETAILS_DIRECTORY)
            .to_string_lossy()
    );
    Ok(pairs.len() + 1)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{DashboardConfig, InitialSelection};
    use crate::render::test_fixture::{sample_coordinates, sample_table};

    #[test]
    fn test_grid_figure() {
        let table = sample_table();
        let config = DashboardConfig {
            initial_selection: Some(InitialSelection {
                origin: Some(String::from("Chicago")),
                destination: Some(String::from("Detroit")),
                coverage: Some(String::from("0.7")),
                uncertainty: Some(String::from("1.0")),
            }),
            ..Default::default()
        };
        let coordinates = sample_coordinates();
        let ctx = RenderContext::new(&table, &config, &coordinates).expect("should build context");

        let figure =
            grid_figure(&ctx, &OdPair::new("Chicago", "Detroit")).expect("should build figure");
        assert_eq!(figure.title, "Chicago → Detroit (Travel Time Details)");
        assert_eq!(figure.cells.len(), 49);
        assert_eq!(figure.cells.iter().filter(|c| c.alpha == 1.0).count(), 1);
        let lit = figure
            .cells
            .iter()
            .find(|c| c.alpha == 1.0)
            .expect("one lit cell");
        assert_eq!((lit.coverage, lit.uncertainty), ("0.7", "1.0"));
        let summary = figure.summary.expect("should have a summary");
        assert_eq!(summary.max, 48.0);

        let empty =
            grid_figure(&ctx, &OdPair::new("Detroit", "Detroit")).expect("should build figure");
        assert_eq!(empty.title, "Detroit → Detroit (No Data)");
        assert!(empty.cells.is_empty());
        assert!(empty.summary.is_none());
    }

    #[test]
    fn test_overview_figure() {
        let table = sample_table();
        let config = DashboardConfig::default();
        let coordinates = sample_coordinates();
        let ctx = RenderContext::new(&table, &config, &coordinates).expect("should build context");
        let overview = overview_figure(&ctx).expect("should build overview");
        assert_eq!(overview.cells.len(), 4);
        let first = &overview.cells[0];
        assert_eq!((first.origin.as_str(), first.x, first.y), ("Chicago", 0, 1));
        assert_eq!(first.mean, Some(1.5));
        let missing = &overview.cells[3];
        assert_eq!(missing.mean, None);
        assert_eq!(missing.color, MISSING_COLOR);
        assert!(overview.cells.iter().all(|c| c.alpha == 1.0));
    }

    #[test]
    fn test_write_figures() {
        let table = sample_table();
        let config = DashboardConfig::default();
        let coordinates = sample_coordinates();
        let ctx = RenderContext::new(&table, &config, &coordinates).expect("should build context");
        let dir = tempfile::tempdir().expect("should create temp dir");
        let written = write_figures(&ctx, dir.path()).expect("should write figures");
        assert_eq!(written, 5);
        let overview = dir.path().join("static").join("main-grid.json");
        assert!(overview.is_file());
        let detail = dir
            .path()
            .join("static")
            .join("details")
            .join("Detroit_Chicago.json");
        let json: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(detail).expect("should read descriptor"),
        )
        .expect("descriptor should be json");
        assert_eq!(json["origin"], "Detroit");
        assert_eq!(json["cells"].as_array().map(|c| c.len()), Some(49));
        assert!(json["cells"]
            .as_array()
            .expect("cells should be an array")
            .iter()
            .any(|c| c["value"].is_null()));
    }

    #[test]
    fn test_detail_path_stays_in_details() {
        let path = detail_path(&OdPair::new("../../escape", "B"));
        assert_eq!(path.parent(), Some(Path::new("static").join("details").as_path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(".._.._escape_B.json")
        );
    }
}
