use super::artifact_index::ArtifactIndex;
use super::colorbar::colorbar_html;
use super::tile::{cell_overlay_html, render_grid_svg};
use super::{escape_html, RenderContext, RenderError};
use kdam::tqdm;
use std::fmt::Write;
use ttviz_core::model::axis_level;

const HEADER_HEIGHT_PX: u32 = 40;

/// how overview tiles show the current selection. either way a tile is
/// dimmed through its container opacity when another pair is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileHighlight {
    /// the selected pair's cell alphas are also drawn into its svg
    Baked,
    /// tiles are drawn at full alpha, the dashboard script updates opacity
    Dynamic,
}

/// the origins by destinations table of tiles with destination headers,
/// rotated origin labels and a colorbar spanning the table
pub fn overview_grid_html(
    ctx: &RenderContext,
    index: &ArtifactIndex,
    highlight: TileHighlight,
) -> Result<String, RenderError> {
    let tile_px = ctx.config.tiles.thumbnail_px;
    let mut html = String::new();
    html.push_str(r#"<div class="overview"><table class="overview-grid"><thead><tr><th class="corner"></th>"#);
    for destination in index.destinations.iter() {
        write!(
            html,
            r#"<th class="destination-header" style="width: {tile_px}px; height: {HEADER_HEIGHT_PX}px;">{}</th>"#,
            escape_html(destination)
        )?;
    }
    html.push_str("</tr></thead><tbody>");

    let handles = index.iter().collect::<Vec<_>>();
    let tile_iter = tqdm!(
        handles.into_iter(),
        total = index.origins.len() * index.destinations.len(),
        desc = "rendering overview tiles"
    );
    for (i, j, handle) in tile_iter {
        if j == 0 {
            write!(
                html,
                r#"<tr><th class="origin-label" style="height: {tile_px}px;"><span>{}</span></th>"#,
                escape_html(&handle.origin)
            )?;
        }
        let pair = ttviz_core::model::OdPair::new(&handle.origin, &handle.destination);
        let opacity = ctx.selection.overview_alpha(&pair);
        write!(
            html,
            r#"<td><div id="{id}" class="tile" style="width: {tile_px}px; height: {tile_px}px; opacity: {opacity};" title="{title}">"#,
            id = handle.tile_id,
            title = escape_html(&pair.to_string()),
        )?;
        match ctx.grid_for(&pair)? {
            Some(points) => {
                let drawn = match highlight {
                    TileHighlight::Baked => ctx.highlighted_grid_for(&pair)?.unwrap_or_default(),
                    TileHighlight::Dynamic => points.clone(),
                };
                html.push_str(r#"<div class="grid-frame">"#);
                html.push_str(&render_grid_svg(&pair, &drawn, &ctx.scale, tile_px, false)?);
                html.push_str(&cell_overlay_html(&pair, &points, true)?);
                html.push_str("</div>");
            }
            None => html.push_str(r#"<div class="tile-empty"></div>"#),
        }
        html.push_str("</div></td>");
        if j + 1 == index.destinations.len() {
            html.push_str("</tr>");
        }
        log::trace!("rendered tile {i},{j} for {pair}");
    }
    eprintln!();
    html.push_str("</tbody></table>");

    let table_height = HEADER_HEIGHT_PX + tile_px * index.origins.len() as u32;
    html.push_str(&colorbar_html(&ctx.scale, table_height)?);
    html.push_str("</div>");
    Ok(html)
}

/// uncertainty level labels up the side of an enlarged grid, highest
/// row on top
pub fn y_axis_html(size_px: u32) -> Result<String, RenderError> {
    let mut html = String::new();
    write!(
        html,
        r#"<div class="y-axis" style="height: {size_px}px;"><span class="axis-title">Uncertainty Level</span><div class="y-ticks">"#
    )?;
    for row in (0..axis_level::UNCERTAINTY_LEVELS.len()).rev() {
        write!(
            html,
            "<span>{}</span>",
            axis_level::uncertainty_label(row).unwrap_or_default()
        )?;
    }
    html.push_str("</div></div>");
    Ok(html)
}

/// coverage level labels along the bottom of an enlarged grid
pub fn x_axis_html(size_px: u32) -> String {
    let ticks = axis_level::COVERAGE_LEVELS
        .iter()
        .map(|l| format!("<span>{l}</span>"))
        .collect::<String>();
    format!(
        r#"<div class="x-axis" style="width: {size_px}px;"><div class="x-ticks">{ticks}</div><span class="axis-title">Coverage Level</span></div>"#
    )
}

pub const GRID_CSS: &str = r#"
.overview { display: flex; justify-content: center; align-items: flex-start; }
.overview-grid { border-collapse: collapse; }
.overview-grid td, .overview-grid th { padding: 0; }
.destination-header { font-size: 10pt; font-weight: bold; text-align: center; vertical-align: middle; }
.origin-label { width: 40px; font-size: 10pt; font-weight: bold; }
.origin-label span { display: inline-block; transform: rotate(-90deg); white-space: nowrap; }
.tile { position: relative; }
.tile-empty { width: 100%; height: 100%; }
.grid-frame { position: relative; line-height: 0; }
.grid-frame svg { display: block; }
.cell-overlay { position: absolute; inset: 0; display: grid;
  grid-template-columns: repeat(7, 1fr); grid-template-rows: repeat(7, 1fr); }
.cell-mask.dimmed { background: rgba(255, 255, 255, 0.9); }
.y-axis { display: flex; align-items: center; }
.y-axis .axis-title { writing-mode: vertical-rl; transform: rotate(180deg); font-size: 12pt; }
.y-ticks { display: flex; flex-direction: column; justify-content: space-around; height: 100%;
  font-size: 10pt; margin: 0 6px; }
.x-axis { text-align: center; }
.x-ticks { display: flex; justify-content: space-around; font-size: 10pt; margin-top: 4px; }
.x-axis .axis-title { font-size: 12pt; }
"#;
