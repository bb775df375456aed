use super::artifact_index::ArtifactIndex;
use super::colorbar::COLORBAR_CSS;
use super::grid_table::{overview_grid_html, x_axis_html, y_axis_html, TileHighlight, GRID_CSS};
use super::html_document::HtmlDocument;
use super::script::{dashboard_script, ScriptData};
use super::tile::{cell_overlay_html, render_grid_svg};
use super::{escape_html, RenderContext, RenderError};
use kdam::tqdm;
use std::fmt::Write;
use ttviz_core::model::{axis_level, OdPair};

const GOOGLE_MAPS_URL: &str = "https://maps.googleapis.com/maps/api/js";

const DASHBOARD_CSS: &str = r#"
.controls { text-align: center; margin-bottom: 20px; font-size: 18px; padding: 15px; }
.controls select { font-size: 16px; padding: 8px 12px; margin: 0 10px; min-width: 150px; }
.top-panel { display: flex; justify-content: space-between; align-items: flex-start;
  margin-bottom: 20px; gap: 20px; }
#google-map, #location-table { width: 800px; height: 600px; border: 1px solid #ccc; flex-shrink: 0; }
#location-table { overflow-y: auto; }
#location-table table { width: 100%; border-collapse: collapse; }
#location-table td, #location-table th { padding: 6px 10px; border-bottom: 1px solid #eee; text-align: left; }
.location-row.active { background: #fff3cd; font-weight: bold; }
#enlarged-container { min-width: 450px; border: 1px solid #ccc; flex-shrink: 0; padding: 10px; }
.readout { font-weight: bold; white-space: nowrap; text-align: right; margin-bottom: 6px; }
#min-time { color: green; }
#max-time { color: red; }
.enlarged h2 { font-size: 14pt; text-align: center; }
.enlarged-body { display: flex; }
.enlarged-placeholder { display: flex; align-items: center; justify-content: center;
  height: 450px; font-size: 14pt; text-align: center; }
#heatmap-container { width: 95vw; max-width: 1400px; margin: 0 auto; display: flex; justify-content: center; }
"#;

/// the interactive dashboard: selectors, a map or location table, the
/// enlarged grid of the selected pair and the overview of every pair
pub fn render_dashboard_page(
    ctx: &RenderContext,
    index: &ArtifactIndex,
) -> Result<String, RenderError> {
    let mut doc = HtmlDocument::new(&ctx.config.title);
    doc.add_style(GRID_CSS);
    doc.add_style(COLORBAR_CSS);
    doc.add_style(DASHBOARD_CSS);

    doc.add_body(controls_html(index)?);
    let mut top_panel = String::from(r#"<div class="top-panel">"#);
    top_panel.push_str(&map_panel_html(ctx)?);
    top_panel.push_str(&enlarged_container_html(ctx, index)?);
    top_panel.push_str("</div>");
    doc.add_body(top_panel);
    doc.add_body(format!(
        r#"<div id="heatmap-container">{}</div>"#,
        overview_grid_html(ctx, index, TileHighlight::Dynamic)?
    ));
    doc.set_footer(&format!("Generated {}", ctx.generated_at));

    if let Some(key) = &ctx.config.map.google_maps_api_key {
        doc.add_external_script(&format!("{GOOGLE_MAPS_URL}?key={key}"));
    }
    doc.add_inline_script(dashboard_script(&ScriptData::new(ctx, index))?);
    Ok(doc.render()?)
}

fn select_html(
    id: &str,
    label: &str,
    placeholder: &str,
    options: &[(usize, String)],
) -> Result<String, RenderError> {
    let mut html = String::new();
    write!(
        html,
        r#"{label}: <select id="{id}"><option value="">-- {placeholder} --</option>"#
    )?;
    for (value, text) in options.iter() {
        write!(
            html,
            r#"<option value="{value}">{}</option>"#,
            escape_html(text)
        )?;
    }
    html.push_str("</select>");
    Ok(html)
}

/// selector option values are positions: origin and destination indices,
/// coverage as a grid column and uncertainty as a grid row
fn controls_html(index: &ArtifactIndex) -> Result<String, RenderError> {
    let enumerate = |names: &[String]| {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| (i, n.clone()))
            .collect::<Vec<_>>()
    };
    let coverage = axis_level::LEVEL_OPTIONS
        .iter()
        .filter_map(|l| axis_level::coverage_column(l).map(|col| (col, l.to_string())))
        .collect::<Vec<_>>();
    let uncertainty = axis_level::LEVEL_OPTIONS
        .iter()
        .filter_map(|l| axis_level::uncertainty_row(l).map(|row| (row, l.to_string())))
        .collect::<Vec<_>>();
    Ok(format!(
        r#"<div class="controls">{} {} {} {}</div>"#,
        select_html("origin", "Origin", "Select Origin", &enumerate(&index.origins))?,
        select_html(
            "destination",
            "Destination",
            "Select Destination",
            &enumerate(&index.destinations)
        )?,
        select_html("coverage", "Coverage Level", "Select Coverage Level", &coverage)?,
        select_html(
            "uncertainty",
            "Uncertainty Level",
            "Select Uncertainty Level",
            &uncertainty
        )?,
    ))
}

/// the map widget when a key is configured, otherwise a table of the
/// geocoded locations
fn map_panel_html(ctx: &RenderContext) -> Result<String, RenderError> {
    if ctx.config.map.google_maps_api_key.is_some() {
        return Ok(String::from(r#"<div id="google-map"></div>"#));
    }
    let mut html = String::from(
        r#"<div id="location-table"><table><thead><tr><th>Location</th><th>Latitude</th><th>Longitude</th></tr></thead><tbody>"#,
    );
    for (name, coordinate) in ctx.coordinates.iter() {
        let (lat, lon) = match coordinate {
            Some(c) => (format!("{:.4}", c.lat), format!("{:.4}", c.lon)),
            None => (String::from("--"), String::from("--")),
        };
        write!(
            html,
            r#"<tr class="location-row" data-location="{name}"><td>{name}</td><td>{lat}</td><td>{lon}</td></tr>"#,
            name = escape_html(name),
        )?;
    }
    html.push_str("</tbody></table></div>");
    Ok(html)
}

fn enlarged_container_html(
    ctx: &RenderContext,
    index: &ArtifactIndex,
) -> Result<String, RenderError> {
    let mut html = String::from(r#"<div id="enlarged-container">"#);
    html.push_str(r#"<div class="readout">Possible Range: <span id="min-time">--</span> to <span id="max-time">--</span></div>"#);
    html.push_str(r#"<div class="readout">Travel Time Prediction: <span id="prediction">--</span></div>"#);
    html.push_str(r#"<div id="enlarged-empty" class="enlarged"><h2>Select Origin &amp; Destination</h2><div class="enlarged-placeholder">Select origin and destination<br>to view enlarged grid</div></div>"#);

    let handles = index.iter().collect::<Vec<_>>();
    let enlarged_iter = tqdm!(
        handles.into_iter(),
        total = index.origins.len() * index.destinations.len(),
        desc = "rendering enlarged grids"
    );
    for (_, _, handle) in enlarged_iter {
        let pair = OdPair::new(&handle.origin, &handle.destination);
        html.push_str(&enlarged_grid_html(ctx, &pair, &handle.enlarged_id)?);
    }
    eprintln!();
    html.push_str("</div>");
    Ok(html)
}

/// one pair's enlarged grid, hidden until selected. the svg is drawn at
/// full alpha and the overlay carries the highlight.
pub fn enlarged_grid_html(
    ctx: &RenderContext,
    pair: &OdPair,
    element_id: &str,
) -> Result<String, RenderError> {
    let size = ctx.config.tiles.enlarged_px;
    let mut html = String::new();
    let (Some(points), Some(highlighted)) =
        (ctx.grid_for(pair)?, ctx.highlighted_grid_for(pair)?)
    else {
        write!(
            html,
            r#"<div id="{element_id}" class="enlarged" style="display: none;"><h2>{} (No Data)</h2><div class="enlarged-placeholder">No Data</div></div>"#,
            escape_html(&pair.to_string())
        )?;
        return Ok(html);
    };
    write!(
        html,
        r#"<div id="{element_id}" class="enlarged" style="display: none;"><h2>{}</h2><div class="enlarged-body">"#,
        escape_html(&pair.to_string())
    )?;
    html.push_str(&y_axis_html(size)?);
    html.push_str("<div>");
    write!(
        html,
        r#"<div class="grid-frame" style="width: {size}px; height: {size}px;">"#
    )?;
    html.push_str(&render_grid_svg(pair, &points, &ctx.scale, size, true)?);
    html.push_str(&cell_overlay_html(pair, &highlighted, false)?);
    html.push_str("</div>");
    html.push_str(&x_axis_html(size));
    html.push_str("</div></div></div>");
    Ok(html)
}
