use super::{escape_html, RenderError};
use plotters::prelude::*;
use std::fmt::Write;
use ttviz_core::color::{ColorScale, Rgb, MISSING_COLOR};
use ttviz_core::grid::display_minutes;
use ttviz_core::model::{axis_level, GridPoint, OdPair, FULL_ALPHA, GRID_SIZE};

fn rgb_color(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// draws a 7x7 grid as an svg document of `size_px` square. each cell is
/// filled with its bucket color at the point's highlight alpha, missing
/// cells in a neutral grey. `outline` separates cells with white lines.
pub fn render_grid_svg(
    pair: &OdPair,
    points: &[GridPoint],
    scale: &ColorScale,
    size_px: u32,
    outline: bool,
) -> Result<String, RenderError> {
    let plot_error = |msg: String| RenderError::PlotError {
        pair: pair.to_string(),
        msg,
    };
    let extent = GRID_SIZE as f64;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (size_px, size_px)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| plot_error(e.to_string()))?;
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(0f64..extent, 0f64..extent)
            .map_err(|e| plot_error(e.to_string()))?;

        chart
            .draw_series(points.iter().map(|p| {
                let color = if p.is_missing() {
                    MISSING_COLOR
                } else {
                    scale.color_for(p.value)
                };
                let (x, y) = (p.col as f64, p.row as f64);
                Rectangle::new(
                    [(x, y), (x + 1.0, y + 1.0)],
                    rgb_color(color).mix(p.highlight_alpha).filled(),
                )
            }))
            .map_err(|e| plot_error(e.to_string()))?;

        if outline {
            chart
                .draw_series(points.iter().map(|p| {
                    let (x, y) = (p.col as f64, p.row as f64);
                    Rectangle::new([(x, y), (x + 1.0, y + 1.0)], WHITE.stroke_width(1))
                }))
                .map_err(|e| plot_error(e.to_string()))?;
        }
        root.present().map_err(|e| plot_error(e.to_string()))?;
    }
    Ok(svg)
}

/// tooltip text of one cell
pub fn cell_tooltip(pair: Option<&OdPair>, point: &GridPoint) -> String {
    let mut lines = vec![];
    if let Some(pair) = pair {
        lines.push(format!("Origin: {}", pair.origin));
        lines.push(format!("Destination: {}", pair.destination));
    }
    lines.push(format!(
        "Coverage Level: {}",
        axis_level::coverage_label(point.col).unwrap_or("--")
    ));
    lines.push(format!(
        "Uncertainty Level: {}",
        axis_level::uncertainty_label(point.row).unwrap_or("--")
    ));
    match display_minutes(point.value) {
        Some(minutes) => lines.push(format!("Travel Time: {minutes} min")),
        None => lines.push(String::from("Travel Time: no data")),
    }
    lines.join("\n")
}

/// a transparent 7x7 layer laid over a grid svg. each cell carries its
/// grid coordinate and a tooltip. cells below full highlight alpha start
/// out dimmed; the dashboard script toggles the same class.
pub fn cell_overlay_html(
    pair: &OdPair,
    points: &[GridPoint],
    include_pair_in_tooltip: bool,
) -> Result<String, RenderError> {
    let mut html = String::new();
    html.push_str(r#"<div class="cell-overlay">"#);
    for point in points.iter() {
        let tooltip = cell_tooltip(include_pair_in_tooltip.then_some(pair), point);
        write!(
            html,
            r#"<div class="{class}" data-col="{col}" data-row="{row}" style="grid-column: {grid_col}; grid-row: {grid_row};" title="{title}"></div>"#,
            class = if point.highlight_alpha < FULL_ALPHA {
                "cell-mask dimmed"
            } else {
                "cell-mask"
            },
            col = point.col,
            row = point.row,
            grid_col = point.col + 1,
            grid_row = GRID_SIZE - point.row,
            title = escape_html(&tooltip),
        )?;
    }
    html.push_str("</div>");
    Ok(html)
}

#[cfg(test)]
mod test {
    use super::*;
    use ttviz_core::color::{build_color_scale, Palette};
    use ttviz_core::grid::reshape_row_to_grid;
    use ttviz_core::model::GridOrientation;

    fn points() -> Vec<GridPoint> {
        let mut values = (0..49).map(|v| v as f64).collect::<Vec<_>>();
        values[3] = f64::NAN;
        reshape_row_to_grid(&values, GridOrientation::ColumnMajorFlipX)
            .expect("49 values should reshape")
    }

    #[test]
    fn test_render_grid_svg() {
        let pair = OdPair::new("Chicago", "Detroit");
        let scale =
            build_color_scale(&[0.0, 48.0], 24, Palette::Spectral).expect("should build scale");
        let svg = render_grid_svg(&pair, &points(), &scale, 80, false).expect("should render");
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        let lowest = scale.color_for(0.0).to_hex().to_uppercase();
        let highest = scale.color_for(48.0).to_hex().to_uppercase();
        let upper = svg.to_uppercase();
        assert!(upper.contains(&lowest), "svg should use {lowest}");
        assert!(upper.contains(&highest), "svg should use {highest}");
        assert!(upper.contains(&MISSING_COLOR.to_hex().to_uppercase()));
    }

    #[test]
    fn test_overlay_cells() {
        let pair = OdPair::new("Thunder Bay", "Duluth");
        let html = cell_overlay_html(&pair, &points(), true).expect("should render");
        assert_eq!(html.matches("class=\"cell-mask\"").count(), 49);
        assert!(html.contains("Origin: Thunder Bay"));
        assert!(html.contains("Travel Time: no data"));
        // source value 0 sits top left under the default orientation
        assert!(html.contains(r#"data-col="0" data-row="6" style="grid-column: 1; grid-row: 1;""#));
        assert!(!html.contains("dimmed"));
    }

    #[test]
    fn test_overlay_marks_dimmed_cells() {
        let pair = OdPair::new("Toronto", "Montreal");
        let mut points = points();
        let selection = ttviz_core::grid::Selection::from_labels(
            Some("Toronto"),
            Some("Montreal"),
            Some("0.7"),
            None,
        );
        ttviz_core::grid::apply_highlight(&mut points, &pair, &selection);
        let html = cell_overlay_html(&pair, &points, false).expect("should render");
        assert_eq!(html.matches("class=\"cell-mask dimmed\"").count(), 42);
        assert_eq!(html.matches("class=\"cell-mask\"").count(), 7);
        assert!(!html.contains("Origin:"));
    }

    #[test]
    fn test_cell_tooltip_rounds_up() {
        let point = GridPoint::new(2, 0, 41.2);
        let tooltip = cell_tooltip(None, &point);
        assert_eq!(
            tooltip,
            "Coverage Level: 0.8\nUncertainty Level: 1.0\nTravel Time: 42 min"
        );
    }
}
