use super::artifact_index::ArtifactIndex;
use super::colorbar::COLORBAR_CSS;
use super::grid_table::{overview_grid_html, TileHighlight, GRID_CSS};
use super::html_document::HtmlDocument;
use super::{RenderContext, RenderError};

/// a static page of every pair's grid under destination headers and
/// origin labels, with the configured selection drawn in
pub fn render_heatmap_page(
    ctx: &RenderContext,
    index: &ArtifactIndex,
) -> Result<String, RenderError> {
    let mut doc = HtmlDocument::new(&ctx.config.title);
    doc.add_style(GRID_CSS);
    doc.add_style(COLORBAR_CSS);
    doc.add_body(overview_grid_html(ctx, index, TileHighlight::Baked)?);
    doc.set_footer(&format!("Generated {}", ctx.generated_at));
    Ok(doc.render()?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::render::test_fixture::{sample_coordinates, sample_table};

    #[test]
    fn test_heatmap_page() {
        let table = sample_table();
        let config = DashboardConfig {
            title: String::from("Heatmaps"),
            ..Default::default()
        };
        let coordinates = sample_coordinates();
        let ctx = RenderContext::new(&table, &config, &coordinates).expect("should build context");
        let index = ArtifactIndex::build(&ctx).expect("should build index");
        let html = render_heatmap_page(&ctx, &index).expect("should render");

        assert!(html.contains("<title>Heatmaps</title>"));
        assert_eq!(html.matches(r#"class="destination-header""#).count(), 2);
        assert_eq!(html.matches(r#"class="origin-label""#).count(), 2);
        assert_eq!(html.matches("<svg").count(), 3);
        assert_eq!(html.matches(r#"class="tile-empty""#).count(), 1);
        assert!(html.contains("Travel Time (minutes)"));
        assert!(!html.contains("<select"));
        assert!(!html.contains("<script"));
    }
}
