mod artifact_index;
mod colorbar;
mod dashboard_page;
mod escape;
mod grid_table;
mod heatmap_page;
mod html_document;
mod render_context;
mod render_error;
mod script;
mod tile;

#[cfg(test)]
mod test_fixture;

pub mod figure;

pub use artifact_index::{ArtifactHandle, ArtifactIndex};
pub use dashboard_page::render_dashboard_page;
pub use escape::{escape_html, json_for_script};
pub use heatmap_page::render_heatmap_page;
pub use html_document::HtmlDocument;
pub use render_context::RenderContext;
pub use render_error::RenderError;
pub use tile::render_grid_svg;

/// file name of the interactive dashboard
pub const DASHBOARD_FILENAME: &str = "index.html";
/// file name of the static heatmap page
pub const HEATMAP_FILENAME: &str = "heatmap.html";
