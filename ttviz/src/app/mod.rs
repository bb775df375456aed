mod dashboard_cli;
mod dashboard_error;
mod run;

pub use dashboard_cli::{TtvizCliArguments, TtvizOperation};
pub use dashboard_error::DashboardError;
pub use run::{run_dashboard, run_figures, run_geocode, run_heatmap, DashboardInputs};
