use super::DashboardError;
use crate::config::DashboardConfig;
use crate::geocode::{GeocodeCache, Geocoder, NominatimGeocoder};
use crate::render::{
    figure::write_figures, render_dashboard_page, render_heatmap_page, ArtifactIndex,
    RenderContext, DASHBOARD_FILENAME, HEATMAP_FILENAME,
};
use crate::util::fs::{create_dirs, write_file};
use std::path::Path;
use std::time::Duration;
use ttviz_core::table::TravelTimeTable;

/// the loaded table and configuration of one run, plus the coordinates of
/// its locations when the run needs them
pub struct DashboardInputs {
    pub table: TravelTimeTable,
    pub config: DashboardConfig,
    pub coordinates: GeocodeCache,
}

impl DashboardInputs {
    pub fn load(input_file: &Path, config_file: Option<&str>) -> Result<Self, DashboardError> {
        let config = DashboardConfig::from_optional_file(config_file)?;
        let table = TravelTimeTable::from_csv(input_file)?;
        Ok(Self {
            table,
            config,
            coordinates: GeocodeCache::default(),
        })
    }

    /// reads the geocode cache, geocoding into it first when it does not
    /// exist and geocoding is enabled
    pub fn with_coordinates(mut self) -> Result<Self, DashboardError> {
        let geocode = &self.config.geocode;
        let geocoder = if geocode.enabled {
            Some(NominatimGeocoder::new(geocode)?)
        } else {
            None
        };
        self.coordinates = GeocodeCache::load_or_build(
            &geocode.cache_file,
            &self.table.locations(),
            geocoder.as_ref().map(|g| g as &dyn Geocoder),
            Duration::from_millis(geocode.delay_ms),
        )?;
        Ok(self)
    }

    pub fn context(&self) -> Result<RenderContext<'_>, DashboardError> {
        Ok(RenderContext::new(
            &self.table,
            &self.config,
            &self.coordinates,
        )?)
    }
}

fn write_page(output_directory: &Path, filename: &str, html: &str) -> Result<(), DashboardError> {
    let path = output_directory.join(filename);
    write_file(&path, html).map_err(|source| DashboardError::WriteError {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    log::info!("wrote {}", path.to_string_lossy());
    Ok(())
}

fn prepare_output(output_directory: &Path) -> Result<(), DashboardError> {
    create_dirs(output_directory).map_err(|source| DashboardError::WriteError {
        path: output_directory.to_string_lossy().to_string(),
        source,
    })
}

/// builds index.html and the figure descriptors
pub fn run_dashboard(
    input_file: &Path,
    output_directory: &Path,
    config_file: Option<&str>,
) -> Result<(), DashboardError> {
    log::debug!(
        "run_dashboard with input_file={input_file:?}, output_directory={output_directory:?}, config_file={config_file:?}"
    );
    let inputs = DashboardInputs::load(input_file, config_file)?.with_coordinates()?;
    let ctx = inputs.context()?;
    prepare_output(output_directory)?;
    write_figures(&ctx, output_directory)?;
    let index = ArtifactIndex::build(&ctx)?;
    let html = render_dashboard_page(&ctx, &index)?;
    write_page(output_directory, DASHBOARD_FILENAME, &html)
}

/// builds heatmap.html
pub fn run_heatmap(
    input_file: &Path,
    output_directory: &Path,
    config_file: Option<&str>,
) -> Result<(), DashboardError> {
    log::debug!(
        "run_heatmap with input_file={input_file:?}, output_directory={output_directory:?}, config_file={config_file:?}"
    );
    let inputs = DashboardInputs::load(input_file, config_file)?;
    let ctx = inputs.context()?;
    prepare_output(output_directory)?;
    let index = ArtifactIndex::build(&ctx)?;
    let html = render_heatmap_page(&ctx, &index)?;
    write_page(output_directory, HEATMAP_FILENAME, &html)
}

/// writes the figure descriptors only
pub fn run_figures(
    input_file: &Path,
    output_directory: &Path,
    config_file: Option<&str>,
) -> Result<(), DashboardError> {
    log::debug!(
        "run_figures with input_file={input_file:?}, output_directory={output_directory:?}, config_file={config_file:?}"
    );
    let inputs = DashboardInputs::load(input_file, config_file)?;
    let ctx = inputs.context()?;
    prepare_output(output_directory)?;
    let written = write_figures(&ctx, output_directory)?;
    log::info!("wrote {written} figure descriptors");
    Ok(())
}

/// geocodes every location of the table missing from the cache file and
/// rewrites the file. runs even when geocoding is disabled for dashboards.
pub fn run_geocode(input_file: &Path, config_file: Option<&str>) -> Result<(), DashboardError> {
    log::debug!("run_geocode with input_file={input_file:?}, config_file={config_file:?}");
    let inputs = DashboardInputs::load(input_file, config_file)?;
    let geocode = &inputs.config.geocode;
    let cache_path = Path::new(&geocode.cache_file);
    let mut cache = if cache_path.is_file() {
        GeocodeCache::read(cache_path)?
    } else {
        GeocodeCache::default()
    };
    let geocoder = NominatimGeocoder::new(geocode)?;
    let added = cache.fill_missing(
        &inputs.table.locations(),
        &geocoder,
        Duration::from_millis(geocode.delay_ms),
    );
    if added == 0 {
        log::info!("every location is already in {}", geocode.cache_file);
        return Ok(());
    }
    cache.write(cache_path)?;
    let unresolved = cache.iter().filter(|(_, c)| c.is_none()).count();
    log::info!(
        "geocoded {added} locations, {unresolved} of {} have no coordinates",
        cache.len()
    );
    Ok(())
}
