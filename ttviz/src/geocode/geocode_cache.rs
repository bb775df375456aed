use super::{Coordinate, GeocodeError, Geocoder};
use crate::util::fs::create_dirs;
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// coordinates of every dashboard location. a location the geocoder could
/// not resolve is kept with no coordinate so it is not looked up again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeCache {
    entries: BTreeMap<String, Option<Coordinate>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheRow {
    location: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl GeocodeCache {
    pub fn get(&self, location: &str) -> Option<Coordinate> {
        self.entries.get(location).copied().flatten()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.entries.contains_key(location)
    }

    pub fn insert(&mut self, location: &str, coordinate: Option<Coordinate>) {
        self.entries.insert(location.to_string(), coordinate);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// entries ordered by location name
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<Coordinate>)> {
        self.entries.iter()
    }

    /// reads a `location,lat,lon` file. rows with an empty or partial
    /// coordinate are locations without coordinates.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, GeocodeError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let read_error = |source| GeocodeError::CacheReadError {
            path: path_str.clone(),
            source,
        };
        let mut reader = csv::Reader::from_path(path.as_ref()).map_err(read_error)?;
        let mut cache = GeocodeCache::default();
        for row in reader.deserialize::<CacheRow>() {
            let row = row.map_err(read_error)?;
            let coordinate = match (row.lat, row.lon) {
                (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
                _ => None,
            };
            cache.insert(row.location.trim(), coordinate);
        }
        log::info!("read {} cached locations from {path_str}", cache.len());
        Ok(cache)
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), GeocodeError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dirs(parent).map_err(|source| GeocodeError::CacheDirectoryError {
                path: path_str.clone(),
                source,
            })?;
        }
        let write_error = |source| GeocodeError::CacheWriteError {
            path: path_str.clone(),
            source,
        };
        let mut writer = csv::Writer::from_path(path).map_err(write_error)?;
        for (location, coordinate) in self.entries.iter() {
            let row = CacheRow {
                location: location.clone(),
                lat: coordinate.map(|c| c.lat),
                lon: coordinate.map(|c| c.lon),
            };
            writer.serialize(row).map_err(write_error)?;
        }
        writer
            .flush()
            .map_err(|e| write_error(csv::Error::from(e)))?;
        log::info!("wrote {} locations to {path_str}", self.len());
        Ok(())
    }

    /// geocodes each location in turn, waiting `delay` between requests.
    /// failed lookups are logged and stored without coordinates.
    pub fn build(locations: &[String], geocoder: &dyn Geocoder, delay: Duration) -> Self {
        let mut cache = GeocodeCache::default();
        let location_iter = tqdm!(
            locations.iter(),
            total = locations.len(),
            desc = "geocoding locations"
        );
        let mut requested = false;
        for location in location_iter {
            if cache.contains(location) {
                continue;
            }
            if requested && !delay.is_zero() {
                std::thread::sleep(delay);
            }
            requested = true;
            let coordinate = match geocoder.geocode(location) {
                Ok(Some(coordinate)) => {
                    log::debug!("geocoded '{location}' to {coordinate}");
                    Some(coordinate)
                }
                Ok(None) => {
                    log::warn!("no geocoding result for '{location}'");
                    None
                }
                Err(e) => {
                    log::warn!("{e}");
                    None
                }
            };
            cache.insert(location, coordinate);
        }
        eprintln!();
        cache
    }

    /// geocodes the locations that have no entry yet, returning how many
    /// were looked up
    pub fn fill_missing(
        &mut self,
        locations: &[String],
        geocoder: &dyn Geocoder,
        delay: Duration,
    ) -> usize {
        let missing = locations
            .iter()
            .filter(|l| !self.contains(l))
            .cloned()
            .collect::<Vec<_>>();
        if missing.is_empty() {
            return 0;
        }
        let found = Self::build(&missing, geocoder, delay);
        self.entries.extend(found.entries);
        missing.len()
    }

    /// uses the cache file when it exists. otherwise geocodes the locations
    /// and writes the file, or returns an empty cache when no geocoder is
    /// available.
    pub fn load_or_build<P: AsRef<Path>>(
        path: P,
        locations: &[String],
        geocoder: Option<&dyn Geocoder>,
        delay: Duration,
    ) -> Result<Self, GeocodeError> {
        let path = path.as_ref();
        if path.is_file() {
            let cache = Self::read(path)?;
            let uncached = locations.iter().filter(|l| !cache.contains(l)).count();
            if uncached > 0 {
                log::warn!(
                    "{uncached} locations are missing from {}, they will have no coordinates",
                    path.to_string_lossy()
                );
            }
            return Ok(cache);
        }
        match geocoder {
            Some(g) => {
                log::info!(
                    "no geocode cache at {}, geocoding {} locations",
                    path.to_string_lossy(),
                    locations.len()
                );
                let cache = Self::build(locations, g, delay);
                cache.write(path)?;
                Ok(cache)
            }
            None => {
                log::warn!(
                    "no geocode cache at {} and geocoding is disabled",
                    path.to_string_lossy()
                );
                Ok(GeocodeCache::default())
            }
        }
    }
}
