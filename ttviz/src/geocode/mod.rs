mod coordinate;
mod geocode_cache;
mod geocode_error;
mod geocoder;
mod nominatim_geocoder;

pub use coordinate::Coordinate;
pub use geocode_cache::GeocodeCache;
pub use geocode_error::GeocodeError;
pub use geocoder::Geocoder;
pub use nominatim_geocoder::{parse_search_response, NominatimGeocoder};
