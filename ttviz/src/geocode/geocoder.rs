use super::{Coordinate, GeocodeError};

/// resolves a place name to a coordinate
pub trait Geocoder {
    /// `Ok(None)` when the service knows nothing about the location
    fn geocode(&self, location: &str) -> Result<Option<Coordinate>, GeocodeError>;
}
