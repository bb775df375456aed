use super::{Coordinate, GeocodeError, Geocoder};
use crate::config::GeocodeConfig;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// geocodes against a Nominatim search endpoint, taking the first match
pub struct NominatimGeocoder {
    client: Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodeConfig) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodeError::ClientError(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, location: &str) -> Result<Option<Coordinate>, GeocodeError> {
        log::debug!("geocoding '{location}' via {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", location), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|source| GeocodeError::RequestError {
                location: location.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::StatusError {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().map_err(|source| GeocodeError::RequestError {
            location: location.to_string(),
            source,
        })?;
        parse_search_response(location, &body)
    }
}

/// reads the first result of a search response body. an empty result list
/// is a location without coordinates, not an error.
pub fn parse_search_response(
    location: &str,
    body: &str,
) -> Result<Option<Coordinate>, GeocodeError> {
    let response_error = |msg: String| GeocodeError::ResponseError {
        location: location.to_string(),
        msg,
    };
    let results: Vec<SearchResult> =
        serde_json::from_str(body).map_err(|e| response_error(e.to_string()))?;
    let Some(first) = results.into_iter().next() else {
        return Ok(None);
    };
    let lat = first
        .lat
        .trim()
        .parse::<f64>()
        .map_err(|e| response_error(format!("lat '{}': {e}", first.lat)))?;
    let lon = first
        .lon
        .trim()
        .parse::<f64>()
        .map_err(|e| response_error(format!("lon '{}': {e}", first.lon)))?;
    Ok(Some(Coordinate::new(lat, lon)))
}
