use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a directed pair of cities for which a travel-time matrix may exist.
/// ordered by origin, then destination.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OdPair {
    pub origin: String,
    pub destination: String,
}

impl OdPair {
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
        }
    }

    /// true when the trip starts and ends in the same city
    pub fn is_self_pair(&self) -> bool {
        self.origin == self.destination
    }

    /// file stem used for per-pair artifacts, `{origin}_{destination}`.
    /// path separators and control characters become `_` so the stem is
    /// always a single file name.
    pub fn stem(&self) -> String {
        format!("{}_{}", file_safe(&self.origin), file_safe(&self.destination))
    }
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

impl Display for OdPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.origin, self.destination)
    }
}
