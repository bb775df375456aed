//! small datasets shared by the render tests
use crate::geocode::{Coordinate, GeocodeCache};
use itertools::Itertools;
use ttviz_core::table::TravelTimeTable;

/// Chicago and Detroit in both directions plus Chicago to itself. Detroit
/// to Detroit has no row and Detroit to Chicago has one empty cell.
pub fn sample_table() -> TravelTimeTable {
    let header = (0..49).map(|i| format!("v{i}")).join(",");
    let ramp = |base: f64| (0..49).map(|i| format!("{}", base + i as f64)).collect_vec();
    let mut with_gap = ramp(10.0);
    with_gap[5] = String::new();
    let data = [
        format!("Origin,Destination,{header}"),
        format!("Chicago,Detroit,{}", ramp(0.0).join(",")),
        format!("Detroit,Chicago,{}", with_gap.join(",")),
        format!("Chicago,Chicago,{}", vec!["1.5"; 49].join(",")),
    ]
    .join("\n");
    TravelTimeTable::from_reader(data.as_bytes()).expect("sample table should load")
}

pub fn sample_coordinates() -> GeocodeCache {
    let mut cache = GeocodeCache::default();
    cache.insert("Chicago", Some(Coordinate::new(41.8756, -87.6244)));
    cache.insert("Detroit", None);
    cache
}
