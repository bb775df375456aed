use super::artifact_index::ArtifactIndex;
use super::escape::json_for_script;
use super::{RenderContext, RenderError};
use serde::Serialize;
use std::collections::BTreeMap;
use ttviz_core::grid::DIMMED_ALPHA;

/// everything the dashboard script reads, serialized into the page
#[derive(Debug, Serialize)]
pub struct ScriptData<'a> {
    pub index: &'a ArtifactIndex,
    pub locations: BTreeMap<String, LatLng>,
    pub map: MapState,
    pub selection: InitialState,
    pub dimmed_alpha: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapState {
    pub enabled: bool,
    pub center: LatLng,
    pub zoom: u8,
}

/// the configured initial selection as selector option values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitialState {
    pub origin: Option<usize>,
    pub destination: Option<usize>,
    pub coverage: Option<usize>,
    pub uncertainty: Option<usize>,
}

impl<'a> ScriptData<'a> {
    pub fn new(ctx: &RenderContext, index: &'a ArtifactIndex) -> Self {
        let locations = ctx
            .coordinates
            .iter()
            .filter_map(|(name, coord)| {
                coord.map(|c| {
                    (
                        name.clone(),
                        LatLng {
                            lat: c.lat,
                            lng: c.lon,
                        },
                    )
                })
            })
            .collect();
        let map = MapState {
            enabled: ctx.config.map.google_maps_api_key.is_some(),
            center: LatLng {
                lat: ctx.config.map.center_lat,
                lng: ctx.config.map.center_lon,
            },
            zoom: ctx.config.map.zoom,
        };
        let position = |names: &[String], name: &Option<String>| {
            name.as_ref()
                .and_then(|n| names.iter().position(|candidate| candidate == n))
        };
        let selection = InitialState {
            origin: position(&index.origins, &ctx.selection.origin),
            destination: position(&index.destinations, &ctx.selection.destination),
            coverage: ctx.selection.coverage,
            uncertainty: ctx.selection.uncertainty,
        };
        Self {
            index,
            locations,
            map,
            selection,
            dimmed_alpha: DIMMED_ALPHA,
        }
    }
}

/// the data prelude followed by the dashboard behavior
pub fn dashboard_script(data: &ScriptData) -> Result<String, RenderError> {
    let json = json_for_script("dashboard script data", data)?;
    Ok(format!("const ttvizData = {json};\n{DASHBOARD_JS}"))
}

const DASHBOARD_JS: &str = r#"
(function () {
  const index = ttvizData.index;
  const GRID_SIZE = 7;
  let map = null, originMarker = null, destMarker = null, line = null;

  function optionValue(id) {
    const value = document.getElementById(id).value;
    return value === '' ? null : Number(value);
  }

  function currentSelection() {
    return {
      origin: optionValue('origin'),
      destination: optionValue('destination'),
      coverage: optionValue('coverage'),
      uncertainty: optionValue('uncertainty')
    };
  }

  function currentHandle(sel) {
    if (sel.origin === null || sel.destination === null) return null;
    const row = index.handles[sel.origin];
    return row ? (row[sel.destination] || null) : null;
  }

  function initMap() {
    if (!ttvizData.map.enabled || !window.google) return;
    map = new google.maps.Map(document.getElementById('google-map'), {
      center: ttvizData.map.center,
      zoom: ttvizData.map.zoom
    });
  }

  function updateMap(sel) {
    const originName = sel.origin === null ? null : index.origins[sel.origin];
    const destName = sel.destination === null ? null : index.destinations[sel.destination];
    document.querySelectorAll('.location-row').forEach(function (row) {
      const name = row.dataset.location;
      row.classList.toggle('active', name === originName || name === destName);
    });
    if (!map) return;
    if (originMarker) originMarker.setMap(null);
    if (destMarker) destMarker.setMap(null);
    if (line) line.setMap(null);
    const origin = originName === null ? null : ttvizData.locations[originName];
    const destination = destName === null ? null : ttvizData.locations[destName];
    if (!origin || !destination) return;
    originMarker = new google.maps.Marker({
      position: origin, map: map, title: 'Origin: ' + originName,
      icon: 'https://maps.google.com/mapfiles/ms/icons/blue-dot.png'
    });
    destMarker = new google.maps.Marker({
      position: destination, map: map, title: 'Destination: ' + destName,
      icon: 'https://maps.google.com/mapfiles/ms/icons/red-dot.png'
    });
    line = new google.maps.Polyline({
      path: [origin, destination], geodesic: true, strokeColor: '#FF0000',
      strokeOpacity: 1.0, strokeWeight: 2, map: map
    });
    const bounds = new google.maps.LatLngBounds();
    bounds.extend(origin);
    bounds.extend(destination);
    map.fitBounds(bounds);
  }

  function updateEnlargedDisplay(sel) {
    document.querySelectorAll('#enlarged-container .enlarged').forEach(function (el) {
      el.style.display = 'none';
    });
    const handle = currentHandle(sel);
    const shown = handle ? document.getElementById(handle.enlarged_id) : null;
    (shown || document.getElementById('enlarged-empty')).style.display = 'block';
  }

  function accentuateGrid(sel) {
    const full = sel.origin !== null && sel.destination !== null;
    index.handles.forEach(function (row, i) {
      row.forEach(function (handle, j) {
        const tile = document.getElementById(handle.tile_id);
        if (!tile) return;
        const selected = i === sel.origin && j === sel.destination;
        tile.style.opacity = (!full || selected) ? 1 : ttvizData.dimmed_alpha;
      });
    });
  }

  function accentuateEnlargedGrids(sel) {
    document.querySelectorAll('#enlarged-container .cell-mask').forEach(function (mask) {
      mask.classList.remove('dimmed');
    });
    const handle = currentHandle(sel);
    const el = handle ? document.getElementById(handle.enlarged_id) : null;
    if (!el) return;
    el.querySelectorAll('.cell-mask').forEach(function (mask) {
      const col = Number(mask.dataset.col);
      const row = Number(mask.dataset.row);
      let lit = true;
      if (sel.coverage !== null && sel.uncertainty !== null) {
        lit = col === sel.coverage && row === sel.uncertainty;
      } else if (sel.uncertainty !== null) {
        lit = row === sel.uncertainty;
      } else if (sel.coverage !== null) {
        lit = col === sel.coverage;
      }
      mask.classList.toggle('dimmed', !lit);
    });
  }

  function updateTravelTimeDisplay(sel) {
    const handle = currentHandle(sel);
    const range = handle ? handle.range : null;
    document.getElementById('min-time').textContent = range ? range[0] + ' min' : '--';
    document.getElementById('max-time').textContent = range ? range[1] + ' min' : '--';
    let prediction = null;
    if (handle && sel.coverage !== null && sel.uncertainty !== null) {
      prediction = handle.cells[sel.uncertainty * GRID_SIZE + sel.coverage];
    }
    document.getElementById('prediction').textContent =
      (prediction === null || prediction === undefined) ? '--' : prediction + ' min';
  }

  function updateAll() {
    const sel = currentSelection();
    updateMap(sel);
    updateEnlargedDisplay(sel);
    accentuateGrid(sel);
    accentuateEnlargedGrids(sel);
    updateTravelTimeDisplay(sel);
  }

  function applyInitialSelection() {
    const initial = ttvizData.selection;
    ['origin', 'destination', 'coverage', 'uncertainty'].forEach(function (id) {
      if (initial[id] !== null) document.getElementById(id).value = String(initial[id]);
    });
  }

  window.addEventListener('load', function () {
    initMap();
    applyInitialSelection();
    updateAll();
    ['origin', 'destination', 'coverage', 'uncertainty'].forEach(function (id) {
      document.getElementById(id).addEventListener('change', updateAll);
    });
  });
})();
"#;

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{DashboardConfig, InitialSelection};
    use crate::render::test_fixture::{sample_coordinates, sample_table};

    #[test]
    fn test_script_data() {
        let table = sample_table();
        let config = DashboardConfig {
            initial_selection: Some(InitialSelection {
                origin: Some(String::from("Detroit")),
                destination: Some(String::from("Toronto")),
                coverage: Some(String::from("0.95")),
                uncertainty: None,
            }),
            ..Default::default()
        };
        let coordinates = sample_coordinates();
        let ctx = RenderContext::new(&table, &config, &coordinates).expect("should build context");
        let index = ArtifactIndex::build(&ctx).expect("should build index");
        let data = ScriptData::new(&ctx, &index);

        assert_eq!(
            data.selection,
            InitialState {
                origin: Some(1),
                destination: None,
                coverage: Some(5),
                uncertainty: None,
            }
        );
        assert_eq!(data.locations.len(), 1);
        assert!(!data.map.enabled);
        assert_eq!(data.map.zoom, 5);

        let script = dashboard_script(&data).expect("should build script");
        assert!(script.starts_with("const ttvizData = {"));
        assert!(script.contains("\"tile_id\":\"tile-0-0\""));
        assert!(script.contains("function accentuateEnlargedGrids"));
    }
}
