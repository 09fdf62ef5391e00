//! Standalone HTML map rendering for a planned route.
//!
//! Produces a self-contained Leaflet document with one marker per stop and a
//! polyline through the route, centred on the first stop. The artifact is
//! purely presentational; failures writing it never affect route results.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::output::RouteSummary;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const DEFAULT_ZOOM: u8 = 6;

/// Render the route as a standalone Leaflet HTML document.
pub fn render_map_html(summary: &RouteSummary) -> String {
    let center = summary
        .steps
        .first()
        .map(|step| (step.latitude, step.longitude))
        .unwrap_or((0.0, 0.0));

    let mut markers = String::new();
    for step in &summary.steps {
        let _ = writeln!(
            markers,
            "    L.marker([{lat}, {lon}]).addTo(map).bindPopup({name:?});",
            lat = step.latitude,
            lon = step.longitude,
            name = step.name.as_deref().unwrap_or("<unknown>"),
        );
    }

    let polyline = summary
        .steps
        .iter()
        .map(|step| format!("[{}, {}]", step.latitude, step.longitude))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Route map</title>
  <link rel="stylesheet" href="{css}">
  <script src="{js}"></script>
  <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
  <div id="map"></div>
  <script>
    var map = L.map('map').setView([{center_lat}, {center_lon}], {zoom});
    L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
{markers}    L.polyline([{polyline}], {{color: 'blue'}}).addTo(map);
  </script>
</body>
</html>
"#,
        css = LEAFLET_CSS,
        js = LEAFLET_JS,
        center_lat = center.0,
        center_lon = center.1,
        zoom = DEFAULT_ZOOM,
        markers = markers,
        polyline = polyline,
    )
}

/// Render the map and write it to `path`.
pub fn write_map_html(path: &Path, summary: &RouteSummary) -> Result<()> {
    std::fs::write(path, render_map_html(summary))?;
    Ok(())
}
