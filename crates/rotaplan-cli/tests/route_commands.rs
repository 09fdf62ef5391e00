use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("rotaplan-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn route_on_sample_network_lists_each_stop() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Pelotas")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: Curitiba -> Pelotas"))
        .stdout(predicate::str::contains("Porto Alegre"))
        .stdout(predicate::str::contains("Estimated cost:"));
}

#[test]
fn disconnected_cities_report_no_route() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Joinville")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "no route found between Curitiba and Joinville",
        ));
}

#[test]
fn unknown_location_error_is_friendly() {
    cli()
        .arg("route")
        .arg("--from")
        .arg("Curtiba")
        .arg("--to")
        .arg("Pelotas")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown location name: Curtiba"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn json_format_serialises_the_summary() {
    let output = cli()
        .arg("--format")
        .arg("json")
        .arg("route")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Pelotas")
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(value["start"]["name"], "Curitiba");
    assert_eq!(value["goal"]["name"], "Pelotas");
    assert!(value["distance_km"].as_f64().unwrap() > 0.0);
    assert_eq!(value["steps"].as_array().unwrap().len(), 3);
}

#[test]
fn fixed_departure_and_ptbr_currency_render_locale_output() {
    cli()
        .arg("--currency")
        .arg("pt-br")
        .arg("route")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Porto Alegre")
        .arg("--depart")
        .arg("2024-03-01T08:00:00-03:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ "))
        .stdout(predicate::str::contains("Hrs"));
}

#[test]
fn csv_and_map_artifacts_are_written() {
    let dir = tempdir().expect("create temp dir");
    let csv_path = dir.path().join("route.csv");
    let map_path = dir.path().join("route.html");

    cli()
        .arg("route")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Pelotas")
        .arg("--csv")
        .arg(&csv_path)
        .arg("--map")
        .arg(&map_path)
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path).expect("route CSV written");
    assert!(csv.starts_with("index,name,label,latitude,longitude"));
    assert!(csv.contains("Curitiba"));
    assert!(dir.path().join("route.estimate.csv").exists());

    let map = fs::read_to_string(&map_path).expect("map written");
    assert!(map.contains("leaflet"));
    assert!(map.contains("L.polyline("));
}

#[test]
fn locations_lists_the_sample_cities() {
    cli()
        .arg("locations")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations (9):"))
        .stdout(predicate::str::contains("Foz do Iguaçu"))
        .stdout(predicate::str::contains("Uruguaiana"));
}

#[test]
fn distance_reports_great_circle_and_edge() {
    cli()
        .arg("distance")
        .arg("--from")
        .arg("Curitiba")
        .arg("--to")
        .arg("Porto Alegre")
        .assert()
        .success()
        .stdout(predicate::str::contains("km great-circle"))
        .stdout(predicate::str::contains("Connected directly"));
}

#[test]
fn custom_network_file_is_honoured() {
    let dir = tempdir().expect("create temp dir");
    let network_path = dir.path().join("network.json");
    fs::write(
        &network_path,
        r#"{
            "locations": [
                {"name": "A", "label": "A town", "latitude": 0.0, "longitude": 0.0},
                {"name": "B", "label": "B town", "latitude": 0.0, "longitude": 1.0}
            ],
            "connections": [{"from": "A", "to": "B"}]
        }"#,
    )
    .expect("write network file");

    cli()
        .arg("--network")
        .arg(&network_path)
        .arg("route")
        .arg("--from")
        .arg("A")
        .arg("--to")
        .arg("B")
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: A -> B (1 hops, 111.20 km)"));
}
