use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("campusroute-cli");
    cmd.env("RUST_LOG", "error");
    cmd
}

#[test]
fn car_route_parks_at_visitor_parking() {
    cli()
        .args(["route", "--from", "Main Gate", "--to", "Lecture Hall", "--by-car"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: dijkstra"))
        .stdout(predicate::str::contains("Visitor Parking"))
        .stdout(predicate::str::contains("Stairwell"))
        .stdout(predicate::str::contains("Total distance: 325.0 over 6 hops"));
}

#[test]
fn accessible_car_route_uses_lift() {
    cli()
        .args([
            "route",
            "--from",
            "Main Gate",
            "--to",
            "Lecture Hall",
            "--by-car",
            "--accessible",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Accessible Parking"))
        .stdout(predicate::str::contains("Lift"))
        .stdout(predicate::str::contains("Stairwell").not())
        .stdout(predicate::str::contains("Total distance: 320.0"));
}

#[test]
fn emergency_route_uses_fire_exit() {
    cli()
        .args([
            "route",
            "--from",
            "Reception",
            "--to",
            "Assembly Point",
            "--emergency",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fire Exit"))
        .stdout(predicate::str::contains("Total distance: 85.0"));

    cli()
        .args(["route", "--from", "Reception", "--to", "Assembly Point"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fire Exit").not())
        .stdout(predicate::str::contains("Total distance: 125.0"));
}

#[test]
fn depth_first_algorithm_is_supported() {
    cli()
        .args([
            "route",
            "--from",
            "Main Gate",
            "--to",
            "Lecture Hall",
            "--by-car",
            "--algorithm",
            "depth-first",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: depth-first"))
        .stdout(predicate::str::contains("Total distance: 325.0"));
}

#[test]
fn json_format_resolves_names() {
    let output = cli()
        .args([
            "--format",
            "json",
            "route",
            "--from",
            "Ring Road",
            "--to",
            "Entrance",
            "--by-car",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["start"], "Ring Road");
    assert_eq!(value["goal"], "Entrance");
    assert_eq!(value["start_mode"], "car");
    assert_eq!(value["total_distance"], 170.0);
    assert_eq!(value["steps"][1]["name"], "Visitor Parking");
    assert_eq!(value["steps"][2]["mode"], "foot");
}

#[test]
fn unknown_location_suggests_names() {
    cli()
        .args(["route", "--from", "Recepton", "--to", "Library"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown node name: Recepton"))
        .stderr(predicate::str::contains("Reception"));
}

#[test]
fn unreachable_destination_fails() {
    cli()
        .args(["route", "--from", "Lecture Hall", "--to", "Fire Exit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found between Lecture Hall and Fire Exit"));
}

#[test]
fn nodes_lists_flags() {
    cli()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Visitor Parking"))
        .stdout(predicate::str::contains("[parking]"))
        .stdout(predicate::str::contains("- Fire Exit (1 exits) [emergency only]"));
}
