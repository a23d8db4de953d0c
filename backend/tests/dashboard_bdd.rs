//! Behavioural tests for the dashboard HTTP surface.

#[path = "../src/server/mod.rs"]
mod server;
#[expect(
    dead_code,
    reason = "Shared fixtures expose response details used only by the API suite."
)]
#[path = "support/dashboard.rs"]
mod support;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::Value;

use server::AppDependencies;
use support::{Captured, broken_deps, get, seeded_deps};

#[derive(Default, ScenarioState)]
struct World {
    deps: Slot<AppDependencies>,
    response: Slot<Captured>,
}

impl World {
    fn response(&self) -> Captured {
        self.response.get().expect("a request should have been made")
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a dashboard seeded with {seed}")]
fn a_dashboard_seeded_with(world: &World, seed: u64) {
    world.deps.set(seeded_deps(seed));
}

#[given("a dashboard whose telemetry source is broken")]
fn a_dashboard_whose_telemetry_source_is_broken(world: &World) {
    world.deps.set(broken_deps());
}

#[when("the client requests {uri}")]
fn the_client_requests(world: &World, uri: String) {
    let deps = world.deps.get().expect("dashboard should be configured");
    let captured = actix_rt::System::new().block_on(get(deps, unquote(&uri)));
    world.response.set(captured);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &World, status: u16) {
    assert_eq!(world.response().status, status);
}

#[then("the response reports success")]
fn the_response_reports_success(world: &World) {
    assert_eq!(
        world.response().body.get("success"),
        Some(&Value::Bool(true))
    );
}

#[then("the response carries a trace identifier")]
fn the_response_carries_a_trace_identifier(world: &World) {
    let trace_id = world.response().trace_id.expect("trace-id header");
    assert!(!trace_id.is_empty());
}

#[then("the temperature sensor is located at {location}")]
fn the_temperature_sensor_is_located_at(world: &World, location: String) {
    assert_eq!(
        world
            .response()
            .body
            .pointer("/data/temperature/location")
            .and_then(Value::as_str),
        Some(unquote(&location))
    );
}

#[then("the series holds {count} points")]
fn the_series_holds(world: &World, count: usize) {
    assert_eq!(
        world
            .response()
            .body
            .pointer("/data/data_points")
            .and_then(Value::as_array)
            .map(Vec::len),
        Some(count)
    );
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &World, message: String) {
    let response = world.response();
    assert_eq!(response.body.get("success"), Some(&Value::Bool(false)));
    assert_eq!(
        response.body.get("error").and_then(Value::as_str),
        Some(unquote(&message))
    );
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Telemetry is wrapped in a success envelope"
)]
fn telemetry_is_wrapped(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Unknown sites fall back to Germany"
)]
fn unknown_sites_fall_back(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Weekly history holds one point per day"
)]
fn weekly_history_holds_one_point_per_day(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Generation failures surface as a failure envelope"
)]
fn generation_failures_surface(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dashboard.feature",
    name = "Unknown routes are reported as not found"
)]
fn unknown_routes_are_not_found(world: World) {
    let _ = world;
}
