mod common;

use common::TestApp;
use ml_service::dtos::{CalcResponse, EstimateResponse, SuggestionsResponse};
use ml_service::services::FactorCalculator;
use serde_json::json;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn suggestions_compute_trees_to_offset() {
    let app = TestApp::spawn().await;
    let per_tree = FactorCalculator::new(&app.state.factors).tree_offset(1.0);

    let response = app
        .client
        .get(app.url("/suggestions?co2=100"))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: SuggestionsResponse = response.json().await.expect("Failed to parse JSON");

    let expected = (100.0 / per_tree).ceil() as u64;
    assert_eq!(body.trees_to_offset, expected);
    assert_eq!(body.suggestions.len(), 3);
    assert_eq!(
        body.suggestions[2].recommended_action,
        format!("Plant {} tree(s) to offset 100 kg CO2", expected)
    );
}

#[tokio::test]
async fn suggestions_without_co2_offset_nothing() {
    let app = TestApp::spawn().await;

    for path in [
        "/suggestions",
        "/suggestions?co2=abc",
        "/suggestions?co2=-5",
        "/suggestions?co2=1&co2=2",
    ] {
        let response = app
            .client
            .get(app.url(path))
            .send()
            .await
            .expect("Failed to execute request");

        assert!(response.status().is_success(), "{} failed", path);
        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body["trees_to_offset"], 0, "{} offset mismatch", path);
        assert!(body["suggestions"][0]["impact_kgCO2"].is_number());
    }
}

#[tokio::test]
async fn calc_uses_factor_table() {
    let app = TestApp::spawn().await;
    let expected = app.state.factors.vehicle("car_diesel") * 20.0;

    let response = app
        .client
        .post(app.url("/calc"))
        .json(&json!({
            "type": "vehicle",
            "km": 20.0,
            "vehicleType": "Car",
            "fuelType": "Diesel"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: CalcResponse = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.kind, "vehicle");
    assert!(approx_eq(body.co2_kg, expected));
}

#[tokio::test]
async fn calc_rejects_negative_input() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/calc"))
        .json(&json!({ "type": "trees", "numTrees": -1.0 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Validation error");
}

#[tokio::test]
async fn calc_rejects_unknown_activity() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/calc"))
        .json(&json!({ "type": "rocket", "km": 10.0 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn estimate_vehicle_entry() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/entries/estimate"))
        .json(&json!({ "type": "vehicle", "distance": 100.0, "fuelType": "hybrid" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: EstimateResponse = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.kind, "vehicle");
    assert!(approx_eq(body.co2_emissions, 7.5));
    assert_eq!(body.fuel_consumed.map(|f| (f * 10.0).round()), Some(80.0));
}

#[tokio::test]
async fn estimate_plantation_entry_earns_points() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/entries/estimate"))
        .json(&json!({ "type": "plantation", "treesPlanted": 4 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["co2Offset"], 88.0);
    assert_eq!(body["ecoPointsEarned"], 40.0);
    assert_eq!(body["co2Emissions"], 0.0);
    assert!(body.get("fuelConsumed").is_none());
}

#[tokio::test]
async fn renewable_energy_has_no_emissions() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .post(app.url("/entries/estimate"))
        .json(&json!({
            "type": "energy",
            "amount": 250.0,
            "energySource": "electricity",
            "isRenewable": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: EstimateResponse = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.co2_emissions, 0.0);
}

#[tokio::test]
async fn custom_factor_file_replaces_bundled_table() {
    let path = std::env::temp_dir().join(format!(
        "ml-service-factors-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{"tree_offset": {"tree_species_default_annual_offset_kg": 50.0}}"#,
    )
    .expect("Failed to write factors file");

    let app = TestApp::spawn_with_factors(Some(path.to_string_lossy().into_owned())).await;

    let response = app
        .client
        .get(app.url("/suggestions?co2=120"))
        .send()
        .await
        .expect("Failed to execute request");

    let body: SuggestionsResponse = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.trees_to_offset, 3);
    assert_eq!(body.suggestions[2].impact_kg_co2, -50.0);

    // Vehicle factors are absent from the custom table
    let response = app
        .client
        .post(app.url("/calc"))
        .json(&json!({ "type": "vehicle", "km": 10.0, "vehicleType": "bus" }))
        .send()
        .await
        .expect("Failed to execute request");
    let body: CalcResponse = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.co2_kg, 0.0);

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn fractional_days_and_trees_are_accepted() {
    let app = TestApp::spawn().await;
    let expected = app.state.factors.heating("electricity_kwh") * 10.0 * 1.5;

    let response = app
        .client
        .post(app.url("/calc"))
        .json(&json!({ "type": "heating", "kwh": 10, "fuelType": "electricity", "days": 1.5 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: CalcResponse = response.json().await.expect("Failed to parse JSON");
    assert!(approx_eq(body.co2_kg, expected));

    let response = app
        .client
        .post(app.url("/entries/estimate"))
        .json(&json!({ "type": "plantation", "treesPlanted": 2.5 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: EstimateResponse = response.json().await.expect("Failed to parse JSON");
    assert!(approx_eq(body.co2_offset, 55.0));
    assert!(approx_eq(body.eco_points_earned, 25.0));
}
