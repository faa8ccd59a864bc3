use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::router::{logistics_handler, production_handler};
use super::{advisory_router, AdvisoryService, ProductionRequest};
use crate::workflows::logistics::{Diagnostic, SiteObservation};
use crate::workflows::production::{ProductionError, ProductionOutcome};
use crate::workflows::rulebook::{RuleBook, TemperatureBand};

fn service() -> Arc<AdvisoryService> {
    Arc::new(AdvisoryService::new(Arc::new(RuleBook::standard())))
}

fn site_observation() -> SiteObservation {
    SiteObservation {
        distance_km: 8.0,
        starts_count: 3,
        preheated: false,
        gap_minutes: 45.0,
    }
}

async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn post_json(uri: &str, payload: &Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("serialize payload"),
        ))
        .expect("request builds")
}

#[test]
fn production_advice_includes_savings_and_hardware() {
    let advice = service()
        .production(&ProductionRequest {
            temperature_c: -25.0,
            viscosity_mpa_s: 2500.0,
            baseline_cost: Some(1000.0),
        })
        .expect("advice");

    assert_eq!(advice.zone.band, Some(TemperatureBand::Severe));
    assert_eq!(advice.savings, Some(320.0));
    assert_eq!(advice.hardware_notes.len(), 4);
    let recommendation = advice.outcome.recommendation().expect("recommendation");
    assert_eq!(recommendation.final_speed_rpm, 57.5);
}

#[test]
fn production_advice_skips_savings_when_not_applicable() {
    let advice = service()
        .production(&ProductionRequest {
            temperature_c: 2.0,
            viscosity_mpa_s: 2500.0,
            baseline_cost: Some(1000.0),
        })
        .expect("advice");

    assert_eq!(
        advice.outcome,
        ProductionOutcome::NotApplicable { temperature_c: 2.0 }
    );
    assert!(advice.savings.is_none());
    assert!(advice.hardware_notes.is_empty());
}

#[test]
fn production_advice_rejects_non_finite_temperature() {
    let error = service()
        .production(&ProductionRequest {
            temperature_c: f64::NAN,
            viscosity_mpa_s: 2500.0,
            baseline_cost: None,
        })
        .expect_err("nan temperature");

    assert!(matches!(error, ProductionError::InvalidTemperature(_)));
}

#[test]
fn logistics_advice_bundles_guidance() {
    let advice = service()
        .logistics(site_observation())
        .expect("valid observation");

    assert_eq!(advice.diagnostics.non_compliant_count(), 3);
    assert!((advice.diagnostics.startup.loss_rate() - 0.65).abs() < 1e-12);
    assert!(advice.guidance.transport.contains("5.0 km"));
}

#[tokio::test]
async fn production_handler_returns_unprocessable_for_bad_viscosity() {
    let response = production_handler(
        State(service()),
        Json(ProductionRequest {
            temperature_c: -15.0,
            viscosity_mpa_s: -1.0,
            baseline_cost: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("viscosity"));
}

#[tokio::test]
async fn logistics_handler_returns_unprocessable_for_negative_gap() {
    let observation = SiteObservation {
        gap_minutes: -5.0,
        ..site_observation()
    };

    let response = logistics_handler(State(service()), Json(observation)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn production_route_serializes_tagged_outcome() {
    let router = advisory_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/production/recommendation",
            &json!({ "temperature_c": -25.0, "viscosity_mpa_s": 2500.0, "baseline_cost": 1000.0 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"]["outcome"], "recommendation");
    assert_eq!(payload["outcome"]["zone_name"], "-20~-30℃");
    assert_eq!(payload["outcome"]["final_speed_rpm"], 57.5);
    assert_eq!(payload["savings"], 320.0);
    assert_eq!(payload["zone"]["band"], "severe");
}

#[tokio::test]
async fn production_route_reports_not_applicable() {
    let router = advisory_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/production/recommendation",
            &json!({ "temperature_c": 0.0, "viscosity_mpa_s": 2500.0 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["outcome"]["outcome"], "not_applicable");
    assert!(payload.get("savings").is_none());
    assert_eq!(payload["zone"]["zone_name"], Value::Null);
}

#[tokio::test]
async fn logistics_route_returns_every_diagnosis() {
    let router = advisory_router(service());

    let response = router
        .oneshot(post_json(
            "/api/v1/logistics/diagnostics",
            &json!({ "distance_km": 5.0, "starts_count": 3, "preheated": false, "gap_minutes": 45 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["diagnostics"]["transport"]["status"], "compliant");
    assert_eq!(payload["diagnostics"]["startup"]["status"], "warning");
    assert_eq!(
        payload["diagnostics"]["startup"]["losses"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
    assert_eq!(payload["diagnostics"]["process_gap"]["status"], "high_loss");
    assert_eq!(payload["diagnostics"]["process_gap"]["steps"], 3);
}

#[tokio::test]
async fn rulebook_route_exposes_active_tables() {
    let router = advisory_router(service());

    let response = router
        .oneshot(
            Request::get("/api/v1/rulebook")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["zones"].as_array().map(Vec::len), Some(4));
    assert_eq!(payload["thresholds"]["daily_start_limit"], 2);
}
