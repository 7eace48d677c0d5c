use crate::infra::{AppState, ScoringContext};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use crs_engine::error::AppError;
use crs_engine::language::validate_raw_scores;
use crs_engine::{
    convert_to_clb, ApplicantProfile, ClbScores, LanguageTest, RawScores, ScoreBreakdown,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ConvertRequest {
    /// Test name or alias, e.g. `"IELTS General"` or `"tef_canada"`.
    pub(crate) test: String,
    pub(crate) scores: RawScores,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConvertResponse {
    pub(crate) test: LanguageTest,
    pub(crate) clb: ClbScores,
}

pub(crate) fn scoring_router(context: Arc<ScoringContext>) -> Router {
    Router::new()
        .route("/api/v1/clb/convert", post(convert_endpoint))
        .route("/api/v1/crs/score", post(score_endpoint))
        .with_state(context)
}

pub(crate) fn with_service_routes(context: Arc<ScoringContext>) -> Router {
    scoring_router(context)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Rejects out-of-domain scores before conversion; conversion itself never fails.
pub(crate) async fn convert_endpoint(
    State(context): State<Arc<ScoringContext>>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, AppError> {
    let test: LanguageTest = payload.test.parse()?;
    validate_raw_scores(test, &payload.scores)?;

    let clb = convert_to_clb(&context.benchmark, &payload.scores, test);
    Ok(Json(ConvertResponse { test, clb }))
}

pub(crate) async fn score_endpoint(
    State(context): State<Arc<ScoringContext>>,
    Json(profile): Json<ApplicantProfile>,
) -> Json<ScoreBreakdown> {
    let breakdown = context.calculator.calculate(&profile);
    if !breakdown.is_complete() {
        info!(
            misses = breakdown.table_misses.len(),
            total = breakdown.total,
            "scored against an incomplete breakdown table"
        );
    }
    Json(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use crs_engine::ClbLevel;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn context() -> Arc<ScoringContext> {
        Arc::new(ScoringContext::standard())
    }

    fn scores(listening: &str, reading: &str, writing: &str, speaking: &str) -> RawScores {
        RawScores {
            listening: listening.to_string(),
            reading: reading.to_string(),
            writing: writing.to_string(),
            speaking: speaking.to_string(),
        }
    }

    fn convert_request(test: &str, raw: RawScores) -> ConvertRequest {
        ConvertRequest {
            test: test.to_string(),
            scores: raw,
        }
    }

    #[tokio::test]
    async fn convert_endpoint_returns_clb_levels() {
        let request = convert_request("IELTS General", scores("8.5", "7.0", "7.0", "7.5"));

        let Json(body) = convert_endpoint(State(context()), Json(request))
            .await
            .expect("scores are valid");

        assert_eq!(body.test, LanguageTest::IeltsGeneral);
        assert_eq!(body.clb, ClbScores::from_levels(10, 9, 9, 10));
    }

    #[tokio::test]
    async fn convert_endpoint_accepts_celpip_markers() {
        let request = convert_request("celpip", scores("M", "9", "10+", "3-"));

        let Json(body) = convert_endpoint(State(context()), Json(request))
            .await
            .expect("markers are valid");

        assert_eq!(body.clb.listening, Some(ClbLevel::new(0)));
        assert_eq!(body.clb.writing, Some(ClbLevel::new(10)));
    }

    #[tokio::test]
    async fn convert_endpoint_rejects_off_step_scores() {
        let request = convert_request("ielts", scores("8.5", "9.25", "7.0", "7.5"));

        let error = convert_endpoint(State(context()), Json(request))
            .await
            .expect_err("9.25 is not a valid band");

        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn convert_endpoint_rejects_unknown_tests() {
        let request = convert_request("toefl", scores("30", "30", "30", "30"));

        let error = convert_endpoint(State(context()), Json(request))
            .await
            .expect_err("toefl is not accepted");

        assert_eq!(error.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn score_endpoint_returns_breakdown() {
        let profile: ApplicantProfile = serde_json::from_value(json!({
            "age": 29,
            "education": "bachelors",
            "first_language": {
                "test": "ielts_general",
                "clb": { "listening": 10, "reading": 9, "writing": 9, "speaking": 10 }
            }
        }))
        .expect("profile json is valid");

        let Json(breakdown) = score_endpoint(State(context()), Json(profile)).await;

        assert_eq!(breakdown.total, 385);
        assert!(breakdown.is_complete());
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };

        let response = readiness_endpoint(Extension(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state
            .readiness
            .store(true, std::sync::atomic::Ordering::Release);
        let response = readiness_endpoint(Extension(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn convert_route_rejects_out_of_range_pte_scores() {
        let router = with_service_routes(context());
        let body = json!({
            "test": "pte_core",
            "scores": { "listening": "89", "reading": "95", "writing": "90", "speaking": "89" }
        });

        let response = router
            .oneshot(
                Request::post("/api/v1/clb/convert")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(payload["error"].as_str().unwrap_or_default().contains("95"));
    }

    #[tokio::test]
    async fn score_route_accepts_profile_payloads() {
        let router = with_service_routes(context());
        let body = json!({
            "age": 50,
            "education": "secondary",
            "first_language": {
                "test": "celpip_general",
                "clb": { "listening": 4, "reading": 4, "writing": 4, "speaking": 4 }
            },
            "provincial_nomination": true
        });

        let response = router
            .oneshot(
                Request::post("/api/v1/crs/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let breakdown: ScoreBreakdown = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(breakdown.additional_points, 600);
        assert_eq!(breakdown.total, 654);
    }
}
