//! HTTP API
//!
//! `POST /command` runs the voice assistant on text, `POST /calculate` runs
//! the BMI calculator. Both answer JSON and allow any browser origin.

use crate::bmi::{round2, BmiReport};
use crate::config::Config;
use crate::core::Router as CommandRouter;
use crate::error::AssistError;
use anyhow::Result;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

type ApiResponse = (StatusCode, Json<Value>);

#[derive(Clone)]
pub struct AppState {
    pub router: Arc<CommandRouter>,
}

pub fn build_app(state: AppState) -> axum::Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    axum::Router::new()
        .route("/command", get(command).post(command))
        .route("/calculate", post(calculate))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors)
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &Config, router: Arc<CommandRouter>) -> Result<()> {
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🌐 API is available at: http://{}/command (POST)", addr);

    axum::serve(listener, build_app(AppState { router }))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down API server");
        })
        .await?;
    Ok(())
}

fn error(status: StatusCode, message: &str) -> ApiResponse {
    (status, Json(json!({ "error": message })))
}

/// GET /health – liveness check
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /command – `{"command": "..."}`
async fn command(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse {
    let Ok(Json(body)) = body else {
        return error(StatusCode::BAD_REQUEST, "Missing JSON in request");
    };

    let text = body
        .get("command")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if text.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Missing 'command' field in JSON");
    }

    let dispatch = state.router.dispatch(text).await;
    info!("[API] Assistant: {}", dispatch.reply.text);

    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "command_received": text,
            "assistant_response": dispatch.reply.text,
        })),
    )
}

/// Accept JSON numbers and numeric strings
fn number_field(body: &Value, key: &str) -> Option<f64> {
    match body.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// POST /calculate – `{"weight": kg, "height": cm}`
async fn calculate(body: Result<Json<Value>, JsonRejection>) -> ApiResponse {
    let Ok(Json(body)) = body else {
        return error(
            StatusCode::BAD_REQUEST,
            "Invalid input format. Please use numbers.",
        );
    };

    let weight = number_field(&body, "weight");
    let height = number_field(&body, "height");
    let (Some(weight), Some(height)) = (weight, height) else {
        return error(
            StatusCode::BAD_REQUEST,
            "Invalid input format. Please use numbers.",
        );
    };

    match BmiReport::from_centimeters(weight, height) {
        Ok(report) => (
            StatusCode::OK,
            Json(json!({
                "bmi": round2(report.bmi),
                "category": report.category,
                "success": true,
            })),
        ),
        Err(AssistError::InvalidInput(_)) => {
            error(StatusCode::BAD_REQUEST, "Input must be positive.")
        }
        Err(e) => {
            warn!("❌ BMI calculation failed: {}", e);
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected server error occurred.",
            )
        }
    }
}
