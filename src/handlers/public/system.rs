// handlers/public/system.rs - GET / and GET /health

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::state::AppState;

/// GET / - Service information
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Thesis API",
        "data": {
            "name": "Thesis API",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "auth": "/auth/register, /auth/login (public); /auth/logout, /auth/me",
                "users": "/user[/:id | /email/:email]",
                "advisors": "/advisor[/:id]",
                "establishments": "/establishment[/:id | /name/:name]",
                "laboratories": "/laboratory[/:id | /name/:name | /city/:city | /country/:country]",
                "labDirectors": "/lab-director[/:id | /laboratory/:id]",
                "candidates": "/candidate[/:id | /mine]",
                "theses": "/thesis[/:id | /mine | /:id/validate-topic | /:id/update-job-vacancy | /:id/assign-candidate | /:id/add-anrt-number]",
                "health": "/health"
            }
        }
    }))
}

/// GET /health - Database liveness, 200 or 503
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    let result = match &state.pool {
        Some(pool) => DatabaseManager::health_check(pool).await.map_err(|e| e.to_string()),
        None => Err("no database configured".to_string()),
    };

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "message": "ok",
                "data": { "status": "ok", "timestamp": now, "database": "ok" }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "message": "database unavailable",
                    "code": "SERVICE_UNAVAILABLE"
                })),
            )
        }
    }
}
