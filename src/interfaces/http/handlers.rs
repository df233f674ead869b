use super::AppState;
use super::error::ApiError;
use crate::domain::receipt::{ReceiptData, ReceiptId};
use crate::error::ReceiptError;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub receipts: usize,
}

/// `POST /receipts/process`
///
/// The body is decoded directly rather than through the `Json` extractor so
/// that a missing `Content-Type` header is not a rejection.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let data: ReceiptData = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "rejected receipt payload");
        ReceiptError::from(e)
    })?;

    let id = state.service.submit(data).await?;
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`
pub async fn receipt_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id = ReceiptId::from(id);
    match state.service.points(&id).await? {
        Some(points) => Ok(Json(PointsResponse { points })),
        None if state.strict_lookup => {
            warn!(%id, "points requested for unknown receipt");
            Err(ApiError::NotFound("No receipt found for that id.".to_string()))
        }
        None => {
            warn!(%id, "points requested for unknown receipt, answering zero");
            Ok(Json(PointsResponse { points: 0 }))
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let receipts = state.service.receipt_count().await?;
    Ok(Json(HealthResponse {
        status: "ok",
        receipts,
    }))
}
