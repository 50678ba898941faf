use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use poolstat_executor::Command;
use poolstat_wire::{
    decode_query_request, decode_update_request, AboutResponse, DecodeError, Response,
};

use crate::error::ApiError;
use crate::state::AppState;

fn body_str(body: &Result<Bytes, BytesRejection>) -> Result<&str, ApiError> {
    let body = body.as_ref().map_err(ApiError::body)?;
    std::str::from_utf8(body)
        .map_err(|e| ApiError::Decode(DecodeError::InvalidJson(e.to_string())))
}

/// GET / - Service description
pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        name: "poolstat".to_string(),
        description: "Manage sample pools and compute quantiles".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /info - Store summary
pub async fn info(State(state): State<AppState>) -> Result<Json<Response>, ApiError> {
    let output = state.execute(Command::Info).await?;
    Ok(Json(output.into()))
}

/// POST /pools/update - Insert or append samples
pub async fn update_pool(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Response>, ApiError> {
    let request = decode_update_request(body_str(&body)?)?;
    let output = state.execute(request.into()).await?;
    Ok(Json(output.into()))
}

/// POST /pools/query - Compute a percentile
pub async fn query_pool(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Response>, ApiError> {
    let request = decode_query_request(body_str(&body)?)?;
    let output = state.execute(request.into()).await?;
    Ok(Json(output.into()))
}
