//! Farm results listing and per-chick lookup

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use farmboard_core::{Paginated, PaginationParams, DEFAULT_PER_PAGE};
use serde::Serialize;
use serde_json::Value;

use crate::db::repos::ReportRepo;
use crate::http::error::{ApiError, PageError};
use crate::http::flash::{ClearFlash, Flashes};
use crate::http::messages;
use crate::http::server::AppState;

#[derive(Serialize)]
pub struct FmsView {
    pub flashes: Vec<String>,
    pub results: Paginated<Value>,
}

/// GET /fms - paginated `fms.total_result`
async fn fms_list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    flashes: Flashes,
) -> Result<(ClearFlash, Json<FmsView>), PageError> {
    let page = params
        .resolve(DEFAULT_PER_PAGE)
        .map_err(|e| PageError::invalid_parameter("/fms", messages::INVALID_PER_PAGE, e))?;
    let results = ReportRepo::new(&state.pool).list_results(page).await?;

    let (flashes, clear) = flashes.take();
    Ok((clear, Json(FmsView { flashes, results })))
}

/// GET /api/chick_info/{chick_no} - merged chick and breeding record
async fn chick_info(
    State(state): State<Arc<AppState>>,
    Path(chick_no): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let info = ReportRepo::new(&state.pool).chick_info(&chick_no).await?;
    Ok(Json(info))
}

/// Reporting routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/fms", get(fms_list))
        .route("/api/chick_info/{chick_no}", get(chick_info))
}
