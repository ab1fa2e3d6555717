//! Reporting dashboard

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use farmboard_core::Dashboard;
use serde::Serialize;

use crate::db::repos::ReportRepo;
use crate::http::error::PageError;
use crate::http::flash::{ClearFlash, Flashes};
use crate::http::server::AppState;

/// Chart datasets at the top level, next to the flashes
#[derive(Serialize)]
pub struct DashboardView {
    pub flashes: Vec<String>,
    #[serde(flatten)]
    pub dashboard: Dashboard,
}

/// GET /dashboard
async fn dashboard(
    State(state): State<Arc<AppState>>,
    flashes: Flashes,
) -> Result<(ClearFlash, Json<DashboardView>), PageError> {
    let dashboard = ReportRepo::new(&state.pool).dashboard().await?;

    let (flashes, clear) = flashes.take();
    Ok((clear, Json(DashboardView { flashes, dashboard })))
}

/// Dashboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(dashboard))
}
