use crate::{AppState, error::AppError};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use configuration::{DashboardArgs, DashboardConfig};
use core_types::ResultView;
use dashboard::{RenderPayload, export_csv, export_file_name};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The dashboard controls as query parameters. Omitted ones take the configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub ticker: Option<String>,
    pub lookback_days: Option<usize>,
    pub ma_days: Option<usize>,
    pub risk_free_rate: Option<f64>,
    pub view: Option<ResultView>,
}

impl DashboardQuery {
    fn into_config(self, defaults: &DashboardConfig) -> Result<DashboardConfig, AppError> {
        let args = DashboardArgs {
            ticker: self.ticker,
            lookback_days: self.lookback_days,
            ma_window: self.ma_days,
            risk_free_rate: self.risk_free_rate,
            view: self.view,
        };
        Ok(args.apply(defaults)?)
    }
}

#[derive(Debug, Serialize)]
pub struct TickerName {
    pub symbol: String,
    pub name: Option<String>,
}

/// # GET /api/dashboard
/// Runs one recomputation and returns everything needed to draw the page.
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<RenderPayload>, AppError> {
    let config = query.into_config(&state.defaults)?;
    Ok(Json(state.dashboard.recompute(&config).await))
}

/// # GET /api/dashboard/export.csv
/// Downloads the CAPM summary as a one-row CSV.
pub async fn get_export(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let config = query.into_config(&state.defaults)?;
    let payload = state.dashboard.recompute(&config).await;

    let Some(result) = payload.result else {
        let reasons: Vec<String> = payload.warnings.iter().map(|w| w.message()).collect();
        return Err(AppError::NotFound(format!(
            "No CAPM summary for {}: {}",
            config.ticker,
            reasons.join(" ")
        )));
    };

    let body = export_csv(&result)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(&result.ticker)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// # GET /api/ticker/:symbol
/// Resolves a display name for the ticker; `name` is null when not found.
pub async fn get_ticker_name(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<TickerName>, AppError> {
    let symbol = configuration::dashboard::normalize_ticker(&symbol)?;
    let name = state.dashboard.display_name(&symbol).await;
    Ok(Json(TickerName { symbol, name }))
}
