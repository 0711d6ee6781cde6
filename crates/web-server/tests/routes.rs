use api_client::error::ApiError;
use api_client::{HistoryRange, MarketDataProvider};
use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, NaiveDate};
use configuration::{DashboardConfig, ProviderSettings};
use core_types::{PricePoint, PriceSeries};
use dashboard::{Dashboard, EXPORT_COLUMNS};
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{AppState, router};

struct StubProvider;

#[async_trait]
impl MarketDataProvider for StubProvider {
    async fn fetch_prices(
        &self,
        symbol: &str,
        _range: &HistoryRange,
    ) -> Result<PriceSeries, ApiError> {
        let closes: &[f64] = match symbol {
            "AAPL" => &[100.0, 101.0, 102.0, 100.0, 103.0],
            "^GSPC" => &[100.0, 100.5, 101.0, 100.2, 101.1],
            _ => return Err(ApiError::InvalidSymbol(symbol.to_string())),
        };
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        Ok(PriceSeries::new(
            symbol,
            closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PricePoint {
                    date: start + Duration::days(i as i64),
                    close,
                })
                .collect(),
        ))
    }

    async fn fetch_display_name(&self, symbol: &str) -> Result<Option<String>, ApiError> {
        Ok((symbol == "AAPL").then(|| "Apple Inc.".to_string()))
    }
}

fn app() -> axum::Router {
    let dashboard = Dashboard::new(Arc::new(StubProvider), &ProviderSettings::default()).unwrap();
    router(Arc::new(AppState {
        dashboard,
        defaults: DashboardConfig::default(),
    }))
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn health_check() {
    let (status, _, body) = get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn dashboard_returns_payload_for_defaults() {
    let (status, _, body) = get("/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["config"]["ticker"], "AAPL");
    assert_eq!(json["display_name"], "Apple Inc.");
    assert_eq!(json["result"]["ticker"], "AAPL");
    assert_eq!(json["summary"]["view"], "table");
    assert_eq!(json["warnings"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dashboard_applies_query_parameters() {
    let (status, _, body) =
        get("/api/dashboard?ticker=aapl&lookback_days=2&ma_days=2&view=bar_chart").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["charts"]["asset"]["raw"].as_array().unwrap().len(), 2);
    assert!(json["charts"]["asset"]["smoothed"][0].is_null());
    assert!(json["charts"]["asset"]["smoothed"][1].is_number());
    assert_eq!(json["summary"]["view"], "bar_chart");
}

#[tokio::test]
async fn out_of_range_parameters_are_bad_requests() {
    let (status, _, body) = get("/api/dashboard?risk_free_rate=0.2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("risk_free_rate"));
}

#[tokio::test]
async fn unknown_ticker_is_a_warning_not_an_error() {
    let (status, _, body) = get("/api/dashboard?ticker=ZZZZ").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["result"].is_null());
    assert_eq!(json["warnings"][0]["kind"], "InvalidSymbol");
}

#[tokio::test]
async fn export_downloads_csv() {
    let (status, headers, body) = get("/api/dashboard/export.csv?ticker=aapl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"AAPL_capm_summary.csv\""
    );
    assert_eq!(body.lines().next().unwrap(), EXPORT_COLUMNS.join(","));
    assert!(body.lines().nth(1).unwrap().starts_with("AAPL,"));
}

#[tokio::test]
async fn export_without_result_is_not_found() {
    let (status, _, _) = get("/api/dashboard/export.csv?ticker=ZZZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ticker_name_lookup() {
    let (status, _, body) = get("/api/ticker/aapl").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["symbol"], "AAPL");
    assert_eq!(json["name"], "Apple Inc.");

    let (_, _, body) = get("/api/ticker/msft").await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["name"].is_null());
}
