//! REST API for the metro network.
//!
//! Provides endpoints for:
//! - Station and line listings
//! - Route finding, as JSON or GeoJSON
//! - Passenger statistics

use std::sync::Arc;
use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use geojson::FeatureCollection;
use metro_core::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error};

use crate::{ServerConfig, state::AppState};

/// Errors reported to API clients as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => {
                error!("Request failed: {message}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct StationDto {
    pub id: StationId,
    pub name: String,
    pub line: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Station> for StationDto {
    fn from(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name.clone(),
            line: station.line.clone(),
            latitude: station.latitude(),
            longitude: station.longitude(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct RouteDto {
    pub stations: Vec<String>,
    pub segments: Vec<LineSegment>,
    pub distance_km: f64,
    pub stop_count: usize,
    pub transfers: usize,
    pub estimated_travel_time_minutes: u32,
}

impl From<Route> for RouteDto {
    fn from(route: Route) -> Self {
        Self {
            stop_count: route.stop_count(),
            transfers: route.transfers(),
            estimated_travel_time_minutes: route.estimated_travel_time_minutes(),
            stations: route.stations,
            segments: route.segments,
            distance_km: route.distance_km,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

/// Creates the API router with tracing, CORS, timeout and concurrency limits.
pub fn create_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        // Network
        .route("/stations", get(list_stations))
        .route("/lines", get(list_lines))
        .route("/route", get(get_route))
        .route("/route/geojson", get(get_route_geojson))
        // Passenger statistics
        .route("/stats/years", get(get_years))
        .route("/stats/monthly", get(get_monthly_stats))
        .route("/stats/yearly", get(get_yearly_stats))
        .route("/stats/growth", get(get_yearly_growth))
        .route("/stats/lines", get(get_line_utilization))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .timeout(Duration::from_secs(config.request_timeout_secs))
                .concurrency_limit(config.concurrency_limit),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_layer_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {err}"),
        )
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "UP" }))
}

async fn list_stations(State(state): State<Arc<AppState>>) -> Json<Vec<StationDto>> {
    let mut stations: Vec<StationDto> = state.network.stations().map(StationDto::from).collect();
    stations.sort_by(|a, b| a.name.cmp(&b.name));
    Json(stations)
}

async fn list_lines(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(
        state
            .network
            .lines()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}

/// Plans a route, telling unknown stations apart from unreachable ones
fn plan(state: &AppState, query: &RouteQuery) -> Result<Route, ApiError> {
    for name in [&query.from, &query.to] {
        if !state.network.contains_station(name) {
            return Err(ApiError::NotFound(format!("Unknown station: {name}")));
        }
    }

    debug!(from = %query.from, to = %query.to, "Route query");
    state
        .network
        .find_route(&query.from, &query.to)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "No route found between {} and {}",
                query.from, query.to
            ))
        })
}

async fn get_route(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<RouteDto>, ApiError> {
    let Query(query) = query?;
    plan(&state, &query).map(|route| Json(route.into()))
}

async fn get_route_geojson(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let Query(query) = query?;
    let route = plan(&state, &query)?;
    Ok(Json(route.to_geojson(&state.network)?))
}

fn passengers(state: &AppState) -> Result<&[PassengerRecord], ApiError> {
    state
        .passengers
        .as_deref()
        .ok_or_else(|| ApiError::NotFound("No passenger data configured".to_string()))
}

async fn get_years(State(state): State<Arc<AppState>>) -> Result<Json<Vec<i32>>, ApiError> {
    Ok(Json(available_years(passengers(&state)?)))
}

async fn get_monthly_stats(
    State(state): State<Arc<AppState>>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<Vec<MonthlyStats>>, ApiError> {
    let Query(query) = query?;
    let stats = monthly_stats(passengers(&state)?, query.year);
    if stats.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No passenger data for {}",
            query.year
        )));
    }
    Ok(Json(stats))
}

async fn get_yearly_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<YearlyStats>>, ApiError> {
    Ok(Json(yearly_stats(passengers(&state)?)))
}

async fn get_yearly_growth(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<YearlyGrowth>>, ApiError> {
    Ok(Json(yearly_growth(passengers(&state)?)))
}

async fn get_line_utilization(
    State(state): State<Arc<AppState>>,
    query: Result<Query<YearQuery>, QueryRejection>,
) -> Result<Json<LineUtilization>, ApiError> {
    let Query(query) = query?;
    line_utilization(passengers(&state)?, query.year)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No passenger data for {}", query.year)))
}
