//! Dashboard API handler

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::core::ServerState;
use crate::dashboard::{aggregate, filter_by_date};
use crate::db::repository::ComplaintRepository;
use crate::utils::{AppError, AppResponse, AppResult};
use shared::dashboard::DashboardStats;

/// Optional inclusive date range, `YYYY-MM-DD`
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(rename = "startDate")]
    start_date: Option<String>,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
}

fn parse_date(value: Option<&str>, param: &str) -> AppResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(v) if v.trim().is_empty() => Ok(None),
        Some(v) => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::validation(format!("Invalid {param}: expected YYYY-MM-DD"))),
    }
}

/// GET /api/dashboard/stats?startDate=&endDate=
pub async fn stats(
    State(state): State<ServerState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<AppResponse<DashboardStats>>> {
    let start = parse_date(query.start_date.as_deref(), "startDate")?;
    let end = parse_date(query.end_date.as_deref(), "endDate")?;

    let repo = ComplaintRepository::new(state.get_db());
    let records = repo.find_all().await?;
    let filtered = filter_by_date(records, start, end);

    Ok(Json(AppResponse::success(aggregate(&filtered, Utc::now()))))
}
