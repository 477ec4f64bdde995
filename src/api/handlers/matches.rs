use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::ids::{MatchId, TeamId, TournamentId};
use crate::domain::matches::{Match, MatchStatus};
use crate::domain::repositories::{MatchFilter, Page};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// Request body for scheduling a match
#[derive(Debug, Deserialize)]
pub struct ScheduleMatchRequest {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: DateTime<Utc>,
    pub field: String,
}

/// Request body for recording a result
#[derive(Debug, Deserialize)]
pub struct RecordResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}

/// Query parameters for the paged match search
#[derive(Debug, Deserialize)]
pub struct MatchSearchQuery {
    pub team_id: Option<i64>,
    pub status: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub match_date: DateTime<Utc>,
    pub field: String,
    pub status: String,
}

impl From<&Match> for MatchResponse {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id().map(MatchId::value).unwrap_or_default(),
            tournament_id: m.tournament_id().value(),
            home_team_id: m.home_team_id().value(),
            away_team_id: m.away_team_id().value(),
            home_score: m.home_score(),
            away_score: m.away_score(),
            match_date: m.match_date(),
            field: m.field().to_string(),
            status: m.status().to_string(),
        }
    }
}

/// Schedule a match between two teams of a tournament
///
/// POST /tournaments/:tournament_id/matches
pub async fn schedule_match(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
    Json(req): Json<ScheduleMatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let m = state
        .match_usecases()
        .schedule(
            TournamentId::new(tournament_id),
            TeamId::new(req.home_team_id),
            TeamId::new(req.away_team_id),
            req.match_date,
            &req.field,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(&m))))
}

/// Get a match by ID
///
/// GET /matches/:id
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MatchResponse>, ApiError> {
    let m = state
        .match_usecases()
        .get(MatchId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("match not found: {id}")))?;

    Ok(Json(MatchResponse::from(&m)))
}

/// Paged, filtered search over a tournament's matches
///
/// GET /tournaments/:tournament_id/matches
pub async fn search_matches(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
    Query(query): Query<MatchSearchQuery>,
) -> Result<Json<Page<MatchResponse>>, ApiError> {
    let status = query
        .status
        .as_deref()
        .map(str::parse::<MatchStatus>)
        .transpose()?;

    let filter = MatchFilter {
        tournament_id: Some(TournamentId::new(tournament_id)),
        team_id: query.team_id.map(TeamId::new),
        status,
        page_number: query.page.unwrap_or(0),
        page_size: query
            .size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE),
    };

    let page = state.match_usecases().search(&filter).await?;
    Ok(Json(page.map(|m| MatchResponse::from(&m))))
}

/// Record the final score of a match
///
/// PUT /matches/:id/result
pub async fn record_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RecordResultRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let m = state
        .match_usecases()
        .record_result(MatchId::new(id), req.home_score, req.away_score)
        .await?;

    Ok(Json(MatchResponse::from(&m)))
}

/// Cancel a match that has no result
///
/// PUT /matches/:id/cancel
pub async fn cancel_match(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MatchResponse>, ApiError> {
    let m = state.match_usecases().cancel(MatchId::new(id)).await?;

    Ok(Json(MatchResponse::from(&m)))
}
