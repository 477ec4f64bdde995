use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::ids::{TeamId, TournamentId};
use crate::domain::team::{Team, TeamStatistics};

/// Request body for creating or updating a team
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub coach: String,
}

/// Team response, always carrying freshly computed statistics
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub name: String,
    pub coach: String,
    pub statistics: TeamStatistics,
}

impl TeamResponse {
    fn new(team: &Team, statistics: TeamStatistics) -> Self {
        Self {
            id: team.id().map(TeamId::value).unwrap_or_default(),
            tournament_id: team.tournament_id().value(),
            name: team.name().to_string(),
            coach: team.coach().to_string(),
            statistics,
        }
    }
}

/// Register a team in a tournament
///
/// POST /tournaments/:tournament_id/teams
pub async fn create_team(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
    Json(req): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state
        .team_usecases()
        .create(TournamentId::new(tournament_id), &req.name, &req.coach)
        .await?;

    // A new team has no matches yet, so its statistics are all zero.
    let response = TeamResponse::new(&team, TeamStatistics::default());
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a team with its statistics
///
/// GET /teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamResponse>, ApiError> {
    let (team, statistics) = state
        .team_usecases()
        .get_with_statistics(TeamId::new(id))
        .await?;

    Ok(Json(TeamResponse::new(&team, statistics)))
}

/// Get all teams of a tournament, each with statistics
///
/// GET /tournaments/:tournament_id/teams
pub async fn list_teams(
    State(state): State<AppState>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state
        .team_usecases()
        .list_by_tournament(TournamentId::new(tournament_id))
        .await?;

    let responses = teams
        .iter()
        .map(|(team, statistics)| TeamResponse::new(team, *statistics))
        .collect();
    Ok(Json(responses))
}

/// Get the statistics of a team alone
///
/// GET /teams/:id/statistics
pub async fn get_team_statistics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamStatistics>, ApiError> {
    let statistics = state.team_usecases().statistics(TeamId::new(id)).await?;
    Ok(Json(statistics))
}

/// Update a team
///
/// PUT /teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let usecases = state.team_usecases();
    let team = usecases
        .update(TeamId::new(id), &req.name, &req.coach)
        .await?;
    let statistics = usecases.statistics(TeamId::new(id)).await?;

    Ok(Json(TeamResponse::new(&team, statistics)))
}

/// Delete a team and its players
///
/// DELETE /teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.team_usecases().delete(TeamId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
