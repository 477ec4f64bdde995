use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::ids::TournamentId;
use crate::domain::tournament::{Tournament, TournamentStatus};

/// Request body for creating a tournament
#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
    pub description: String,
}

/// Request body for updating a tournament
#[derive(Debug, Deserialize)]
pub struct UpdateTournamentRequest {
    pub name: String,
    pub description: String,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: String,
}

impl From<&Tournament> for TournamentResponse {
    fn from(tournament: &Tournament) -> Self {
        Self {
            id: tournament.id().map(TournamentId::value).unwrap_or_default(),
            name: tournament.name().to_string(),
            description: tournament.description().to_string(),
            status: tournament.status().to_string(),
        }
    }
}

/// Create a new tournament
///
/// POST /tournaments
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<TournamentResponse>), ApiError> {
    let tournament = state
        .tournament_usecases()
        .create(&req.name, &req.description)
        .await?;

    Ok((StatusCode::CREATED, Json(TournamentResponse::from(&tournament))))
}

/// Get a tournament by ID
///
/// GET /tournaments/:id
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let tournament = state
        .tournament_usecases()
        .get(TournamentId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("tournament not found: {id}")))?;

    Ok(Json(TournamentResponse::from(&tournament)))
}

/// Get all tournaments
///
/// GET /tournaments
pub async fn list_tournaments(
    State(state): State<AppState>,
) -> Result<Json<Vec<TournamentResponse>>, ApiError> {
    let tournaments = state.tournament_usecases().list().await?;
    let responses = tournaments.iter().map(TournamentResponse::from).collect();

    Ok(Json(responses))
}

/// Update a tournament
///
/// PUT /tournaments/:id
pub async fn update_tournament(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTournamentRequest>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let status = req
        .status
        .as_deref()
        .map(str::parse::<TournamentStatus>)
        .transpose()?;

    let tournament = state
        .tournament_usecases()
        .update(TournamentId::new(id), &req.name, &req.description, status)
        .await?;

    Ok(Json(TournamentResponse::from(&tournament)))
}

/// Delete a tournament with everything it owns
///
/// DELETE /tournaments/:id
pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .tournament_usecases()
        .delete(TournamentId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
