use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::ids::{PlayerId, TeamId, TournamentId};
use crate::domain::player::Player;

/// Request body for creating or updating a player
#[derive(Debug, Deserialize)]
pub struct PlayerRequest {
    pub name: String,
    pub last_name: String,
    pub identification_number: String,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub last_name: String,
    pub identification_number: String,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().map(PlayerId::value).unwrap_or_default(),
            team_id: player.team_id().value(),
            name: player.name().to_string(),
            last_name: player.last_name().to_string(),
            identification_number: player.identification_number().to_string(),
        }
    }
}

/// Register a player with a team
///
/// POST /tournaments/:tournament_id/teams/:team_id/players
pub async fn create_player(
    State(state): State<AppState>,
    Path((tournament_id, team_id)): Path<(i64, i64)>,
    Json(req): Json<PlayerRequest>,
) -> Result<(StatusCode, Json<PlayerResponse>), ApiError> {
    let player = state
        .player_usecases()
        .create(
            TournamentId::new(tournament_id),
            TeamId::new(team_id),
            &req.name,
            &req.last_name,
            &req.identification_number,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PlayerResponse::from(&player))))
}

/// Get a player by ID
///
/// GET /players/:id
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = state
        .player_usecases()
        .get(PlayerId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("player not found: {id}")))?;

    Ok(Json(PlayerResponse::from(&player)))
}

/// Get the roster of a team
///
/// GET /tournaments/:tournament_id/teams/:team_id/players
pub async fn list_players(
    State(state): State<AppState>,
    Path((_tournament_id, team_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<PlayerResponse>>, ApiError> {
    let players = state
        .player_usecases()
        .list_by_team(TeamId::new(team_id))
        .await?;

    let responses = players.iter().map(PlayerResponse::from).collect();
    Ok(Json(responses))
}

/// Update a player
///
/// PUT /players/:id
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PlayerRequest>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let player = state
        .player_usecases()
        .update(
            PlayerId::new(id),
            &req.name,
            &req.last_name,
            &req.identification_number,
        )
        .await?;

    Ok(Json(PlayerResponse::from(&player)))
}

/// Delete a player
///
/// DELETE /players/:id
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.player_usecases().delete(PlayerId::new(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
