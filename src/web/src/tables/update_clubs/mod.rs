pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::info;
use serde::{Deserialize, Serialize};
use standings::{ClubDraft, LeagueError, LeagueResult, RosterChanges};
use std::collections::HashSet;

const NOT_OWNER: &str = "You can only update clubs of your own tables!";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(default)]
    pub club_id: Option<u32>,
    #[serde(flatten)]
    pub draft: ClubDraft,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClubsRequest {
    pub table_id: Option<u32>,
    /// The complete new roster; required.
    pub clubs: Option<Vec<RosterEntry>>,
}

#[derive(Debug, Serialize)]
pub struct UpdateClubsResponse {
    pub success: bool,
    pub message: &'static str,
    pub changes: RosterChanges,
    pub table: LeagueView,
}

/// Entries may only point at clubs already on this table; everything else
/// has to come in without an id and becomes a new club.
fn check_entries(entries: &[(Option<u32>, ClubDraft)], current: &[u32]) -> LeagueResult<()> {
    let current: HashSet<u32> = current.iter().copied().collect();

    match entries
        .iter()
        .filter_map(|(club_id, _)| *club_id)
        .find(|id| !current.contains(id))
    {
        Some(id) => Err(LeagueError::not_found(format!(
            "Club {} is not part of this table!",
            id
        ))),
        None => Ok(()),
    }
}

pub async fn table_update_clubs_action(
    State(state): State<AppData>,
    user: CurrentUser,
    payload: Result<Json<UpdateClubsRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let table_id = request
        .table_id
        .ok_or_else(|| LeagueError::validation("tableId is required"))?;

    let entries: Vec<(Option<u32>, ClubDraft)> = request
        .clubs
        .ok_or_else(|| LeagueError::validation("clubs is required"))?
        .into_iter()
        .map(|entry| (entry.club_id, entry.draft))
        .collect();

    state
        .database
        .leagues
        .find(table_id)
        .await?
        .ensure_owner(user.id, NOT_OWNER)?;

    // renames and new clubs are stored only once the table has been saved
    let batch = state.database.clubs.stage(&entries).await?;
    let club_ids = batch.ids();

    let (league, changes) = state
        .database
        .leagues
        .update(table_id, |league| {
            league.ensure_owner(user.id, NOT_OWNER)?;
            check_entries(&entries, &league.table.club_ids())?;
            let changes = league.table.reconcile(&club_ids)?;
            league.touch();
            Ok(changes)
        })
        .await?;

    state.database.clubs.commit(batch).await;

    info!(
        "table {}: roster updated, {} removed, {} kept, {} added",
        league.id,
        changes.removed.len(),
        changes.kept.len(),
        changes.added.len()
    );

    Ok(Json(UpdateClubsResponse {
        success: true,
        message: "Clubs updated successfully!",
        changes,
        table: LeagueView::build(league, &state.database.clubs).await,
    }))
}
