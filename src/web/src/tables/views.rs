use chrono::{DateTime, Utc};
use database::ClubStore;
use serde::Serialize;
use standings::{Club, League, LeagueMatch, LeagueTableRow};

/// A table as returned to clients: standings in display order with their
/// clubs resolved, plus the match log in entry order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueView {
    pub id: u32,
    pub name: String,
    pub user_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<String>,
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub standings: Vec<StandingView>,
    pub matches: Vec<LeagueMatch>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingView {
    pub position: usize,
    #[serde(flatten)]
    pub row: LeagueTableRow,
    pub club: Option<Club>,
}

impl LeagueView {
    pub async fn build(league: League, clubs: &ClubStore) -> Self {
        let mut resolved = clubs.get_many(&league.table.club_ids()).await;

        let standings = league
            .table
            .get()
            .into_iter()
            .enumerate()
            .map(|(idx, row)| StandingView {
                position: idx + 1,
                row: row.clone(),
                club: resolved.remove(&row.club_id),
            })
            .collect();

        LeagueView {
            id: league.id,
            name: league.name,
            user_id: league.user_id,
            user_ref: league.user_ref,
            revision: league.revision,
            created_at: league.created_at,
            updated_at: league.updated_at,
            standings,
            matches: league.matches.items().to_vec(),
        }
    }

    pub async fn build_all(leagues: Vec<League>, clubs: &ClubStore) -> Vec<Self> {
        let mut views = Vec::with_capacity(leagues.len());

        for league in leagues {
            views.push(LeagueView::build(league, clubs).await);
        }

        views
    }
}
