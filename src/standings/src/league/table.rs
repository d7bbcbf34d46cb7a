use crate::league::{Goals, MatchOutcome};
use crate::{LeagueError, LeagueResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTableRow {
    pub club_id: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl LeagueTableRow {
    pub fn new(club_id: u32) -> Self {
        LeagueTableRow {
            club_id,
            played: 0,
            won: 0,
            lost: 0,
            drawn: 0,
            goals_scored: 0,
            goals_conceded: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    pub(crate) fn add_goals(&mut self, scored: Goals, conceded: Goals) {
        self.played += 1;
        self.goals_scored += u32::from(scored.get());
        self.goals_conceded += u32::from(conceded.get());
    }

    pub(crate) fn add_win(&mut self) {
        self.won += 1;
        self.points += POINTS_FOR_WIN;
    }

    pub(crate) fn add_loss(&mut self) {
        self.lost += 1;
    }

    pub(crate) fn add_draw(&mut self) {
        self.drawn += 1;
        self.points += POINTS_FOR_DRAW;
    }

    pub fn computed_goal_difference(&self) -> i64 {
        i64::from(self.goals_scored) - i64::from(self.goals_conceded)
    }

    /// Rebuilds goal difference from the running totals.
    pub fn recompute_goal_difference(&mut self) {
        self.goal_difference = self.computed_goal_difference();
    }

    pub fn is_consistent(&self) -> bool {
        self.won
            .checked_add(self.lost)
            .and_then(|total| total.checked_add(self.drawn))
            == Some(self.played)
            && self.goal_difference == self.computed_goal_difference()
    }
}

/// What a roster reconciliation changed, by club id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterChanges {
    pub removed: Vec<u32>,
    pub kept: Vec<u32>,
    pub added: Vec<u32>,
}

impl RosterChanges {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Standings of one league, one row per club in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueTable {
    rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new(club_ids: &[u32]) -> LeagueResult<Self> {
        let mut table = LeagueTable::default();
        table.add_clubs(club_ids)?;
        Ok(table)
    }

    pub fn rows(&self) -> &[LeagueTableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, club_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.club_id == club_id)
    }

    pub fn contains(&self, club_id: u32) -> bool {
        self.row(club_id).is_some()
    }

    pub fn club_ids(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.club_id).collect()
    }

    pub(crate) fn position_of(&self, club_id: u32) -> Option<usize> {
        self.rows.iter().position(|r| r.club_id == club_id)
    }

    pub(crate) fn row_at_mut(&mut self, index: usize) -> &mut LeagueTableRow {
        &mut self.rows[index]
    }

    /// Appends fresh rows. Fails without changes if any id is already present
    /// or repeated.
    pub fn add_clubs(&mut self, club_ids: &[u32]) -> LeagueResult<()> {
        let mut seen = HashSet::with_capacity(club_ids.len());

        for club_id in club_ids {
            if !seen.insert(*club_id) || self.contains(*club_id) {
                return Err(LeagueError::validation(format!(
                    "Club {} is already in the table",
                    club_id
                )));
            }
        }

        self.rows
            .extend(club_ids.iter().map(|club_id| LeagueTableRow::new(*club_id)));

        Ok(())
    }

    /// Diffs the roster by club id: rows missing from `club_ids` are removed,
    /// present rows keep their statistics, new ids are appended with zeroed
    /// rows in the given order.
    pub fn reconcile(&mut self, club_ids: &[u32]) -> LeagueResult<RosterChanges> {
        let mut wanted = HashSet::with_capacity(club_ids.len());

        for club_id in club_ids {
            if !wanted.insert(*club_id) {
                return Err(LeagueError::validation(format!(
                    "Club {} is listed more than once",
                    club_id
                )));
            }
        }

        let mut changes = RosterChanges::default();

        self.rows.retain(|row| {
            if wanted.contains(&row.club_id) {
                changes.kept.push(row.club_id);
                true
            } else {
                changes.removed.push(row.club_id);
                false
            }
        });

        for club_id in club_ids {
            if !changes.kept.contains(club_id) {
                self.rows.push(LeagueTableRow::new(*club_id));
                changes.added.push(*club_id);
            }
        }

        Ok(changes)
    }

    /// Rows in display order: points, then goal difference, both descending.
    /// Ties keep storage order.
    pub fn get(&self) -> Vec<&LeagueTableRow> {
        let mut ordered: Vec<&LeagueTableRow> = self.rows.iter().collect();

        ordered.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        });

        ordered
    }

    pub(crate) fn apply(&mut self, home: usize, away: usize, home_goals: Goals, away_goals: Goals) {
        self.row_at_mut(home).add_goals(home_goals, away_goals);
        self.row_at_mut(away).add_goals(away_goals, home_goals);

        match MatchOutcome::from_score(home_goals, away_goals) {
            MatchOutcome::HomeWin => {
                self.row_at_mut(home).add_win();
                self.row_at_mut(away).add_loss();
            }
            MatchOutcome::AwayWin => {
                self.row_at_mut(away).add_win();
                self.row_at_mut(home).add_loss();
            }
            MatchOutcome::Draw => {
                self.row_at_mut(home).add_draw();
                self.row_at_mut(away).add_draw();
            }
        }

        self.row_at_mut(home).recompute_goal_difference();
        self.row_at_mut(away).recompute_goal_difference();
    }
}
