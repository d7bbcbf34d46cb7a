use crate::league::Goals;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const DEFAULT_MATCH_LIST_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScorer {
    pub scorer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistor: Option<String>,
    /// Minute as entered, e.g. "45+2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl MatchScorer {
    pub fn new(scorer: &str) -> Self {
        MatchScorer {
            scorer: scorer.to_string(),
            assistor: None,
            time: None,
        }
    }

    pub fn with_assist(mut self, assistor: &str) -> Self {
        self.assistor = Some(assistor.to_string());
        self
    }

    pub fn at(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchOutcome {
    pub fn from_score(home_goals: Goals, away_goals: Goals) -> Self {
        match home_goals.cmp(&away_goals) {
            Ordering::Greater => MatchOutcome::HomeWin,
            Ordering::Less => MatchOutcome::AwayWin,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMatch {
    pub id: u32,
    pub home_club_id: u32,
    pub away_club_id: u32,
    pub home_goals: Goals,
    pub away_goals: Goals,
    pub match_date: NaiveDate,
    #[serde(default)]
    pub home_scorers: Vec<MatchScorer>,
    #[serde(default)]
    pub away_scorers: Vec<MatchScorer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub man_of_match: Option<String>,
}

impl LeagueMatch {
    pub fn outcome(&self) -> MatchOutcome {
        MatchOutcome::from_score(self.home_goals, self.away_goals)
    }

    pub fn involves(&self, club_id: u32) -> bool {
        self.home_club_id == club_id || self.away_club_id == club_id
    }
}

/// Append-only match log of a league, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchHistory {
    items: Vec<LeagueMatch>,
}

impl Default for MatchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchHistory {
    pub fn new() -> Self {
        MatchHistory {
            items: Vec::with_capacity(DEFAULT_MATCH_LIST_SIZE),
        }
    }

    pub(crate) fn add(&mut self, item: LeagueMatch) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[LeagueMatch] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&LeagueMatch> {
        self.items.iter().find(|m| m.id == id)
    }

    /// Ids are never reused, so the next one follows the last entry.
    /// `None` once the id space is used up.
    pub fn next_id(&self) -> Option<u32> {
        match self.items.last() {
            Some(last) => last.id.checked_add(1),
            None => Some(1),
        }
    }

    pub fn for_club(&self, club_id: u32) -> impl Iterator<Item = &LeagueMatch> {
        self.items.iter().filter(move |m| m.involves(club_id))
    }
}
