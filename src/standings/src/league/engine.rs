use crate::league::{Goals, League, LeagueMatch, MatchScorer};
use crate::shared::optional_text;
use crate::{LeagueError, LeagueResult};
use chrono::NaiveDate;
use log::debug;

/// A validated match result, ready to be applied to a league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub home_club_id: u32,
    pub away_club_id: u32,
    pub home_goals: Goals,
    pub away_goals: Goals,
    pub match_date: NaiveDate,
    pub home_scorers: Vec<MatchScorer>,
    pub away_scorers: Vec<MatchScorer>,
    pub man_of_match: Option<String>,
}

impl MatchResult {
    pub fn new(
        home_club_id: u32,
        away_club_id: u32,
        home_goals: Goals,
        away_goals: Goals,
        match_date: NaiveDate,
    ) -> Self {
        MatchResult {
            home_club_id,
            away_club_id,
            home_goals,
            away_goals,
            match_date,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
            man_of_match: None,
        }
    }

    pub fn with_scorers(mut self, home: Vec<MatchScorer>, away: Vec<MatchScorer>) -> Self {
        self.home_scorers = home;
        self.away_scorers = away;
        self
    }

    pub fn with_man_of_match(mut self, name: &str) -> Self {
        self.man_of_match = Some(name.to_string());
        self
    }

    fn check_details(&self) -> LeagueResult<()> {
        if self.home_club_id == self.away_club_id {
            return Err(LeagueError::validation(
                "Home and away club must be different",
            ));
        }

        let blank_scorer = self
            .home_scorers
            .iter()
            .chain(self.away_scorers.iter())
            .any(|s| s.scorer.trim().is_empty());

        if blank_scorer {
            return Err(LeagueError::validation("Every scorer entry needs a scorer"));
        }

        Ok(())
    }

    fn into_match(self, id: u32) -> LeagueMatch {
        LeagueMatch {
            id,
            home_club_id: self.home_club_id,
            away_club_id: self.away_club_id,
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            match_date: self.match_date,
            home_scorers: self.home_scorers.into_iter().map(tidy_scorer).collect(),
            away_scorers: self.away_scorers.into_iter().map(tidy_scorer).collect(),
            man_of_match: optional_text(self.man_of_match.as_deref()),
        }
    }
}

fn tidy_scorer(scorer: MatchScorer) -> MatchScorer {
    MatchScorer {
        scorer: scorer.scorer.trim().to_string(),
        assistor: optional_text(scorer.assistor.as_deref()),
        time: optional_text(scorer.time.as_deref()),
    }
}

pub struct StandingsEngine;

impl StandingsEngine {
    /// Applies a finished match to the league's standings and appends it to
    /// the match log. Every check runs before the first mutation, so on error
    /// the league is left exactly as it was. Returns the new match id.
    pub fn record_match_result(
        league: &mut League,
        caller_id: u32,
        result: MatchResult,
    ) -> LeagueResult<u32> {
        league.ensure_owner(
            caller_id,
            "You can only update the match result for your own tables!",
        )?;

        let home = league.table.position_of(result.home_club_id);
        let away = league.table.position_of(result.away_club_id);

        let (home, away) = match (home, away) {
            (Some(home), Some(away)) => (home, away),
            _ => return Err(LeagueError::not_found("Clubs not found in the table!")),
        };

        result.check_details()?;

        let match_id = league
            .matches
            .next_id()
            .ok_or_else(|| LeagueError::conflict("No match ids left for this table"))?;

        league
            .table
            .apply(home, away, result.home_goals, result.away_goals);

        debug!(
            "league {}: match {} recorded, {} {}-{} {}",
            league.id,
            match_id,
            result.home_club_id,
            result.home_goals,
            result.away_goals,
            result.away_club_id
        );

        league.matches.add(result.into_match(match_id));
        league.touch();

        Ok(match_id)
    }
}
