pub mod club;
pub mod error;
pub mod league;
pub mod shared;
pub mod utils;

pub use club::{Club, ClubDraft, DEFAULT_LOGO_URL};
pub use error::{LeagueError, LeagueResult};
pub use league::{
    parse_match_date, Goals, GoalsInput, League, LeagueMatch, LeagueTable, LeagueTableRow,
    MatchHistory, MatchOutcome, MatchResult, MatchScorer, RosterChanges, StandingsEngine,
    POINTS_FOR_DRAW, POINTS_FOR_WIN,
};
pub use utils::*;
