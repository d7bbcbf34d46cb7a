use crate::league::{LeagueTable, MatchHistory};
use crate::shared::{optional_text, required_name};
use crate::{LeagueError, LeagueResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's table: clubs with their running standings and the match log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: u32,
    pub name: String,
    pub user_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ref: Option<String>,
    #[serde(rename = "standings", default)]
    pub table: LeagueTable,
    #[serde(default)]
    pub matches: MatchHistory,
    /// Advanced by the store on every successful save.
    #[serde(default)]
    pub revision: u64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl League {
    pub fn new(id: u32, name: &str, user_id: u32, user_ref: Option<&str>) -> LeagueResult<Self> {
        let now = Utc::now();

        Ok(League {
            id,
            name: required_name("Table", name)?,
            user_id,
            user_ref: optional_text(user_ref),
            table: LeagueTable::default(),
            matches: MatchHistory::new(),
            revision: 0,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_owned_by(&self, user_id: u32) -> bool {
        self.user_id == user_id
    }

    pub fn ensure_owner(&self, user_id: u32, message: &str) -> LeagueResult<()> {
        if self.is_owned_by(user_id) {
            Ok(())
        } else {
            Err(LeagueError::unauthorized(message))
        }
    }

    pub fn rename(&mut self, name: &str) -> LeagueResult<()> {
        self.name = required_name("Table", name)?;
        self.touch();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
