use crate::shared::{optional_text, required_name};
use crate::LeagueResult;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGO_URL: &str =
    "https://img.freepik.com/premium-vector/man-avatar-profile-picture-vector-illustration_268834-538.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: u32,
    pub name: String,
    pub logo_url: String,
}

impl Club {
    pub fn new(id: u32, name: &str, logo_url: Option<&str>) -> LeagueResult<Self> {
        Ok(Club {
            id,
            name: required_name("Club", name)?,
            logo_url: optional_text(logo_url).unwrap_or_else(|| DEFAULT_LOGO_URL.to_string()),
        })
    }

    pub fn from_draft(id: u32, draft: &ClubDraft) -> LeagueResult<Self> {
        Club::new(id, &draft.name, draft.logo_url.as_deref())
    }

    pub fn rename(&mut self, name: &str) -> LeagueResult<()> {
        self.name = required_name("Club", name)?;
        Ok(())
    }

    /// Blank logos keep the current one.
    pub fn change_logo(&mut self, logo_url: Option<&str>) {
        if let Some(logo_url) = optional_text(logo_url) {
            self.logo_url = logo_url;
        }
    }
}

/// Club data submitted before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl ClubDraft {
    pub fn new(name: &str) -> Self {
        ClubDraft {
            name: name.to_string(),
            logo_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeagueError;

    #[test]
    fn test_new_club_uses_default_logo() {
        let club = Club::new(1, "Hill Rangers", None).unwrap();

        assert_eq!(club.name, "Hill Rangers");
        assert_eq!(club.logo_url, DEFAULT_LOGO_URL);
    }

    #[test]
    fn test_blank_logo_falls_back_to_default() {
        let club = Club::new(1, "Hill Rangers", Some("  ")).unwrap();

        assert_eq!(club.logo_url, DEFAULT_LOGO_URL);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(Club::new(1, " ", None), Err(LeagueError::Validation(_))));
    }

    #[test]
    fn test_change_logo_ignores_blank() {
        let mut club = Club::new(1, "Hill Rangers", Some("https://cdn/logo.png")).unwrap();

        club.change_logo(Some(""));
        assert_eq!(club.logo_url, "https://cdn/logo.png");

        club.change_logo(Some("https://cdn/new.png"));
        assert_eq!(club.logo_url, "https://cdn/new.png");
    }

    #[test]
    fn test_rename_keeps_old_name_on_error() {
        let mut club = Club::new(1, "Hill Rangers", None).unwrap();

        assert!(club.rename("").is_err());
        assert_eq!(club.name, "Hill Rangers");
    }
}
