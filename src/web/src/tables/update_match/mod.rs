pub mod routes;

use crate::tables::LeagueView;
use crate::{ApiResult, AppData, CurrentUser};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use log::{info, warn};
use serde::Deserialize;
use standings::{
    parse_match_date, Goals, GoalsInput, LeagueError, LeagueResult, MatchResult, MatchScorer,
    StandingsEngine,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchRequest {
    pub table_id: Option<u32>,
    pub home_club_id: Option<u32>,
    pub away_club_id: Option<u32>,
    pub home_goals: Option<GoalsInput>,
    pub away_goals: Option<GoalsInput>,
    pub match_date: Option<String>,
    #[serde(default)]
    pub home_scorers: Option<Vec<MatchScorer>>,
    #[serde(default)]
    pub away_scorers: Option<Vec<MatchScorer>>,
    #[serde(default)]
    pub man_of_match: Option<String>,
}

fn required<T>(field: &str, value: Option<T>) -> LeagueResult<T> {
    value.ok_or_else(|| LeagueError::validation(format!("{} is required", field)))
}

impl UpdateMatchRequest {
    /// Checks every field before anything is loaded.
    pub fn validate(self) -> LeagueResult<(u32, MatchResult)> {
        let table_id = required("tableId", self.table_id)?;
        let home_club_id = required("homeClubId", self.home_club_id)?;
        let away_club_id = required("awayClubId", self.away_club_id)?;
        let home_goals = Goals::from_input("homeGoals", required("homeGoals", self.home_goals)?)?;
        let away_goals = Goals::from_input("awayGoals", required("awayGoals", self.away_goals)?)?;
        let match_date = parse_match_date(&required("matchDate", self.match_date)?)?;

        let mut result = MatchResult::new(home_club_id, away_club_id, home_goals, away_goals, match_date)
            .with_scorers(
                self.home_scorers.unwrap_or_default(),
                self.away_scorers.unwrap_or_default(),
            );

        if let Some(man_of_match) = self.man_of_match.as_deref() {
            result = result.with_man_of_match(man_of_match);
        }

        Ok((table_id, result))
    }
}

pub async fn table_update_match_action(
    State(state): State<AppData>,
    user: CurrentUser,
    payload: Result<Json<UpdateMatchRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;

    let (table_id, result) = request.validate().inspect_err(|e| {
        warn!("match result rejected for user {}: {}", user.id, e);
    })?;

    let (league, match_id) = state
        .database
        .leagues
        .update(table_id, |league| {
            StandingsEngine::record_match_result(league, user.id, result)
        })
        .await
        .inspect_err(|e| {
            warn!("match result for table {} by user {} failed: {}", table_id, user.id, e);
        })?;

    info!(
        "table {}: match {} recorded by user {} (revision {})",
        league.id, match_id, user.id, league.revision
    );

    Ok(Json(LeagueView::build(league, &state.database.clubs).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request() -> UpdateMatchRequest {
        UpdateMatchRequest {
            table_id: Some(1),
            home_club_id: Some(1),
            away_club_id: Some(2),
            home_goals: Some(GoalsInput::Integer(2)),
            away_goals: Some(GoalsInput::Text("1".to_string())),
            match_date: Some("2024-01-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let (table_id, result) = request().validate().unwrap();

        assert_eq!(table_id, 1);
        assert_eq!(result.home_goals, Goals::new(2));
        assert_eq!(result.away_goals, Goals::new(1));
        assert_eq!(result.match_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let cases: [(&str, fn(&mut UpdateMatchRequest)); 6] = [
            ("tableId", |r| r.table_id = None),
            ("homeClubId", |r| r.home_club_id = None),
            ("awayClubId", |r| r.away_club_id = None),
            ("homeGoals", |r| r.home_goals = None),
            ("awayGoals", |r| r.away_goals = None),
            ("matchDate", |r| r.match_date = None),
        ];

        for (field, strip) in cases {
            let mut req = request();
            strip(&mut req);

            assert_eq!(
                req.validate().unwrap_err(),
                LeagueError::Validation(format!("{} is required", field))
            );
        }
    }

    #[test]
    fn test_non_numeric_goals_rejected() {
        let mut req = request();
        req.home_goals = Some(GoalsInput::Text("two".to_string()));

        assert!(matches!(req.validate(), Err(LeagueError::Validation(_))));
    }

    #[test]
    fn test_body_field_names() {
        let req: UpdateMatchRequest = serde_json::from_str(
            r#"{
                "tableId": 4,
                "homeClubId": 7,
                "awayClubId": 9,
                "homeGoals": "3",
                "awayGoals": 0,
                "matchDate": "2024-05-18T15:00:00.000Z",
                "homeScorers": [{"scorer": "Ade", "assistor": "Bello", "time": "12"}],
                "manOfMatch": "Ade"
            }"#,
        )
        .unwrap();

        let (table_id, result) = req.validate().unwrap();

        assert_eq!(table_id, 4);
        assert_eq!((result.home_club_id, result.away_club_id), (7, 9));
        assert_eq!(result.home_goals, Goals::new(3));
        assert_eq!(result.home_scorers[0].assistor.as_deref(), Some("Bello"));
        assert_eq!(result.man_of_match.as_deref(), Some("Ade"));
    }
}
