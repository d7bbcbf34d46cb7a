mod error;
mod loaders;
mod repository;
mod stores;

pub use error::{StoreError, StoreResult};
pub use loaders::{DatabaseLoader, SeedEntity};
pub use repository::LeagueRepository;
pub use stores::{ClubStore, LeagueQuery, LeagueStore, MemoryLeagueStore};

use log::info;
use std::collections::HashSet;
use std::time::Duration;

/// Everything the service persists: leagues behind the serialized
/// repository, clubs in their own store.
pub struct Database {
    pub leagues: LeagueRepository<MemoryLeagueStore>,
    pub clubs: ClubStore,
}

impl Database {
    pub fn new(store_timeout: Duration) -> Self {
        Database {
            leagues: LeagueRepository::new(MemoryLeagueStore::new(), store_timeout),
            clubs: ClubStore::new(),
        }
    }

    /// Loads seed data into empty stores. The whole seed is checked before
    /// anything is stored: ids must be unique and below `u32::MAX`, every
    /// club a table or match refers to must be part of the seed, standing
    /// rows must be consistent and match ids must increase.
    pub async fn seed(&self, seed: SeedEntity) -> StoreResult<()> {
        check_seed(&seed)?;

        let (clubs, tables) = (seed.clubs.len(), seed.tables.len());

        for club in seed.clubs {
            self.clubs.restore(club).await?;
        }

        for league in seed.tables {
            self.leagues.store().restore(league).await?;
        }

        info!("seeded {} clubs and {} tables", clubs, tables);

        Ok(())
    }
}

fn check_seed(seed: &SeedEntity) -> StoreResult<()> {
    let mut club_ids = HashSet::with_capacity(seed.clubs.len());

    for club in &seed.clubs {
        if club.id == u32::MAX || !club_ids.insert(club.id) {
            return Err(StoreError::Seed(format!("club id {} is invalid or repeated", club.id)));
        }
    }

    let mut table_ids = HashSet::with_capacity(seed.tables.len());

    for league in &seed.tables {
        if league.id == u32::MAX || !table_ids.insert(league.id) {
            return Err(StoreError::Seed(format!("table id {} is invalid or repeated", league.id)));
        }

        let mut seen = HashSet::new();

        for row in league.table.rows() {
            if !seen.insert(row.club_id) {
                return Err(StoreError::Seed(format!(
                    "table {} lists club {} twice",
                    league.id, row.club_id
                )));
            }

            if !club_ids.contains(&row.club_id) {
                return Err(StoreError::Seed(format!(
                    "table {} lists unknown club {}",
                    league.id, row.club_id
                )));
            }

            if !row.is_consistent() {
                return Err(StoreError::Seed(format!(
                    "table {} has inconsistent standings for club {}",
                    league.id, row.club_id
                )));
            }
        }

        let mut last_id = 0;

        for item in league.matches.items() {
            if item.id <= last_id {
                return Err(StoreError::Seed(format!(
                    "table {} has match {} out of order",
                    league.id, item.id
                )));
            }
            last_id = item.id;

            if item.home_club_id == item.away_club_id
                || !club_ids.contains(&item.home_club_id)
                || !club_ids.contains(&item.away_club_id)
            {
                return Err(StoreError::Seed(format!(
                    "table {} match {} refers to invalid clubs",
                    league.id, item.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use standings::{Club, League};

    #[tokio::test]
    async fn test_seed_demo_data() {
        let database = Database::new(Duration::from_secs(1));

        database.seed(DatabaseLoader::demo().unwrap()).await.unwrap();

        let tables = database.leagues.list(LeagueQuery::default()).await.unwrap();
        assert!(!tables.is_empty());

        for league in tables {
            for club_id in league.table.club_ids() {
                assert!(database.clubs.get(club_id).await.is_some());
            }
        }
    }

    #[tokio::test]
    async fn test_seed_rejects_unknown_club() {
        let database = Database::new(Duration::from_secs(1));

        let mut league = League::new(1, "Broken", 1, None).unwrap();
        league.table.add_clubs(&[5]).unwrap();

        let seed = SeedEntity {
            clubs: vec![Club::new(1, "Only Club", None).unwrap()],
            tables: vec![league],
        };

        assert!(matches!(database.seed(seed).await, Err(StoreError::Seed(_))));
        assert!(database.clubs.get(1).await.is_none());
    }

    fn demo_with(change: impl FnOnce(&mut SeedEntity)) -> SeedEntity {
        let mut seed = DatabaseLoader::demo().unwrap();
        change(&mut seed);
        seed
    }

    #[tokio::test]
    async fn test_seed_rejects_bad_match_log() {
        let cases = [
            demo_with(|seed| {
                let mut matches = serde_json::to_value(&seed.tables[0].matches).unwrap();
                matches[1]["id"] = serde_json::json!(1);
                seed.tables[0].matches = serde_json::from_value(matches).unwrap();
            }),
            demo_with(|seed| {
                let mut matches = serde_json::to_value(&seed.tables[0].matches).unwrap();
                matches[0]["awayClubId"] = serde_json::json!(99);
                seed.tables[0].matches = serde_json::from_value(matches).unwrap();
            }),
            demo_with(|seed| seed.clubs[0].id = u32::MAX),
            demo_with(|seed| seed.tables[0].id = u32::MAX),
        ];

        for seed in cases {
            let database = Database::new(Duration::from_secs(1));

            assert!(matches!(database.seed(seed).await, Err(StoreError::Seed(_))));
            assert!(database.clubs.list(0, 10).await.is_empty());
        }
    }
}
