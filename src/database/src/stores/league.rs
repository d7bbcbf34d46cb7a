use crate::{StoreError, StoreResult};
use log::debug;
use standings::League;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// Which leagues to list. Results come back in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueQuery {
    pub user_id: Option<u32>,
    pub club_id: Option<u32>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl LeagueQuery {
    pub fn page(offset: usize, limit: usize) -> Self {
        LeagueQuery {
            offset,
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn owned_by(user_id: u32) -> Self {
        LeagueQuery {
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    pub fn listing_club(club_id: u32) -> Self {
        LeagueQuery {
            club_id: Some(club_id),
            ..Default::default()
        }
    }

    fn matches(&self, league: &League) -> bool {
        self.user_id.is_none_or(|user_id| league.user_id == user_id)
            && self.club_id.is_none_or(|club_id| league.table.contains(club_id))
    }
}

/// Whole-document persistence for leagues.
pub trait LeagueStore: Send + Sync + 'static {
    fn find_by_id(&self, id: u32) -> impl Future<Output = StoreResult<Option<League>>> + Send;

    /// Stores a new league under a fresh id and returns it as stored.
    fn insert(&self, league: League) -> impl Future<Output = StoreResult<League>> + Send;

    /// Replaces the stored document only if its revision still equals
    /// `league.revision`; the saved copy carries the next revision.
    fn save(&self, league: League) -> impl Future<Output = StoreResult<League>> + Send;

    fn delete(&self, id: u32) -> impl Future<Output = StoreResult<bool>> + Send;

    fn list(&self, query: LeagueQuery) -> impl Future<Output = StoreResult<Vec<League>>> + Send;
}

pub struct MemoryLeagueStore {
    leagues: RwLock<BTreeMap<u32, League>>,
    next_id: AtomicU32,
}

impl Default for MemoryLeagueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLeagueStore {
    pub fn new() -> Self {
        MemoryLeagueStore {
            leagues: RwLock::new(BTreeMap::new()),
            next_id: AtomicU32::new(1),
        }
    }

    /// Puts a league back under its own id, used for seeding.
    pub async fn restore(&self, league: League) -> StoreResult<()> {
        let mut leagues = self.leagues.write().await;

        if leagues.contains_key(&league.id) {
            return Err(StoreError::Duplicate(format!("Table {}", league.id)));
        }

        let next_id = league
            .id
            .checked_add(1)
            .ok_or_else(|| StoreError::Seed(format!("table id {} is out of range", league.id)))?;

        self.next_id.fetch_max(next_id, Ordering::SeqCst);
        leagues.insert(league.id, league);

        Ok(())
    }
}

impl LeagueStore for MemoryLeagueStore {
    async fn find_by_id(&self, id: u32) -> StoreResult<Option<League>> {
        Ok(self.leagues.read().await.get(&id).cloned())
    }

    async fn insert(&self, mut league: League) -> StoreResult<League> {
        let mut leagues = self.leagues.write().await;

        league.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        league.revision = 1;

        leagues.insert(league.id, league.clone());

        debug!("table {} inserted", league.id);

        Ok(league)
    }

    async fn save(&self, mut league: League) -> StoreResult<League> {
        let mut leagues = self.leagues.write().await;

        let stored = leagues
            .get_mut(&league.id)
            .ok_or_else(|| StoreError::NotFound("Table".to_string()))?;

        if stored.revision != league.revision {
            return Err(StoreError::Conflict {
                id: league.id,
                expected: league.revision,
                actual: stored.revision,
            });
        }

        league.revision += 1;
        *stored = league.clone();

        debug!("table {} saved at revision {}", league.id, league.revision);

        Ok(league)
    }

    async fn delete(&self, id: u32) -> StoreResult<bool> {
        Ok(self.leagues.write().await.remove(&id).is_some())
    }

    async fn list(&self, query: LeagueQuery) -> StoreResult<Vec<League>> {
        let leagues = self.leagues.read().await;

        Ok(leagues
            .values()
            .filter(|league| query.matches(league))
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league(name: &str, user_id: u32) -> League {
        League::new(0, name, user_id, None).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_revision() {
        let store = MemoryLeagueStore::new();

        let first = store.insert(league("First", 1)).await.unwrap();
        let second = store.insert(league("Second", 1)).await.unwrap();

        assert_eq!((first.id, first.revision), (1, 1));
        assert_eq!(second.id, 2);
        assert_eq!(store.find_by_id(2).await.unwrap().unwrap().name, "Second");
    }

    #[tokio::test]
    async fn test_save_advances_revision() {
        let store = MemoryLeagueStore::new();
        let mut stored = store.insert(league("First", 1)).await.unwrap();

        stored.name = "Renamed".to_string();
        let saved = store.save(stored).await.unwrap();

        assert_eq!(saved.revision, 2);
        assert_eq!(store.find_by_id(saved.id).await.unwrap().unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn test_stale_save_is_a_conflict() {
        let store = MemoryLeagueStore::new();
        let stored = store.insert(league("First", 1)).await.unwrap();

        let mut first_copy = stored.clone();
        let mut second_copy = stored;

        first_copy.name = "Winner".to_string();
        store.save(first_copy).await.unwrap();

        second_copy.name = "Loser".to_string();
        let err = store.save(second_copy).await.unwrap_err();

        assert!(matches!(err, StoreError::Conflict { expected: 1, actual: 2, .. }));
        assert_eq!(store.find_by_id(1).await.unwrap().unwrap().name, "Winner");
    }

    #[tokio::test]
    async fn test_save_missing_league() {
        let store = MemoryLeagueStore::new();
        let mut ghost = league("Ghost", 1);
        ghost.id = 9;

        assert!(matches!(store.save(ghost).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_filters_and_pages() {
        let store = MemoryLeagueStore::new();

        for (name, user_id) in [("A", 1), ("B", 2), ("C", 1), ("D", 1)] {
            store.insert(league(name, user_id)).await.unwrap();
        }

        let owned: Vec<String> = store
            .list(LeagueQuery::owned_by(1))
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(owned, vec!["A", "C", "D"]);

        let page: Vec<u32> = store
            .list(LeagueQuery::page(1, 2))
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(page, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_restore_keeps_id_and_moves_sequence() {
        let store = MemoryLeagueStore::new();
        let mut seeded = league("Seeded", 1);
        seeded.id = 7;

        store.restore(seeded.clone()).await.unwrap();

        assert!(matches!(store.restore(seeded).await, Err(StoreError::Duplicate(_))));
        assert_eq!(store.insert(league("Next", 1)).await.unwrap().id, 8);
    }

    #[tokio::test]
    async fn test_restore_rejects_last_id() {
        let store = MemoryLeagueStore::new();
        let mut seeded = league("Edge", 1);
        seeded.id = u32::MAX;

        assert!(matches!(store.restore(seeded).await, Err(StoreError::Seed(_))));
        assert!(store.find_by_id(u32::MAX).await.unwrap().is_none());
    }
}
