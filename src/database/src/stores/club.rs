use crate::{StoreError, StoreResult};
use log::debug;
use standings::{Club, ClubDraft, LeagueError};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// Club writes prepared ahead of a table update. Nothing is visible until
/// the batch is committed; a dropped batch only leaves unused ids behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubBatch {
    clubs: Vec<Club>,
}

impl ClubBatch {
    pub fn ids(&self) -> Vec<u32> {
        self.clubs.iter().map(|club| club.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }
}

pub struct ClubStore {
    clubs: RwLock<BTreeMap<u32, Club>>,
    next_id: AtomicU32,
}

impl Default for ClubStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubStore {
    pub fn new() -> Self {
        ClubStore {
            clubs: RwLock::new(BTreeMap::new()),
            next_id: AtomicU32::new(1),
        }
    }

    pub async fn create(&self, draft: &ClubDraft) -> StoreResult<Club> {
        let mut clubs = self.clubs.write().await;

        let club = Club::from_draft(self.next_id.load(Ordering::SeqCst), draft)?;
        self.next_id.fetch_add(1, Ordering::SeqCst);

        clubs.insert(club.id, club.clone());

        debug!("club {} created", club.id);

        Ok(club)
    }

    pub(crate) async fn restore(&self, club: Club) -> StoreResult<()> {
        let mut clubs = self.clubs.write().await;

        if clubs.contains_key(&club.id) {
            return Err(StoreError::Duplicate(format!("Club {}", club.id)));
        }

        let next_id = club
            .id
            .checked_add(1)
            .ok_or_else(|| StoreError::Seed(format!("club id {} is out of range", club.id)))?;

        self.next_id.fetch_max(next_id, Ordering::SeqCst);
        clubs.insert(club.id, club);

        Ok(())
    }

    pub async fn get(&self, id: u32) -> Option<Club> {
        self.clubs.read().await.get(&id).cloned()
    }

    pub async fn get_many(&self, ids: &[u32]) -> HashMap<u32, Club> {
        let clubs = self.clubs.read().await;

        ids.iter()
            .filter_map(|id| clubs.get(id).map(|club| (*id, club.clone())))
            .collect()
    }

    pub async fn list(&self, offset: usize, limit: usize) -> Vec<Club> {
        self.clubs
            .read()
            .await
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Changes name and/or logo; blank logos keep the current one.
    pub async fn update(&self, id: u32, name: Option<&str>, logo_url: Option<&str>) -> StoreResult<Club> {
        let mut clubs = self.clubs.write().await;

        let club = clubs
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound("Club".to_string()))?;

        let mut updated = club.clone();

        if let Some(name) = name {
            updated.rename(name)?;
        }

        updated.change_logo(logo_url);

        *club = updated.clone();

        Ok(updated)
    }

    /// Prepares roster entries without storing anything: entries with an id
    /// update that club, entries without one become new clubs. Ids for new
    /// clubs are reserved here, the batch keeps entry order.
    pub async fn stage(&self, entries: &[(Option<u32>, ClubDraft)]) -> StoreResult<ClubBatch> {
        let clubs = self.clubs.read().await;

        let mut seen = HashSet::with_capacity(entries.len());

        if let Some(id) = entries.iter().filter_map(|(id, _)| *id).find(|id| !seen.insert(*id)) {
            return Err(StoreError::League(LeagueError::validation(format!(
                "Club {} is listed more than once",
                id
            ))));
        }

        let mut staged = Vec::with_capacity(entries.len());

        for (id, draft) in entries {
            let club = match id {
                Some(id) => {
                    let mut club = clubs
                        .get(id)
                        .cloned()
                        .ok_or_else(|| StoreError::NotFound(format!("Club {}", id)))?;

                    club.rename(&draft.name)?;
                    club.change_logo(draft.logo_url.as_deref());
                    club
                }
                None => Club::from_draft(0, draft)?,
            };

            staged.push((id.is_none(), club));
        }

        let fresh = staged.iter().filter(|(fresh, _)| *fresh).count() as u32;
        let first_id = self.next_id.fetch_add(fresh, Ordering::SeqCst);

        let clubs = staged
            .into_iter()
            .scan(first_id, |next_id, (fresh, mut club)| {
                if fresh {
                    club.id = *next_id;
                    *next_id += 1;
                }
                Some(club)
            })
            .collect();

        Ok(ClubBatch { clubs })
    }

    pub async fn stage_new(&self, drafts: &[ClubDraft]) -> StoreResult<ClubBatch> {
        let entries: Vec<(Option<u32>, ClubDraft)> =
            drafts.iter().map(|draft| (None, draft.clone())).collect();

        self.stage(&entries).await
    }

    /// Stores a staged batch, replacing existing clubs with their new values.
    pub async fn commit(&self, batch: ClubBatch) {
        let mut clubs = self.clubs.write().await;

        for club in batch.clubs {
            debug!("club {} stored", club.id);
            clubs.insert(club.id, club);
        }
    }

    pub async fn delete(&self, id: u32) -> StoreResult<Club> {
        self.clubs
            .write()
            .await
            .remove(&id)
            .ok_or_else(|| StoreError::NotFound("Club".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standings::DEFAULT_LOGO_URL;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = ClubStore::new();

        let club = store.create(&ClubDraft::new("Hill Rangers")).await.unwrap();

        assert_eq!(club.id, 1);
        assert_eq!(store.get(1).await.unwrap().logo_url, DEFAULT_LOGO_URL);
    }

    #[tokio::test]
    async fn test_stage_new_is_all_or_nothing() {
        let store = ClubStore::new();

        let drafts = vec![ClubDraft::new("One"), ClubDraft::new(" ")];
        assert!(store.stage_new(&drafts).await.is_err());

        let drafts = vec![ClubDraft::new("One"), ClubDraft::new("Two")];
        let batch = store.stage_new(&drafts).await.unwrap();
        assert_eq!(batch.ids(), vec![1, 2]);
        assert!(store.list(0, 10).await.is_empty());

        store.commit(batch).await;

        assert_eq!(store.get(2).await.unwrap().name, "Two");
        assert_eq!(store.create(&ClubDraft::new("Three")).await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_dropped_batch_stores_nothing() {
        let store = ClubStore::new();
        store.create(&ClubDraft::new("Kept")).await.unwrap();

        let batch = store
            .stage(&[(Some(1), ClubDraft::new("Renamed")), (None, ClubDraft::new("Fresh"))])
            .await
            .unwrap();
        drop(batch);

        assert_eq!(store.get(1).await.unwrap().name, "Kept");
        assert_eq!(store.list(0, 10).await.len(), 1);

        // reserved ids are not handed out again
        assert_eq!(store.create(&ClubDraft::new("Next")).await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_update_club() {
        let store = ClubStore::new();
        store.create(&ClubDraft::new("Old Name")).await.unwrap();

        let club = store.update(1, Some("New Name"), Some("https://cdn/logo.png")).await.unwrap();

        assert_eq!(club.name, "New Name");
        assert_eq!(club.logo_url, "https://cdn/logo.png");
        assert!(matches!(store.update(1, Some(""), None).await, Err(StoreError::League(_))));
        assert_eq!(store.get(1).await.unwrap().name, "New Name");
        assert!(matches!(store.update(5, None, None).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stage_and_commit_roster() {
        let store = ClubStore::new();
        store.create(&ClubDraft::new("Kept")).await.unwrap();

        let entries = vec![
            (Some(1), ClubDraft::new("Kept Renamed")),
            (None, ClubDraft::new("Fresh")),
        ];

        let batch = store.stage(&entries).await.unwrap();
        assert_eq!(batch.ids(), vec![1, 2]);

        store.commit(batch).await;

        assert_eq!(store.get(1).await.unwrap().name, "Kept Renamed");
        assert_eq!(store.get(2).await.unwrap().name, "Fresh");
    }

    #[tokio::test]
    async fn test_stage_unknown_id() {
        let store = ClubStore::new();
        store.create(&ClubDraft::new("Kept")).await.unwrap();

        let entries = vec![
            (Some(1), ClubDraft::new("Renamed")),
            (Some(40), ClubDraft::new("Ghost")),
        ];

        assert!(matches!(store.stage(&entries).await, Err(StoreError::NotFound(_))));
        assert_eq!(store.get(1).await.unwrap().name, "Kept");
    }

    #[tokio::test]
    async fn test_stage_rejects_repeated_id() {
        let store = ClubStore::new();
        store.create(&ClubDraft::new("Kept")).await.unwrap();

        let entries = vec![(Some(1), ClubDraft::new("A")), (Some(1), ClubDraft::new("B"))];

        assert!(matches!(store.stage(&entries).await, Err(StoreError::League(_))));
    }

    #[tokio::test]
    async fn test_restore_rejects_last_id() {
        let store = ClubStore::new();

        let club = Club::new(u32::MAX, "Edge", None).unwrap();

        assert!(matches!(store.restore(club).await, Err(StoreError::Seed(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = ClubStore::new();
        store.create(&ClubDraft::new("Gone")).await.unwrap();

        assert_eq!(store.delete(1).await.unwrap().name, "Gone");
        assert!(store.get(1).await.is_none());
        assert!(store.delete(1).await.is_err());
    }
}
