use crate::{LeagueQuery, LeagueStore, StoreResult};
use log::{debug, warn};
use standings::{League, LeagueError, LeagueResult};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::OwnedMutexGuard;

/// Runs league reads and writes against a store with bounded waits.
///
/// Writes to the same league are serialized: `update` holds a per-league
/// lock for the whole load, mutate, save cycle, so concurrent submissions
/// are applied one after another. The store's revision check still guards
/// against writers that bypass this repository.
pub struct LeagueRepository<S: LeagueStore> {
    store: S,
    locks: LeagueLocks,
    timeout: Duration,
}

impl<S: LeagueStore> LeagueRepository<S> {
    pub fn new(store: S, timeout: Duration) -> Self {
        LeagueRepository {
            store,
            locks: LeagueLocks::default(),
            timeout,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn find(&self, id: u32) -> LeagueResult<League> {
        self.bounded("loading table", self.store.find_by_id(id))
            .await?
            .ok_or_else(|| LeagueError::not_found("Table not found!"))
    }

    pub async fn list(&self, query: LeagueQuery) -> LeagueResult<Vec<League>> {
        self.bounded("listing tables", self.store.list(query)).await
    }

    pub async fn create(&self, league: League) -> LeagueResult<League> {
        self.bounded("creating table", self.store.insert(league)).await
    }

    /// Loads the league, lets `action` mutate it and saves the result as one
    /// document. If `action` fails nothing is written.
    pub async fn update<T, F>(&self, id: u32, action: F) -> LeagueResult<(League, T)>
    where
        F: FnOnce(&mut League) -> LeagueResult<T> + Send,
        T: Send,
    {
        let _guard = self.lock(id).await?;

        let mut league = self.find(id).await?;
        let revision = league.revision;

        let output = action(&mut league)?;

        if league.id != id || league.revision != revision {
            return Err(LeagueError::conflict("Table identity changed during update"));
        }

        let saved = self.bounded("saving table", self.store.save(league)).await?;

        debug!("table {} updated to revision {}", id, saved.revision);

        Ok((saved, output))
    }

    /// Deletes the league once `check` accepts it.
    pub async fn delete<F>(&self, id: u32, check: F) -> LeagueResult<League>
    where
        F: FnOnce(&League) -> LeagueResult<()> + Send,
    {
        let _guard = self.lock(id).await?;

        let league = self.find(id).await?;

        check(&league)?;

        if !self.bounded("deleting table", self.store.delete(id)).await? {
            return Err(LeagueError::not_found("Table not found!"));
        }

        Ok(league)
    }

    async fn lock(&self, id: u32) -> LeagueResult<LeagueLock<'_>> {
        let lock = self.locks.get(id);

        match tokio::time::timeout(self.timeout, lock.lock_owned()).await {
            Ok(guard) => Ok(LeagueLock {
                locks: &self.locks,
                id,
                guard: Some(guard),
            }),
            Err(_) => {
                self.locks.release(id);
                warn!("table {} is busy, gave up after {} ms", id, self.timeout.as_millis());
                Err(LeagueError::Timeout(format!(
                    "Table {} is busy, try again later",
                    id
                )))
            }
        }
    }

    async fn bounded<T>(
        &self,
        what: &str,
        action: impl Future<Output = StoreResult<T>>,
    ) -> LeagueResult<T> {
        match tokio::time::timeout(self.timeout, action).await {
            Ok(result) => result.map_err(LeagueError::from),
            Err(_) => {
                warn!("{} timed out after {} ms", what, self.timeout.as_millis());
                Err(LeagueError::Timeout(format!(
                    "{} timed out after {} ms",
                    what,
                    self.timeout.as_millis()
                )))
            }
        }
    }
}

/// Exclusive access to one league for the length of a cycle.
struct LeagueLock<'a> {
    locks: &'a LeagueLocks,
    id: u32,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for LeagueLock<'_> {
    fn drop(&mut self) {
        self.guard.take();
        self.locks.release(self.id);
    }
}

/// One mutex per league id. An entry lives only while some caller holds or
/// waits for it.
#[derive(Default)]
struct LeagueLocks {
    inner: Mutex<HashMap<u32, Arc<tokio::sync::Mutex<()>>>>,
}

impl LeagueLocks {
    fn get(&self, id: u32) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(id).or_default())
    }

    fn release(&self, id: u32) {
        let mut locks = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        if locks.get(&id).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(&id);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}
