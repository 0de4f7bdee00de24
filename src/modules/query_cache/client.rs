use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::core::error::{AppError, Result};

/// Entity types a cached query can depend on; invalidation works per entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Categories,
    Products,
    Reviews,
    Contacts,
    Content,
    Clients,
    Dashboard,
}

/// Cache key: entity type plus the query parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: Entity,
    pub params: String,
}

impl QueryKey {
    pub fn new(entity: Entity, params: impl Into<String>) -> Self {
        Self {
            entity,
            params: params.into(),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.entity, self.params)
    }
}

/// Observable state of one query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    /// Never fetched, or invalidated
    Idle,
    /// First fetch in flight, no data yet
    Loading,
    Ready { stale: bool, refreshing: bool },
    /// Last fetch failed and there is no data to fall back on
    Failed(String),
}

type CachedValue = Arc<dyn Any + Send + Sync>;
type SharedFetch = Shared<BoxFuture<'static, std::result::Result<CachedValue, AppError>>>;

#[derive(Default)]
struct Entry {
    value: Option<CachedValue>,
    fetched_at: Option<Instant>,
    in_flight: Option<SharedFetch>,
    error: Option<AppError>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<QueryKey, Entry>,
    generations: HashMap<Entity, u64>,
}

impl CacheState {
    fn generation(&self, entity: Entity) -> u64 {
        self.generations.get(&entity).copied().unwrap_or(0)
    }
}

struct Inner {
    state: Mutex<CacheState>,
    stale_time: Duration,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a finished fetch unless its entity was invalidated meanwhile
    fn settle(
        &self,
        key: &QueryKey,
        generation: u64,
        result: &std::result::Result<CachedValue, AppError>,
    ) {
        let mut state = self.lock();
        if state.generation(key.entity) != generation {
            tracing::debug!("Discarding result for invalidated query '{}'", key);
            return;
        }

        let Some(entry) = state.entries.get_mut(key) else {
            return;
        };
        entry.in_flight = None;

        match result {
            Ok(value) => {
                entry.value = Some(Arc::clone(value));
                entry.fetched_at = Some(Instant::now());
                entry.error = None;
            }
            Err(e) => {
                tracing::warn!("Query '{}' failed: {}", key, e);
                entry.error = Some(e.clone());
            }
        }
    }
}

enum Lookup {
    Hit(CachedValue),
    Wait(SharedFetch),
}

/// Process-wide query cache shared by all view models
#[derive(Clone)]
pub struct QueryClient {
    inner: Arc<Inner>,
}

impl QueryClient {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(CacheState::default()),
                stale_time,
            }),
        }
    }

    /// Return the cached value for `key`, fetching it with `fetcher` when needed.
    ///
    /// - fresh hit: returned without I/O
    /// - stale hit: returned immediately, one background refetch is started
    /// - miss: joins the in-flight fetch for `key` or starts one
    ///
    /// Fetches run on their own task and complete even if every caller goes away.
    pub async fn fetch<V, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Arc<V>>
    where
        V: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let lookup = {
            let mut state = self.inner.lock();
            let generation = state.generation(key.entity);
            let stale_time = self.inner.stale_time;
            let entry = state.entries.entry(key.clone()).or_default();

            if let Some(value) = entry.value.clone() {
                let fresh = entry
                    .fetched_at
                    .map(|at| at.elapsed() < stale_time)
                    .unwrap_or(false);
                if !fresh && entry.in_flight.is_none() {
                    tracing::debug!("Query '{}' is stale, refetching in background", key);
                    entry.in_flight = Some(self.spawn_fetch(key.clone(), generation, fetcher()));
                }
                Lookup::Hit(value)
            } else if let Some(in_flight) = entry.in_flight.clone() {
                Lookup::Wait(in_flight)
            } else {
                let in_flight = self.spawn_fetch(key.clone(), generation, fetcher());
                entry.in_flight = Some(in_flight.clone());
                Lookup::Wait(in_flight)
            }
        };

        let value = match lookup {
            Lookup::Hit(value) => value,
            Lookup::Wait(in_flight) => in_flight.await?,
        };

        value.downcast::<V>().map_err(|_| {
            AppError::Internal(format!("Cached value for '{}' has an unexpected type", key))
        })
    }

    fn spawn_fetch<V, Fut>(&self, key: QueryKey, generation: u64, fut: Fut) -> SharedFetch
    where
        V: Send + Sync + 'static,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let result = fut.await.map(|value| Arc::new(value) as CachedValue);
            inner.settle(&key, generation, &result);
            result
        });

        async move {
            handle
                .await
                .unwrap_or_else(|e| Err(AppError::Internal(format!("Query task failed: {}", e))))
        }
        .boxed()
        .shared()
    }

    /// Drop every cached query of the given entities.
    ///
    /// Fetches already in flight still answer their callers but are not cached.
    pub fn invalidate(&self, entities: &[Entity]) {
        let mut state = self.inner.lock();
        for entity in entities {
            *state.generations.entry(*entity).or_insert(0) += 1;
        }
        state
            .entries
            .retain(|key, _| !entities.contains(&key.entity));
        tracing::debug!("Invalidated queries for {:?}", entities);
    }

    pub fn state(&self, key: &QueryKey) -> QueryState {
        let state = self.inner.lock();
        let Some(entry) = state.entries.get(key) else {
            return QueryState::Idle;
        };

        match (&entry.value, &entry.error) {
            (Some(_), _) => QueryState::Ready {
                stale: entry
                    .fetched_at
                    .map(|at| at.elapsed() >= self.inner.stale_time)
                    .unwrap_or(true),
                refreshing: entry.in_flight.is_some(),
            },
            (None, _) if entry.in_flight.is_some() => QueryState::Loading,
            (None, Some(error)) => QueryState::Failed(error.to_string()),
            (None, None) => QueryState::Idle,
        }
    }
}
