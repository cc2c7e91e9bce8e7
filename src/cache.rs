use moka::future::Cache;
use std::time::Duration;

/// Single-slot cache holding one repository's payload until its TTL elapses.
///
/// Owned by the repository that fills it; a zero TTL disables caching.
/// Reads and writes are not coalesced: two cold readers may both fill
/// the slot and the last write wins.
pub struct TtlCache<V> {
    slot: Option<Cache<(), V>>,
    ttl: Duration,
}

impl<V> TtlCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Duration) -> Self {
        let slot = (!ttl.is_zero())
            .then(|| Cache::builder().max_capacity(1).time_to_live(ttl).build());
        Self { slot, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn get(&self) -> Option<V> {
        match &self.slot {
            Some(cache) => cache.get(&()).await,
            None => None,
        }
    }

    pub async fn put(&self, value: V) {
        if let Some(cache) = &self.slot {
            cache.insert((), value).await;
        }
    }

    pub async fn invalidate(&self) {
        if let Some(cache) = &self.slot {
            cache.invalidate(&()).await;
        }
    }
}
