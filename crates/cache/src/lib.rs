//! Response cache for the dashboard's data layer.
//!
//! The data layer re-fetches lead and profile lists on every screen; this
//! crate gives it a short-TTL cache so repeated reads within a few seconds
//! hit memory instead of the backend. Unlike a module-global map, the cache
//! is an explicit value: the owner decides where it lives and how it is
//! shared, the clock is injected so expiry is testable, and invalidation is
//! by declared tag instead of key-substring matching.

pub mod clock;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::clock::{Clock, SystemClock};

/// Identifies a cached query by its shape: a scope ("leads", "profiles")
/// plus the parameters that distinguish one query from another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub scope: String,
    pub identity: String,
}

impl QueryKey {
    pub fn new(scope: impl Into<String>, identity: impl Into<String>) -> Self {
        Self { scope: scope.into(), identity: identity.into() }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scope, self.identity)
    }
}

struct Entry<V> {
    value: V,
    stored_at: DateTime<Utc>,
    tags: Vec<String>,
}

/// TTL cache keyed by query shape.
pub struct QueryCache<V> {
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
    entries: HashMap<QueryKey, Entry<V>>,
}

impl<V: Clone> QueryCache<V> {
    /// The data layer's default window between refetches.
    pub fn default_ttl() -> TimeDelta {
        TimeDelta::seconds(30)
    }

    pub fn new(ttl: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        Self { ttl, clock, entries: HashMap::new() }
    }

    /// Cache on the wall clock with the default TTL.
    pub fn with_system_clock() -> Self {
        Self::new(Self::default_ttl(), Arc::new(SystemClock))
    }

    /// Returns the cached value if present and fresh. Expired entries read
    /// as absent and are evicted on the spot.
    pub fn get(&mut self, key: &QueryKey) -> Option<V> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if now - entry.stored_at < self.ttl => {
                tracing::debug!(key = %key, "cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                tracing::debug!(key = %key, "cache entry expired");
                self.entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores a value under `key`, tagged for later invalidation. Replaces
    /// any previous entry and restarts its TTL.
    pub fn put(&mut self, key: QueryKey, value: V, tags: impl IntoIterator<Item = String>) {
        let entry = Entry {
            value,
            stored_at: self.clock.now(),
            tags: tags.into_iter().collect(),
        };
        self.entries.insert(key, entry);
    }

    /// Evicts every entry carrying `tag`; returns how many were dropped.
    pub fn invalidate_tag(&mut self, tag: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag));
        let dropped = before - self.entries.len();
        if dropped > 0 {
            tracing::debug!(tag, dropped, "cache invalidated by tag");
        }
        dropped
    }

    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeDelta;

    use crate::clock::ManualClock;
    use crate::{QueryCache, QueryKey};

    fn cache(clock: &Arc<ManualClock>) -> QueryCache<Vec<&'static str>> {
        QueryCache::new(QueryCache::<Vec<&'static str>>::default_ttl(), clock.clone())
    }

    #[test]
    fn fresh_entries_hit_until_the_ttl_elapses() {
        let clock = Arc::new(ManualClock::default());
        let mut cache = cache(&clock);
        let key = QueryKey::new("leads", "all");

        cache.put(key.clone(), vec!["lead-1"], ["leads".to_owned()]);
        assert_eq!(cache.get(&key), Some(vec!["lead-1"]));

        clock.advance(TimeDelta::seconds(29));
        assert_eq!(cache.get(&key), Some(vec!["lead-1"]));

        clock.advance(TimeDelta::seconds(1));
        assert_eq!(cache.get(&key), None);
        assert!(cache.is_empty(), "expired entry should be evicted on read");
    }

    #[test]
    fn put_restarts_the_ttl() {
        let clock = Arc::new(ManualClock::default());
        let mut cache = cache(&clock);
        let key = QueryKey::new("leads", "all");

        cache.put(key.clone(), vec!["old"], ["leads".to_owned()]);
        clock.advance(TimeDelta::seconds(20));
        cache.put(key.clone(), vec!["new"], ["leads".to_owned()]);
        clock.advance(TimeDelta::seconds(20));

        assert_eq!(cache.get(&key), Some(vec!["new"]));
    }

    #[test]
    fn tag_invalidation_evicts_only_matching_entries() {
        let clock = Arc::new(ManualClock::default());
        let mut cache = cache(&clock);

        cache.put(QueryKey::new("leads", "all"), vec!["a"], ["leads".to_owned()]);
        cache.put(
            QueryKey::new("leads", "sdr:7"),
            vec!["b"],
            ["leads".to_owned(), "sdr:7".to_owned()],
        );
        cache.put(QueryKey::new("profiles", "all"), vec!["c"], ["profiles".to_owned()]);

        assert_eq!(cache.invalidate_tag("leads"), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&QueryKey::new("profiles", "all")), Some(vec!["c"]));
        assert_eq!(cache.invalidate_tag("leads"), 0);
    }

    #[test]
    fn invalidate_all_clears_everything() {
        let clock = Arc::new(ManualClock::default());
        let mut cache = cache(&clock);
        cache.put(QueryKey::new("leads", "all"), vec!["a"], []);
        cache.put(QueryKey::new("profiles", "all"), vec!["b"], []);

        cache.invalidate_all();
        assert!(cache.is_empty());
    }

    #[test]
    fn missing_keys_read_as_absent() {
        let clock = Arc::new(ManualClock::default());
        let mut cache = cache(&clock);
        assert_eq!(cache.get(&QueryKey::new("leads", "all")), None);
    }

    #[test]
    fn query_keys_display_scope_then_identity() {
        assert_eq!(QueryKey::new("leads", "sdr:7").to_string(), "leads:sdr:7");
    }
}
