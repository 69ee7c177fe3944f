//! Time-to-live cache for fetched question sets.
//!
//! Entries expire `ttl` after they are set; an expired entry is removed when
//! it is next read. Every call takes the current instant explicitly so tests
//! control time.

use std::hash::Hash;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{QuestionSet, QuestionSource};
use crate::core::{GameConfig, GameRng};
use crate::error::SourceError;

/// How long a fetched question set is reused.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Keyed values with an expiry.
#[derive(Clone, Debug)]
pub struct TtlCache<K, V> {
    entries: FxHashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live value for `key`. Removes it if it has expired.
    pub fn get(&mut self, key: &K, now: Instant) -> Option<&V> {
        if self.entries.get(key).is_some_and(|e| e.expires_at < now) {
            self.entries.remove(key);
            return None;
        }
        self.entries.get(key).map(|e| &e.value)
    }

    /// Store `value` until `now + ttl`.
    pub fn set(&mut self, key: K, value: V, ttl: Duration, now: Instant) {
        self.entries.insert(
            key,
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|e| e.value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop every expired entry.
    pub fn purge_expired(&mut self, now: Instant) {
        self.entries.retain(|_, e| e.expires_at >= now);
    }

    /// Entries held, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wraps a source and reuses its last question set for `ttl`.
///
/// Sets are cached per `questions_per_tier`, so a fetch under a different
/// tier size never gets a set of the wrong length.
pub struct CachedSource<S> {
    inner: S,
    cache: TtlCache<usize, QuestionSet>,
    ttl: Duration,
    clock: Box<dyn Fn() -> Instant + Send + Sync>,
}

impl<S: QuestionSource> CachedSource<S> {
    /// Cache for [`DEFAULT_TTL`] on the system clock.
    pub fn new(inner: S) -> Self {
        Self::with_clock(inner, DEFAULT_TTL, Instant::now)
    }

    /// Cache for `ttl`, reading time from `clock`.
    pub fn with_clock(inner: S, ttl: Duration, clock: impl Fn() -> Instant + Send + Sync + 'static) -> Self {
        Self {
            inner,
            cache: TtlCache::new(),
            ttl,
            clock: Box::new(clock),
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Forget every cached set.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }
}

impl<S: QuestionSource> QuestionSource for CachedSource<S> {
    fn fetch(&mut self, config: &GameConfig, rng: &mut GameRng) -> Result<QuestionSet, SourceError> {
        let now = (self.clock)();
        let key = config.questions_per_tier;
        if let Some(set) = self.cache.get(&key, now) {
            debug!(per_tier = key, "question set served from cache");
            return Ok(set.clone());
        }
        let set = self.inner.fetch(config, rng)?;
        self.cache.set(key, set.clone(), self.ttl, now);
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_lives_until_expiry() {
        let start = Instant::now();
        let mut cache = TtlCache::new();
        cache.set("k", 1, Duration::from_secs(60), start);

        assert_eq!(cache.get(&"k", start + Duration::from_secs(60)), Some(&1));
        assert_eq!(cache.get(&"k", start + Duration::from_secs(61)), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_purge_expired() {
        let start = Instant::now();
        let mut cache = TtlCache::new();
        cache.set(1, "short", Duration::from_secs(1), start);
        cache.set(2, "long", Duration::from_secs(100), start);

        cache.purge_expired(start + Duration::from_secs(5));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.remove(&2), Some("long"));
    }

    #[test]
    fn test_cached_per_tier_size() {
        let start = Instant::now();
        let mut source = CachedSource::with_clock(
            crate::source::QuestionBank::builtin().unwrap(),
            DEFAULT_TTL,
            move || start,
        );
        let mut rng = GameRng::new(8);
        let classic = GameConfig::classic();
        let short = GameConfig::classic().with_questions_per_tier(2);

        assert_eq!(source.fetch(&classic, &mut rng).unwrap().len(), 15);
        assert_eq!(source.fetch(&short, &mut rng).unwrap().len(), 6);
        assert_eq!(source.fetch(&classic, &mut rng).unwrap().len(), 15);
    }
}
