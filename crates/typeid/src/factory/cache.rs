use crate::id::Prefix;
use core::any::TypeId;
use core::hash::Hash;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Hard ceiling on cached prefixes. Guards against prefix explosion
/// when ids are minted for unbounded numbers of entity types; in normal
/// use the cache simply holds every prefix the process touches.
const MAX_ENTRIES: usize = 1000;

/// Number of most-recently-used entries retained when the ceiling is
/// hit.
const RETAIN_RECENT: usize = 10;

/// Bounded cache of resolved prefixes, keyed by entity type.
///
/// Access-ordered with batch eviction: when the ceiling is reached,
/// everything but the most recently used entries is dropped. A miss
/// recomputes the prefix — pure and cheap — so concurrent lookups at
/// worst duplicate equal work.
#[derive(Debug)]
pub(crate) struct PrefixCache<K: Eq + Hash + Copy = TypeId> {
    inner: Mutex<Inner<K>>,
}

#[derive(Debug)]
struct Inner<K> {
    entries: HashMap<K, Slot>,
    // monotonic access stamp, bumped on every operation
    clock: u64,
    max_entries: usize,
    retain_recent: usize,
}

#[derive(Debug)]
struct Slot {
    prefix: Prefix,
    last_used: u64,
}

impl<K: Eq + Hash + Copy> PrefixCache<K> {
    pub(crate) fn new() -> Self {
        Self::with_bounds(MAX_ENTRIES, RETAIN_RECENT)
    }

    pub(crate) fn with_bounds(max_entries: usize, retain_recent: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                clock: 0,
                max_entries,
                retain_recent,
            }),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<Prefix> {
        let mut inner = self.inner.lock();
        inner.clock += 1;
        let now = inner.clock;
        let slot = inner.entries.get_mut(key)?;
        slot.last_used = now;
        Some(slot.prefix.clone())
    }

    pub(crate) fn insert(&self, key: K, prefix: Prefix) {
        let mut inner = self.inner.lock();
        inner.clock += 1;
        let now = inner.clock;
        if inner.entries.len() >= inner.max_entries && !inner.entries.contains_key(&key) {
            inner.evict();
        }
        inner.entries.insert(
            key,
            Slot {
                prefix,
                last_used: now,
            },
        );
    }

    pub(crate) fn remove(&self, key: &K) {
        self.inner.lock().entries.remove(key);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

impl<K: Eq + Hash + Copy> Inner<K> {
    /// Drops everything but the `retain_recent` most recently used
    /// entries.
    fn evict(&mut self) {
        if self.entries.len() <= self.retain_recent {
            return;
        }
        // access stamps are unique, so the cutoff keeps exactly
        // `retain_recent` entries; eviction is rare enough that the
        // sort does not matter
        let mut stamps: Vec<u64> = self.entries.values().map(|slot| slot.last_used).collect();
        stamps.sort_unstable_by(|a, b| b.cmp(a));
        let cutoff = stamps[self.retain_recent - 1];
        self.entries.retain(|_, slot| slot.last_used >= cutoff);
        #[cfg(feature = "tracing")]
        tracing::trace!(retained = self.entries.len(), "evicted cached prefixes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(p: &str) -> Prefix {
        Prefix::new(p).unwrap()
    }

    #[test]
    fn get_returns_inserted_prefixes() {
        let cache = PrefixCache::<u32>::new();
        assert_eq!(cache.get(&1), None);
        cache.insert(1, prefix("user"));
        assert_eq!(cache.get(&1).unwrap().as_str(), "user");
    }

    #[test]
    fn eviction_keeps_the_most_recently_used_entries() {
        let cache = PrefixCache::<u32>::with_bounds(4, 2);
        for key in 0..4 {
            cache.insert(key, prefix("user"));
        }
        assert_eq!(cache.len(), 4);

        // touch 0 and 2 so they are the most recent
        cache.get(&0);
        cache.get(&2);

        // the ceiling is hit: everything but {0, 2} is evicted
        cache.insert(4, prefix("org"));
        assert_eq!(cache.len(), 3);
        assert!(cache.get(&0).is_some());
        assert!(cache.get(&2).is_some());
        assert!(cache.get(&4).is_some());
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&3), None);
    }

    #[test]
    fn reinserting_an_existing_key_does_not_evict() {
        let cache = PrefixCache::<u32>::with_bounds(2, 1);
        cache.insert(1, prefix("user"));
        cache.insert(2, prefix("org"));
        cache.insert(1, prefix("customer"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1).unwrap().as_str(), "customer");
    }

    #[test]
    fn remove_drops_the_entry() {
        let cache = PrefixCache::<u32>::new();
        cache.insert(1, prefix("user"));
        cache.remove(&1);
        assert_eq!(cache.get(&1), None);
    }
}
