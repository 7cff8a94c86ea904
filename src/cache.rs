use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// TTL cache keyed by session id. Expiry is lazy: stale entries are dropped
/// on the lookup that observes them.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, (V, Instant)>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn put(&self, key: String, value: V) {
        self.put_at(key, value, Instant::now());
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn put_at(&self, key: String, value: V, now: Instant) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key, (value, now));
    }

    pub fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        let mut entries = self.entries.lock().unwrap();
        let fresh = match entries.get(key) {
            Some((_, stored_at)) => now.duration_since(*stored_at) < self.ttl,
            None => return None,
        };
        if !fresh {
            entries.remove(key);
            return None;
        }
        entries.get(key).map(|(value, _)| value.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
