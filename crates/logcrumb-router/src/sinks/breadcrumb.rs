//! BreadcrumbSink - rotating crash report metadata
//!
//! Keeps the last [`BREADCRUMB_CAPACITY`] lines in the crash reporter's
//! custom data under the keys `"0"` to `"199"`. The Nth line since
//! construction lands on key `N % BREADCRUMB_CAPACITY`, overwriting
//! whatever that slot held before.
//!
//! Keys say nothing about age once the window has wrapped: key `"0"` may be
//! newer than key `"199"`. No sequence number is recorded.

use std::sync::{Arc, Mutex};

use logcrumb_core::{
    domain::FormattedLine,
    ports::{ICustomDataStore, ILogSink},
};

/// Number of breadcrumb slots.
pub const BREADCRUMB_CAPACITY: usize = 200;

/// Sink that stores recent lines as crash report metadata.
pub struct BreadcrumbSink {
    store: Arc<dyn ICustomDataStore>,
    /// Slot the next line is written to. Held for the whole write so only
    /// one write is in flight at a time.
    next_index: Mutex<usize>,
}

impl BreadcrumbSink {
    /// Creates the sink, clearing whatever metadata the store still holds.
    pub fn new(store: Arc<dyn ICustomDataStore>) -> Self {
        store.clear_custom_data();
        Self {
            store,
            next_index: Mutex::new(0),
        }
    }

    /// Slot the next accepted line will be written to.
    pub fn next_index(&self) -> usize {
        *self
            .next_index
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ILogSink for BreadcrumbSink {
    fn accept(&self, line: &FormattedLine) {
        let mut next = self
            .next_index
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let key = *next;
        self.store.put_custom_data(&key.to_string(), line.as_str());
        *next = (key + 1) % BREADCRUMB_CAPACITY;
    }

    fn name(&self) -> &'static str {
        "breadcrumb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logcrumb_core::domain::{LogEvent, Severity};
    use std::collections::HashMap;

    /// In-memory metadata store that counts clears
    #[derive(Default)]
    struct MemoryStore {
        data: Mutex<HashMap<String, String>>,
        clears: Mutex<u32>,
    }

    impl MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.data.lock().unwrap().get(key).cloned()
        }

        fn len(&self) -> usize {
            self.data.lock().unwrap().len()
        }
    }

    impl ICustomDataStore for MemoryStore {
        fn clear_custom_data(&self) {
            *self.clears.lock().unwrap() += 1;
            self.data.lock().unwrap().clear();
        }

        fn put_custom_data(&self, key: &str, value: &str) {
            self.data
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    fn line(message: &str) -> FormattedLine {
        LogEvent::new(Severity::Info, "t", message).format()
    }

    #[test]
    fn test_construction_clears_stale_metadata() {
        let store = Arc::new(MemoryStore::default());
        store.put_custom_data("17", "stale");

        let _sink = BreadcrumbSink::new(store.clone());

        assert_eq!(store.len(), 0);
        assert_eq!(*store.clears.lock().unwrap(), 1);
    }

    #[test]
    fn test_clear_twice_is_harmless() {
        let store = Arc::new(MemoryStore::default());

        let _first = BreadcrumbSink::new(store.clone());
        assert_eq!(store.len(), 0);
        let _second = BreadcrumbSink::new(store.clone());
        assert_eq!(store.len(), 0);
        assert_eq!(*store.clears.lock().unwrap(), 2);
    }

    #[test]
    fn test_lines_land_on_sequential_keys() {
        let store = Arc::new(MemoryStore::default());
        let sink = BreadcrumbSink::new(store.clone());

        sink.accept(&LogEvent::new(Severity::Error, "X", "boom").format());
        sink.accept(&LogEvent::new(Severity::Info, "Y", "ok").format());

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("0").as_deref(), Some("E/[X]\tboom\n"));
        assert_eq!(store.get("1").as_deref(), Some("I/[Y]\tok\n"));
        assert_eq!(sink.next_index(), 2);
    }

    #[test]
    fn test_wraparound_overwrites_oldest_slot() {
        let store = Arc::new(MemoryStore::default());
        let sink = BreadcrumbSink::new(store.clone());

        for i in 0..=BREADCRUMB_CAPACITY {
            sink.accept(&line(&format!("m{i}")));
        }

        assert_eq!(store.len(), BREADCRUMB_CAPACITY);
        assert_eq!(store.get("0"), Some(line("m200").into_string()));
        assert_eq!(store.get("1"), Some(line("m1").into_string()));
        assert_eq!(store.get("199"), Some(line("m199").into_string()));
        assert_eq!(store.get("200"), None);
        assert_eq!(sink.next_index(), 1);
    }

    #[test]
    fn test_keys_stay_in_range_over_many_writes() {
        let store = Arc::new(MemoryStore::default());
        let sink = BreadcrumbSink::new(store.clone());

        for i in 0..(BREADCRUMB_CAPACITY * 3 + 7) {
            sink.accept(&line(&i.to_string()));
        }

        assert_eq!(store.len(), BREADCRUMB_CAPACITY);
        let keys: Vec<usize> = store
            .data
            .lock()
            .unwrap()
            .keys()
            .map(|k| k.parse().unwrap())
            .collect();
        assert!(keys.iter().all(|k| *k < BREADCRUMB_CAPACITY));
        assert_eq!(sink.next_index(), 7);
    }
}
