use fxhash::FxHashSet;
use std::hash::Hash;
use tracing::debug;

/// Per-record boolean flags (favorites, bookmarks) held in view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSet<K: Eq + Hash> {
    on: FxHashSet<K>,
}

impl<K: Eq + Hash> Default for ToggleSet<K> {
    fn default() -> Self {
        Self { on: FxHashSet::default() }
    }
}

impl<K: Eq + Hash + Copy + std::fmt::Debug> ToggleSet<K> {
    /// Seeds the set from `(key, initially_on)` pairs.
    pub fn seeded(flags: impl IntoIterator<Item = (K, bool)>) -> Self {
        Self { on: flags.into_iter().filter_map(|(key, on)| on.then_some(key)).collect() }
    }

    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.on.contains(&key)
    }

    /// Flips the flag for `key` and returns its new value.
    pub fn toggle(&mut self, key: K) -> bool {
        let on = if self.on.remove(&key) {
            false
        } else {
            self.on.insert(key);
            true
        };
        debug!(?key, on, "Flag toggled");
        on
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.on.len()
    }
}

