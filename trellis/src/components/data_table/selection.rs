//! Row selection set for tables.

use std::collections::HashSet;
use std::hash::Hash;

/// What the select-all checkbox shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    None,
    Some,
    All,
}

impl SelectAllState {
    pub fn glyph(&self) -> &'static str {
        match self {
            SelectAllState::None => "[ ]",
            SelectAllState::Some => "[-]",
            SelectAllState::All => "[x]",
        }
    }

    /// Value for the `aria-checked` attribute.
    pub fn as_aria(&self) -> &'static str {
        match self {
            SelectAllState::None => "false",
            SelectAllState::Some => "mixed",
            SelectAllState::All => "true",
        }
    }
}

/// Tracks selected rows by their keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Toggle selection for a key. Returns true if the key is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    pub fn insert(&mut self, key: K) {
        self.selected.insert(key);
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drop keys not in `present`. Returns how many were dropped.
    pub fn retain_present(&mut self, present: &HashSet<K>) -> usize {
        let before = self.selected.len();
        self.selected.retain(|k| present.contains(k));
        before - self.selected.len()
    }

    /// How many of `keys` are selected, summarised for a select-all box.
    pub fn coverage<'a>(&self, keys: impl IntoIterator<Item = &'a K>) -> SelectAllState
    where
        K: 'a,
    {
        let (mut total, mut hit) = (0usize, 0usize);
        for key in keys {
            total += 1;
            if self.selected.contains(key) {
                hit += 1;
            }
        }
        match hit {
            0 => SelectAllState::None,
            n if n == total => SelectAllState::All,
            _ => SelectAllState::Some,
        }
    }
}
