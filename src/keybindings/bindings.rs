//! Bindings of a single mode
//!
//! A plain map from key sequence to command. Command text is opaque and
//! never inspected here.

use serde::Serialize;
use std::collections::BTreeMap;

/// Key sequence to command map for one mode.
///
/// Each key sequence maps to exactly one command; binding an existing
/// sequence overwrites it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Bindings {
    map: BTreeMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Binds `keys` to `command`, returning the command it replaced.
    pub fn insert(&mut self, keys: &str, command: &str) -> Option<String> {
        self.map.insert(keys.to_string(), command.to_string())
    }

    /// Removes `keys`, returning its command if it was bound.
    pub fn remove(&mut self, keys: &str) -> Option<String> {
        self.map.remove(keys)
    }

    pub fn get(&self, keys: &str) -> Option<&str> {
        self.map.get(keys).map(String::as_str)
    }

    pub fn contains(&self, keys: &str) -> bool {
        self.map.contains_key(keys)
    }

    /// Checks whether `keys` is the start of some bound sequence.
    ///
    /// A complete sequence counts as its own prefix. Empty input never
    /// matches.
    ///
    /// # Example
    /// ```
    /// use image_viewer_config::keybindings::Bindings;
    ///
    /// let mut bindings = Bindings::new();
    /// bindings.insert("gg", "goto 1");
    ///
    /// assert!(bindings.partial_match("g"));
    /// assert!(bindings.partial_match("gg"));
    /// assert!(!bindings.partial_match("G"));
    /// assert!(!bindings.partial_match(""));
    /// ```
    pub fn partial_match(&self, keys: &str) -> bool {
        if keys.is_empty() {
            return false;
        }

        self.map.keys().any(|bound| bound.starts_with(keys))
    }

    /// Returns these bindings layered on top of `fallback`.
    ///
    /// Entries of `self` win when both define the same sequence.
    pub fn merged_over(&self, fallback: &Bindings) -> Bindings {
        let mut merged = fallback.clone();
        merged
            .map
            .extend(self.map.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    /// Iterates over `(keys, command)` pairs sorted by key sequence.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut bindings = Bindings::new();
        assert_eq!(bindings.insert("j", "scroll down"), None);
        assert_eq!(
            bindings.insert("j", "next"),
            Some("scroll down".to_string())
        );
        assert_eq!(bindings.get("j"), Some("next"));
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn test_merged_over_prefers_own_entries() {
        let mut global = Bindings::new();
        global.insert("j", "pan down");
        global.insert("q", "quit");

        let mut own = Bindings::new();
        own.insert("j", "scroll down");

        let merged = own.merged_over(&global);
        assert_eq!(merged.get("j"), Some("scroll down"));
        assert_eq!(merged.get("q"), Some("quit"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_partial_match_is_prefix_only() {
        let mut bindings = Bindings::new();
        bindings.insert("yy", "copy-name");

        assert!(bindings.partial_match("y"));
        assert!(!bindings.partial_match("yyy"));
        assert!(!bindings.partial_match("x"));
    }
}
