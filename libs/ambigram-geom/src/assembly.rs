//! # Assembly
//!
//! Append-only named collection of solids produced by one layout pass.
//!
//! Entries are kept in insertion order in an explicit ordered mapping so
//! that iteration order is part of the contract, not an accident of the
//! underlying container. Letters are named by their decimal placement
//! index (`"0"`, `"1"`, ...); derived geometry uses the reserved names
//! `"base"` and `"support-<letter>"`.

use crate::error::{GeomError, GeomResult};
use std::collections::HashMap;

/// Reserved name for a base solid.
pub const BASE_NAME: &str = "base";

/// Name prefix for letter-support solids.
pub const SUPPORT_PREFIX: &str = "support-";

/// Whether an entry name denotes a placed letter (a decimal index).
pub fn is_letter_name(name: &str) -> bool {
    name.parse::<usize>().is_ok()
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Ordered, append-only mapping from entry name to solid.
#[derive(Debug, Clone)]
pub struct Assembly<S> {
    entries: Vec<(String, S)>,
    index: HashMap<String, usize>,
}

impl<S> Default for Assembly<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Assembly<S> {
    /// Create an empty assembly.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append a solid under a unique name.
    pub fn add(&mut self, name: impl Into<String>, solid: S) -> GeomResult<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(GeomError::DuplicateName(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, solid));
        Ok(())
    }

    /// Look up a solid by name.
    pub fn get(&self, name: &str) -> Option<&S> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &S)> {
        self.entries.iter().map(|(name, solid)| (name.as_str(), solid))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the assembly has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of placed letters, in ascending placement order.
    ///
    /// Bases and supports are excluded; letters sort by their numeric
    /// index, not lexicographically.
    pub fn letter_names(&self) -> Vec<String> {
        let mut letters: Vec<(usize, &str)> = self
            .entries
            .iter()
            .filter_map(|(name, _)| name.parse::<usize>().ok().map(|i| (i, name.as_str())))
            .collect();
        letters.sort_by_key(|&(i, _)| i);
        letters.into_iter().map(|(_, name)| name.to_string()).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order() {
        let mut assembly = Assembly::new();
        assembly.add("0", 'a').unwrap();
        assembly.add("1", 'b').unwrap();
        assembly.add(BASE_NAME, 'c').unwrap();
        let names: Vec<&str> = assembly.names().collect();
        assert_eq!(names, vec!["0", "1", "base"]);
        assert_eq!(assembly.get("1"), Some(&'b'));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut assembly = Assembly::new();
        assembly.add("0", ()).unwrap();
        let err = assembly.add("0", ()).unwrap_err();
        assert_eq!(err, GeomError::DuplicateName("0".to_string()));
    }

    #[test]
    fn test_letter_names_numeric_order() {
        let mut assembly = Assembly::new();
        // Deliberately out of lexicographic order
        assembly.add("2", ()).unwrap();
        assembly.add("10", ()).unwrap();
        assembly.add("0", ()).unwrap();
        assembly.add(BASE_NAME, ()).unwrap();
        assembly.add("support-0", ()).unwrap();
        assert_eq!(assembly.letter_names(), vec!["0", "2", "10"]);
    }

    #[test]
    fn test_is_letter_name() {
        assert!(is_letter_name("7"));
        assert!(!is_letter_name(BASE_NAME));
        assert!(!is_letter_name("support-7"));
    }
}
