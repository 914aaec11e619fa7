//! Ordered name -> command catalog

use std::collections::HashMap;

/// Launchable items in insertion order.
///
/// Inserting a name that already exists replaces its command in place, so
/// the first insertion decides the position and the last one the command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, command: Vec<String>) {
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = command,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, command));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `other` in, suffixing every name with ` [tag]`.
    pub fn merge_tagged(&mut self, other: Catalog, tag: &str) {
        for (name, command) in other.entries {
            self.insert(format!("{} [{}]", name, tag), command);
        }
    }
}

impl FromIterator<(String, Vec<String>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for (name, command) in iter {
            catalog.insert(name, command);
        }
        catalog
    }
}
