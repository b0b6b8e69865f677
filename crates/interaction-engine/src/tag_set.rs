//! # Tag Set
//!
//! An insertion-ordered set of strings. Adding an existing or blank tag is a
//! no-op; removing a tag keeps the relative order of the rest. Tags are stored
//! trimmed, so `" Wheat"` and `"Wheat"` are the same tag.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tag` unless it is blank or already present. Returns whether it was added.
    pub fn add(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes `tag` if present. Returns whether it was removed.
    pub fn remove(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        match self.tags.iter().position(|t| t == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    /// Consuming form of [`add`](Self::add) for structural updates.
    pub fn with(mut self, tag: impl AsRef<str>) -> Self {
        self.add(tag);
        self
    }

    /// Consuming form of [`remove`](Self::remove) for structural updates.
    pub fn without(mut self, tag: impl AsRef<str>) -> Self {
        self.remove(tag);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.add(tag);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
