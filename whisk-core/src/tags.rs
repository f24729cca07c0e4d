//! Tag list handling.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Recipe tags: unique, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagList(Vec<String>);

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tag. Empty tags and tags already present are ignored.
    pub fn add(&mut self, tag: &str) {
        if tag.is_empty() || self.contains(tag) {
            return;
        }
        self.0.push(tag.to_string());
    }

    /// Remove every occurrence of this tag.
    pub fn remove(&mut self, tag: &str) {
        self.0.retain(|t| t != tag);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for TagList {
    type Error = DraftError;

    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        let mut list = TagList::new();
        for tag in tags {
            if tag.is_empty() {
                return Err(DraftError::EmptyTag);
            }
            if list.contains(&tag) {
                return Err(DraftError::DuplicateTag(tag));
            }
            list.0.push(tag);
        }
        Ok(list)
    }
}

impl From<TagList> for Vec<String> {
    fn from(list: TagList) -> Self {
        list.0
    }
}
