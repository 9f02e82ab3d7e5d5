//! Tag sets for elements and relationships.
//!
//! Tags are plain labels used purely to select styling rules; they carry no
//! model semantics. Every element and relationship receives a set of builtin
//! tags on creation, and user tags can be appended afterwards.

use serde::{Deserialize, Serialize};

/// Builtin tags applied to model items on creation.
pub mod builtin {
    /// Present on every element.
    pub const ELEMENT: &str = "Element";
    /// Present on every person.
    pub const PERSON: &str = "Person";
    /// Present on every software system.
    pub const SOFTWARE_SYSTEM: &str = "Software System";
    /// Present on every container.
    pub const CONTAINER: &str = "Container";
    /// Present on every relationship.
    pub const RELATIONSHIP: &str = "Relationship";
    /// Marks a synchronous relationship.
    pub const SYNCHRONOUS: &str = "Synchronous";
    /// Marks an asynchronous relationship.
    pub const ASYNCHRONOUS: &str = "Asynchronous";
}

/// An ordered, duplicate-free set of tags.
///
/// Insertion order is preserved so that serialized output is deterministic.
///
/// # Examples
///
/// ```
/// use maquette_core::tags::{Tags, builtin};
///
/// let mut tags = Tags::new();
/// tags.add(builtin::ELEMENT);
/// tags.add(builtin::PERSON);
/// tags.add(builtin::PERSON); // duplicate, ignored
///
/// assert_eq!(tags.len(), 2);
/// assert!(tags.contains(builtin::PERSON));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tag set from an initial list of tags, deduplicated in order.
    pub fn from_iter<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for tag in tags {
            set.add(tag);
        }
        set
    }

    /// Append a tag, ignoring duplicates.
    pub fn add(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.0.contains(&tag) {
            self.0.push(tag);
        }
    }

    /// Check whether a tag is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Iterate over the tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
