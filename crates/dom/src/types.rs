//! Core type definitions for the element tree
//!
//! Key design principles:
//! 1. Use u32 handles for tree links (4 bytes vs 8 bytes pointer)
//! 2. Children and parent are plain indices into the arena, never owners
//! 3. Use SmallVec for child lists (most elements have few children)
//! 4. Caller-facing identity is the string id, handles stay internal

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Element handle (index into arena)
/// u32 allows 4 billion elements, far more than any caller creates
pub type ElementId = u32;

/// Child list storage. Most elements have <4 children.
pub type ChildList = SmallVec<[ElementId; 4]>;

/// Value returned for unset attributes and unknown ids
pub const EMPTY: &str = "";

/// What `create` does when the id is already registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDuplicate {
    /// Leave the existing element untouched and hand back its handle
    #[default]
    Keep,
    /// Register a fresh element under the id. The old one is orphaned:
    /// child lists that held it keep pointing at it, lookups no longer find it.
    Replace,
}

/// A labeled tree node
///
/// Layout:
/// - Identity first (immutable after creation)
/// - Navigation handles (back-reference + ordered children)
/// - Free-form string attributes
#[derive(Debug, Clone)]
pub struct Element {
    id: String,

    parent: Option<ElementId>,
    children: ChildList,

    attributes: AHashMap<String, String>,
}

impl Element {
    /// Create a detached element with no attributes
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            children: SmallVec::new(),
            attributes: AHashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get attribute value, empty string if never set
    ///
    /// Absence and an empty value are indistinguishable here. Use [`Element::attr`]
    /// when the difference matters.
    pub fn get_attribute(&self, key: &str) -> &str {
        self.attr(key).unwrap_or(EMPTY)
    }

    /// Get attribute value if set
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|s| s.as_str())
    }

    /// Upsert an attribute (last write wins)
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Iterate attributes in unspecified order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Plain mutator, no bookkeeping of its own
    pub fn set_parent(&mut self, parent: Option<ElementId>) {
        self.parent = parent;
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Child list for the mutation engine. Nothing else should reshape it.
    pub(crate) fn children_mut(&mut self) -> &mut ChildList {
        &mut self.children
    }

    pub fn first_child(&self) -> Option<ElementId> {
        self.children.first().copied()
    }
}

/// Owned subtree for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSnapshot>,
    /// Set when the child is already on the path from the root
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub cycle: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_attribute_is_empty() {
        let element = Element::new("a");
        assert_eq!(element.get_attribute("missing"), "");
        assert_eq!(element.attr("missing"), None);
    }

    #[test]
    fn test_attribute_last_write_wins() {
        let mut element = Element::new("a");
        element.set_attribute("k", "first");
        element.set_attribute("k", "second");

        assert_eq!(element.get_attribute("k"), "second");
        assert_eq!(element.attribute_count(), 1);
    }

    #[test]
    fn test_empty_value_vs_absent() {
        let mut element = Element::new("a");
        element.set_attribute("k", "");

        assert_eq!(element.get_attribute("k"), "");
        assert_eq!(element.attr("k"), Some(""));
    }

    #[test]
    fn test_new_element_is_detached() {
        let element = Element::new("root");
        assert_eq!(element.id(), "root");
        assert_eq!(element.parent(), None);
        assert!(element.children().is_empty());
        assert_eq!(element.first_child(), None);
    }
}
