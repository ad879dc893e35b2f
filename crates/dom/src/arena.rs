//! Arena-based element registry
//!
//! Every element lives in one `Vec<Element>`. Tree links are `u32` handles
//! into that Vec, so a parent's child list and the id index can both refer
//! to the same element without shared ownership, and a cyclic tree never
//! turns into a reference cycle.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena:  Vec<Element>
//!         [Elem0][Elem1][Elem2]...
//!          ↑ 4-byte handle, not 8-byte pointer
//! Index:  "node-7" → 7
//! ```
//!
//! Elements are never removed one by one. `clear()` drops all of them at once.

use crate::error::{DomError, Result};
use crate::types::{Element, ElementId, OnDuplicate, EMPTY};
use ahash::{AHashMap, AHashSet};

/// Configuration for the registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub initial_capacity: usize,
    pub on_duplicate: OnDuplicate,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1024,
            on_duplicate: OnDuplicate::Keep,
        }
    }
}

/// Identifier-indexed element store plus the operations that mutate it
///
/// Design:
/// - Single Vec<Element> for sequential allocation
/// - HashMap for caller id → ElementId lookup
/// - No Rc/Arc: handles everywhere
#[derive(Debug)]
pub struct ElementRegistry {
    config: RegistryConfig,

    /// All elements, including ones orphaned by `OnDuplicate::Replace`
    elements: Vec<Element>,

    /// Caller id → ElementId. Only live elements are reachable from here.
    id_map: AHashMap<String, ElementId>,
}

impl ElementRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create registry with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(RegistryConfig {
            initial_capacity: capacity,
            ..RegistryConfig::default()
        })
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            elements: Vec::with_capacity(config.initial_capacity),
            id_map: AHashMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Node store
    // ---------------------------------------------------------------------

    /// Register an element under `id`, returns its handle
    ///
    /// An existing id is handled per [`RegistryConfig::on_duplicate`].
    pub fn create(&mut self, id: &str) -> ElementId {
        if let Some(&existing) = self.id_map.get(id) {
            match self.config.on_duplicate {
                OnDuplicate::Keep => {
                    tracing::debug!("Element {} already exists, keeping it", id);
                    return existing;
                }
                OnDuplicate::Replace => {
                    tracing::debug!("Element {} already exists, orphaning handle {}", id, existing);
                }
            }
        }

        let handle = self.elements.len() as ElementId;
        self.elements.push(Element::new(id));
        self.id_map.insert(id.to_string(), handle);
        handle
    }

    /// Register an element, rejecting ids that already exist
    pub fn try_create(&mut self, id: &str) -> Result<ElementId> {
        if self.id_map.contains_key(id) {
            return Err(DomError::DuplicateId(id.to_string()));
        }
        Ok(self.create(id))
    }

    /// Resolve a caller id to its handle
    pub fn lookup(&self, id: &str) -> Option<ElementId> {
        self.id_map.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_map.contains_key(id)
    }

    /// Get element by handle (immutable)
    pub fn get(&self, handle: ElementId) -> Result<&Element> {
        self.elements
            .get(handle as usize)
            .ok_or(DomError::StaleHandle(handle))
    }

    fn get_mut(&mut self, handle: ElementId) -> Result<&mut Element> {
        self.elements
            .get_mut(handle as usize)
            .ok_or(DomError::StaleHandle(handle))
    }

    /// Get element by caller id
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.lookup(id).and_then(|handle| self.get(handle).ok())
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let handle = self.lookup(id)?;
        self.get_mut(handle).ok()
    }

    fn resolve(&self, id: &str) -> Result<ElementId> {
        self.lookup(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    /// Caller id of the element behind a handle, empty if the handle is stale
    fn id_of(&self, handle: ElementId) -> &str {
        self.get(handle).map(Element::id).unwrap_or(EMPTY)
    }

    /// Number of elements reachable by id
    pub fn len(&self) -> usize {
        self.id_map.len()
    }

    /// Same as [`ElementRegistry::len`], named after the outer surface
    pub fn element_count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_map.is_empty()
    }

    /// Iterator over live elements, in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Element> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(|(handle, element)| {
                self.id_map.get(element.id()) == Some(&(*handle as ElementId))
            })
            .map(|(_, element)| element)
    }

    /// Drop every element (reuses allocation)
    ///
    /// Handles obtained before this call are meaningless afterwards.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing {} elements", self.elements.len());
        self.elements.clear();
        self.id_map.clear();
    }

    // ---------------------------------------------------------------------
    // Mutation engine
    // ---------------------------------------------------------------------

    /// Upsert an attribute. Unknown ids are ignored.
    pub fn set_attribute(&mut self, id: &str, key: &str, value: &str) {
        match self.element_mut(id) {
            Some(element) => element.set_attribute(key, value),
            None => tracing::trace!("set_attribute ignored: unknown element {}", id),
        }
    }

    pub fn try_set_attribute(&mut self, id: &str, key: &str, value: &str) -> Result<()> {
        let element = self
            .element_mut(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))?;
        element.set_attribute(key, value);
        Ok(())
    }

    /// Attribute value, empty for unknown ids and unset keys alike
    pub fn get_attribute(&self, id: &str, key: &str) -> &str {
        self.element(id)
            .map(|element| element.get_attribute(key))
            .unwrap_or(EMPTY)
    }

    /// Move `child_id` under `parent_id`. Unknown ids make this a no-op.
    pub fn attach_child(&mut self, parent_id: &str, child_id: &str) {
        if let Err(err) = self.try_attach_child(parent_id, child_id) {
            tracing::trace!("attach_child ignored: {}", err);
        }
    }

    /// Move `child_id` under `parent_id`, reporting unknown ids
    ///
    /// The parent is resolved before the child. No cycle check: attaching an
    /// ancestor below its own descendant is accepted.
    pub fn try_attach_child(&mut self, parent_id: &str, child_id: &str) -> Result<()> {
        let parent = self.resolve(parent_id)?;
        let child = self.resolve(child_id)?;
        self.reparent(parent, child)
    }

    /// Detach from the previous parent first, then append.
    ///
    /// Re-attaching to the current parent moves the child to the end of the
    /// list instead of adding a second entry.
    fn reparent(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        if let Some(previous) = self.get(child)?.parent() {
            // previous may be an orphan from a replaced id; it is still in the arena
            let siblings = self.get_mut(previous)?.children_mut();
            siblings.retain(|c| *c != child);
        }

        self.get_mut(parent)?.children_mut().push(child);
        self.get_mut(child)?.set_parent(Some(parent));
        Ok(())
    }

    /// Id of the first child, empty if the parent is unknown or childless
    pub fn first_child(&self, parent_id: &str) -> &str {
        self.element(parent_id)
            .and_then(Element::first_child)
            .map(|handle| self.id_of(handle))
            .unwrap_or(EMPTY)
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Ids of all children in order, empty for unknown ids
    pub fn children_of(&self, id: &str) -> Vec<&str> {
        self.element(id)
            .map(|element| {
                element
                    .children()
                    .iter()
                    .map(|&handle| self.id_of(handle))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Id of the current parent, empty if detached or unknown
    pub fn parent_of(&self, id: &str) -> &str {
        self.element(id)
            .and_then(Element::parent)
            .map(|handle| self.id_of(handle))
            .unwrap_or(EMPTY)
    }

    /// Traverse a subtree depth-first, pre-order (iterative, no recursion)
    ///
    /// Each element is visited at most once, so cyclic trees terminate.
    pub fn traverse_df<F>(&self, start_id: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(&Element) -> Result<()>,
    {
        let mut stack = vec![self.resolve(start_id)?];
        let mut seen = AHashSet::new();

        while let Some(handle) = stack.pop() {
            if !seen.insert(handle) {
                continue;
            }

            let element = self.get(handle)?;
            visit(element)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child in element.children().iter().rev() {
                stack.push(child);
            }
        }

        Ok(())
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
