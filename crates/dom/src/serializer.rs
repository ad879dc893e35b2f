//! Tree Serializer - Render an element subtree for inspection
//!
//! This module handles:
//! - Indented outline rendering (`<id key="value">`)
//! - Owned snapshots for serde consumers
//! - Cycle marking, since the registry never rejects cyclic attaches

use crate::arena::ElementRegistry;
use crate::error::{DomError, Result};
use crate::types::{Element, ElementId, ElementSnapshot};

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    pub include_attributes: bool,
    /// Attribute maps have no order; sorting makes output stable
    pub sort_attributes: bool,
    pub max_depth: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            include_attributes: true,
            sort_attributes: true,
            max_depth: 64,
        }
    }
}

/// Element Tree Serializer
pub struct TreeSerializer {
    config: SerializerConfig,
}

impl TreeSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Render the subtree under `root_id` as an indented outline
    pub fn render(&self, registry: &ElementRegistry, root_id: &str) -> Result<String> {
        let root = registry
            .lookup(root_id)
            .ok_or_else(|| DomError::ElementNotFound(root_id.to_string()))?;

        let mut output = String::with_capacity(1024);
        let mut path = Vec::new();
        self.render_element(registry, root, 0, &mut path, &mut output)?;
        Ok(output)
    }

    fn render_element(
        &self,
        registry: &ElementRegistry,
        handle: ElementId,
        depth: usize,
        path: &mut Vec<ElementId>,
        output: &mut String,
    ) -> Result<()> {
        let element = registry.get(handle)?;
        let indent = "  ".repeat(depth);

        output.push_str(&indent);
        output.push('<');
        output.push_str(element.id());
        self.push_attributes(element, output);

        if path.contains(&handle) {
            output.push_str("/> (cycle)\n");
            return Ok(());
        }

        if element.children().is_empty() || depth >= self.config.max_depth {
            output.push_str("/>\n");
            return Ok(());
        }

        output.push_str(">\n");

        path.push(handle);
        for &child in element.children() {
            self.render_element(registry, child, depth + 1, path, output)?;
        }
        path.pop();

        output.push_str(&indent);
        output.push_str("</");
        output.push_str(element.id());
        output.push_str(">\n");

        Ok(())
    }

    fn push_attributes(&self, element: &Element, output: &mut String) {
        if !self.config.include_attributes {
            return;
        }

        for (key, value) in self.attributes(element) {
            output.push_str(&format!(" {}=\"{}\"", key, value));
        }
    }

    fn attributes<'a>(&self, element: &'a Element) -> Vec<(&'a str, &'a str)> {
        let mut attributes: Vec<_> = element.attributes().collect();
        if self.config.sort_attributes {
            attributes.sort_unstable();
        }
        attributes
    }

    /// Owned copy of the subtree under `root_id`, `None` if unknown
    pub fn snapshot(&self, registry: &ElementRegistry, root_id: &str) -> Option<ElementSnapshot> {
        let root = registry.lookup(root_id)?;
        let mut path = Vec::new();
        self.snapshot_element(registry, root, 0, &mut path).ok()
    }

    fn snapshot_element(
        &self,
        registry: &ElementRegistry,
        handle: ElementId,
        depth: usize,
        path: &mut Vec<ElementId>,
    ) -> Result<ElementSnapshot> {
        let element = registry.get(handle)?;

        let attributes = if self.config.include_attributes {
            self.attributes(element)
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        } else {
            Vec::new()
        };

        let mut snapshot = ElementSnapshot {
            id: element.id().to_string(),
            attributes,
            children: Vec::new(),
            cycle: path.contains(&handle),
        };

        if snapshot.cycle || depth >= self.config.max_depth {
            return Ok(snapshot);
        }

        path.push(handle);
        for &child in element.children() {
            snapshot
                .children
                .push(self.snapshot_element(registry, child, depth + 1, path)?);
        }
        path.pop();

        Ok(snapshot)
    }

    /// Snapshot serialized as JSON
    pub fn to_json(&self, registry: &ElementRegistry, root_id: &str) -> Result<String> {
        let snapshot = self
            .snapshot(registry, root_id)
            .ok_or_else(|| DomError::ElementNotFound(root_id.to_string()))?;
        Ok(serde_json::to_string(&snapshot)?)
    }
}

impl Default for TreeSerializer {
    fn default() -> Self {
        Self::new()
    }
}
