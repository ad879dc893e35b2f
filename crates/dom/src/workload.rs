//! Reference workloads
//!
//! The two call patterns the registry is tuned for: bulk creation with many
//! attributes, and a restructuring pass that reparents overlapping ranges.
//! Benches and integration tests drive the registry through these.

use crate::arena::ElementRegistry;

pub const ELEMENT_COUNT: usize = 10_000;
pub const ATTRS_PER_ELEMENT: usize = 30;
pub const RESTRUCTURE_PARENTS: usize = 100;
pub const RESTRUCTURE_FAN_OUT: usize = 99;

pub fn element_id(index: usize) -> String {
    format!("node-{}", index)
}

/// Create `node-0..node-{count}`, each with `attr-{j}` = `value-{j}`
pub fn create_elements(registry: &mut ElementRegistry, count: usize, attrs_per_element: usize) {
    let attrs: Vec<(String, String)> = (0..attrs_per_element)
        .map(|j| (format!("attr-{}", j), format!("value-{}", j)))
        .collect();

    for i in 0..count {
        let id = element_id(i);
        registry.create(&id);
        for (key, value) in &attrs {
            registry.set_attribute(&id, key, value);
        }
    }
}

/// Attach `node-{i+1}..=node-{i+fan_out}` under each `node-{i}`, then query
/// first children. Each pass steals most of the previous parent's children.
///
/// Returns how many first-child queries came back non-empty.
pub fn restructure_tree(registry: &mut ElementRegistry, parents: usize, fan_out: usize) -> usize {
    let mut hits = 0;

    for i in 0..parents {
        let parent_id = element_id(i);
        for j in 0..fan_out {
            registry.attach_child(&parent_id, &element_id(i + j + 1));
        }

        for j in 0..fan_out {
            if !registry.first_child(&element_id(j + 1)).is_empty() {
                hits += 1;
            }
        }
    }

    hits
}
