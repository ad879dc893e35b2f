//! End-to-end behaviour of the registry through its public API

use dom::workload::{
    create_elements, restructure_tree, ATTRS_PER_ELEMENT, ELEMENT_COUNT, RESTRUCTURE_FAN_OUT,
    RESTRUCTURE_PARENTS,
};
use dom::{ElementRegistry, TreeSerializer};

#[test]
fn create_workload_matches_expected_attributes() {
    let mut registry = ElementRegistry::new();
    create_elements(&mut registry, ELEMENT_COUNT, ATTRS_PER_ELEMENT);

    assert_eq!(registry.element_count(), 10_000);
    assert_eq!(registry.get_attribute("node-100", "attr-20"), "value-20");
    assert_eq!(registry.get_attribute("node-999", "attr-7"), "value-7");
    assert_eq!(registry.get_attribute("node-999", "attr-1000"), "");
    assert_eq!(registry.get_attribute("node-A", "attr-1"), "");
}

#[test]
fn restructure_workload_leaves_single_first_child() {
    let mut registry = ElementRegistry::new();
    create_elements(&mut registry, ELEMENT_COUNT, ATTRS_PER_ELEMENT);

    restructure_tree(&mut registry, RESTRUCTURE_PARENTS, RESTRUCTURE_FAN_OUT);

    assert_eq!(registry.first_child("node-0"), "node-1");
    assert_eq!(registry.children_of("node-0"), vec!["node-1"]);
    assert_eq!(registry.children_of("node-99").len(), RESTRUCTURE_FAN_OUT);
    assert_eq!(registry.element_count(), 10_000);
}

#[test]
fn every_child_agrees_with_its_parent() {
    let mut registry = ElementRegistry::new();
    create_elements(&mut registry, 500, 0);
    restructure_tree(&mut registry, 50, 40);

    for element in registry.iter() {
        for child_id in registry.children_of(element.id()) {
            assert_eq!(registry.parent_of(child_id), element.id());
        }
    }

    // At most one parent lists any child
    for element in registry.iter() {
        let parent = registry.parent_of(element.id());
        if parent.is_empty() {
            continue;
        }
        let listings = registry
            .iter()
            .filter(|candidate| registry.children_of(candidate.id()).contains(&element.id()))
            .count();
        assert_eq!(listings, 1, "{} listed by {} parents", element.id(), listings);
    }
}

#[test]
fn repeated_reparent_moves_child() {
    let mut registry = ElementRegistry::new();
    for id in ["p1", "p2", "c"] {
        registry.create(id);
    }

    registry.attach_child("p1", "c");
    registry.attach_child("p2", "c");

    assert!(!registry.children_of("p1").contains(&"c"));
    assert!(registry.children_of("p2").contains(&"c"));
}

#[test]
fn clear_then_rebuild() {
    let mut registry = ElementRegistry::new();
    create_elements(&mut registry, 100, 2);
    registry.attach_child("node-0", "node-1");

    registry.clear();
    assert_eq!(registry.element_count(), 0);
    assert_eq!(registry.first_child("node-0"), "");
    assert_eq!(registry.get_attribute("node-1", "attr-0"), "");

    create_elements(&mut registry, 10, 1);
    assert_eq!(registry.element_count(), 10);
    assert_eq!(registry.first_child("node-0"), "");
}

#[test]
fn render_after_restructure() {
    let mut registry = ElementRegistry::new();
    create_elements(&mut registry, 4, 0);
    registry.attach_child("node-0", "node-1");
    registry.attach_child("node-1", "node-2");
    registry.attach_child("node-0", "node-3");

    let output = TreeSerializer::new().render(&registry, "node-0").unwrap();
    assert_eq!(
        output,
        "<node-0>\n  <node-1>\n    <node-2/>\n  </node-1>\n  <node-3/>\n</node-0>\n"
    );
}
