use super::*;
use crate::{error::LoadError, parse_file, Action, Outcome, Registry};

#[test]
fn test_load_main() {
    let source = r#"
tree main = Sequence {
    Step
    Step
}
"#;
    let (_, tree_source) = parse_file(source).unwrap();
    let tree = load(&tree_source).unwrap();
    assert_eq!(tree.node_count(), 3);

    let mut registry = Registry::default();
    registry
        .register("Step", Action::stateless(|count: &mut usize, _memory| {
            *count += 1;
            true
        }))
        .unwrap();

    let mut count = 0;
    let mut instance = tree.create_instance(&registry);
    assert_eq!(
        tree.update(&mut count, &mut instance, &registry).unwrap(),
        Outcome::Success
    );
    assert_eq!(count, 2);
}

#[test]
fn test_load_named_tree() {
    let source = r#"
tree main = Sequence {
    Step
}

tree fallback = Selector {
    Step
    Step
}
"#;
    let (_, tree_source) = parse_file(source).unwrap();
    assert_eq!(load_tree(&tree_source, "fallback").unwrap().node_count(), 3);
    assert_eq!(load(&tree_source).unwrap().node_count(), 2);
}

#[test]
fn test_missing_tree() {
    let (_, tree_source) = parse_file("tree main = Sequence {\n}\n").unwrap();
    let result = load_tree(&tree_source, "patrol");
    assert!(matches!(result, Err(LoadError::MissingTree(name)) if name == "patrol"));
}

#[test]
fn test_id_attribute_names_the_node() {
    let source = r#"
tree main = Sequence {
    Remember (id = "myNode", count = 12)
}
"#;
    let (_, tree_source) = parse_file(source).unwrap();
    let tree = load(&tree_source).unwrap();
    assert_eq!(tree.node_index("myNode"), Some(1));

    let mut registry = Registry::default();
    registry
        .register(
            "Remember",
            Action::stateful(|_: &mut (), _memory, _node| true),
        )
        .unwrap();

    let instance = tree.create_instance(&registry);
    let slot = instance.node_memory("myNode").unwrap();
    assert_eq!(slot.get("count").and_then(|v| v.as_i64()), Some(12));
    // The id attribute is control data, not a property.
    assert!(slot.get("id").is_none());
}

#[test]
fn test_invalid_node_id() {
    let source = r#"
tree main = Sequence {
    Remember (id = 12)
}
"#;
    let (_, tree_source) = parse_file(source).unwrap();
    let result = load(&tree_source);
    assert!(matches!(result, Err(LoadError::InvalidNodeId { node }) if node == "Remember"));
}

#[test]
fn test_duplicate_id_fails_compile() {
    let source = r#"
tree main = Sequence {
    Step (id = "dup")
    Step (id = "dup")
}
"#;
    let (_, tree_source) = parse_file(source).unwrap();
    assert!(matches!(
        load(&tree_source),
        Err(LoadError::Compile(_))
    ));
}
