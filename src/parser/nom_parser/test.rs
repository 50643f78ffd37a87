use super::*;

impl<'src> TreeRootDef<'src> {
    fn new(name: &'src str, root: NodeDef<'src>) -> Self {
        Self { name, root }
    }
}

#[test]
fn test_trees() {
    assert_eq!(
        parse_tree(
            "tree main = Sequence {
        }"
        ),
        Ok(("", TreeRootDef::new("main", NodeDef::new("Sequence"))))
    );

    assert_eq!(
        parse_tree(
            "tree main = Sequence {
                    PrintBodyNode
        }"
        ),
        Ok((
            "",
            TreeRootDef::new(
                "main",
                NodeDef::new_with_children("Sequence", vec![NodeDef::new("PrintBodyNode")])
            )
        ))
    );
}

#[test]
fn test_node_attrs() {
    assert_eq!(
        parse_tree(
            r#"tree main = Sequence {
                Do (flag = true, count = 3, label = "waypoint")
    }"#
        ),
        Ok((
            "",
            TreeRootDef::new(
                "main",
                NodeDef::new_with_children(
                    "Sequence",
                    vec![NodeDef::new_with_attrs(
                        "Do",
                        vec![
                            AttrDef {
                                key: "flag",
                                value: Literal::Bool(true),
                            },
                            AttrDef {
                                key: "count",
                                value: Literal::Int(3),
                            },
                            AttrDef {
                                key: "label",
                                value: Literal::Str("waypoint".to_string()),
                            },
                        ]
                    )]
                )
            )
        ))
    );
}

#[test]
fn test_number_literals() {
    assert_eq!(
        parse_tree("tree main = Do (x = -4, y = 2.5)"),
        Ok((
            "",
            TreeRootDef::new(
                "main",
                NodeDef::new_with_attrs(
                    "Do",
                    vec![
                        AttrDef {
                            key: "x",
                            value: Literal::Int(-4),
                        },
                        AttrDef {
                            key: "y",
                            value: Literal::Float(2.5),
                        },
                    ]
                )
            )
        ))
    );
}

#[test]
fn test_string_escapes() {
    assert_eq!(
        parse_tree(r#"tree main = Say (text = "line\nbreak")"#),
        Ok((
            "",
            TreeRootDef::new(
                "main",
                NodeDef::new_with_attrs(
                    "Say",
                    vec![AttrDef {
                        key: "text",
                        value: Literal::Str("line\nbreak".to_string()),
                    }]
                )
            )
        ))
    );
}

#[test]
fn test_nested_children() {
    assert_eq!(
        parse_tree(
            "tree main = Selector {
                Sequence {
                    First
                    Second
                }
                Fallback
            }"
        ),
        Ok((
            "",
            TreeRootDef::new(
                "main",
                NodeDef::new_with_children(
                    "Selector",
                    vec![
                        NodeDef::new_with_children(
                            "Sequence",
                            vec![NodeDef::new("First"), NodeDef::new("Second")]
                        ),
                        NodeDef::new("Fallback"),
                    ]
                )
            )
        ))
    );
}

#[test]
fn test_comments() {
    let source = "# A comment at the top level.
tree main = Sequence { # after opening brace
    # a whole line comment
    Wait # after a node
}                      # after closing brace
";
    let (rest, tree_source) = parse_file(source).unwrap();
    assert_eq!(rest, "");
    assert_eq!(
        tree_source,
        TreeSource {
            tree_defs: vec![TreeRootDef::new(
                "main",
                NodeDef::new_with_children("Sequence", vec![NodeDef::new("Wait")])
            )]
        }
    );
}

#[test]
fn test_parse_file_multiple_trees() {
    let source = "tree main = Sequence {
    Go
}

tree other = Selector {
    Stop
}
";
    let (rest, tree_source) = parse_file(source).unwrap();
    assert_eq!(rest, "");
    assert_eq!(tree_source.tree_defs.len(), 2);
    assert_eq!(tree_source.tree_defs[0].name, "main");
    assert_eq!(tree_source.tree_defs[1].name, "other");
}
