use super::nom_parser::{Literal, NodeDef, TreeSource};
use crate::{error::LoadError, Node, Tree, Value};

/// Instantiates the `main` tree of a parsed source.
pub fn load(tree_source: &TreeSource) -> Result<Tree, LoadError> {
    load_tree(tree_source, "main")
}

/// Instantiates the tree named `name` of a parsed source. Each named
/// tree compiles independently; the same source can be instantiated as
/// many times as you want.
pub fn load_tree(tree_source: &TreeSource, name: &str) -> Result<Tree, LoadError> {
    let tree = tree_source
        .tree_defs
        .iter()
        .find(|tree| tree.name == name)
        .ok_or_else(|| LoadError::MissingTree(name.to_owned()))?;

    let root = build_node(&tree.root)?;
    Ok(Tree::load(root)?)
}

fn build_node(def: &NodeDef) -> Result<Node, LoadError> {
    let mut node = Node::new(def.name);
    for attr in &def.attrs {
        if attr.key == "id" {
            match &attr.value {
                Literal::Str(s) => node = node.named(s),
                _ => {
                    return Err(LoadError::InvalidNodeId {
                        node: def.name.to_owned(),
                    })
                }
            }
        } else {
            node = node.prop(attr.key, literal_value(&attr.value));
        }
    }
    for child in &def.children {
        node = node.kid(build_node(child)?);
    }
    Ok(node)
}

fn literal_value(literal: &Literal) -> Value {
    match literal {
        Literal::Str(s) => Value::from(s.as_str()),
        Literal::Int(i) => Value::from(*i),
        Literal::Float(f) => Value::from(*f),
        Literal::Bool(b) => Value::from(*b),
    }
}

#[cfg(test)]
mod test;
