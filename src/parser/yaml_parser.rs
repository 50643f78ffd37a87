use serde::Deserialize;

use crate::{error::LoadYamlError, Node, Tree};

#[derive(Deserialize)]
struct TreeDoc {
    root: Node,
}

/// Compiles a tree from a YAML document with a single `root` key holding
/// the node description.
pub fn load_yaml(yaml: &str) -> Result<Tree, LoadYamlError> {
    let doc: TreeDoc = serde_yaml::from_str(yaml)?;
    Ok(Tree::load(doc.root)?)
}
