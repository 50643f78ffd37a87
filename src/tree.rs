use std::{collections::HashMap, sync::Arc};

use crate::{error::CompileError, instance::Instance, node::Node, registry::Registry, Memory};

/// A compiled behavior tree, immutable and shareable.
///
/// Compilation assigns every node a dense pre-order index starting at
/// zero, root first, children left-to-right. The index addresses the
/// node's private memory slot in every [`Instance`] created from this
/// tree, so one `Tree` can back any number of simultaneously running
/// instances.
#[derive(Debug)]
pub struct Tree {
    pub(crate) root: Node,
    pub(crate) indices: Arc<HashMap<String, usize>>,
    pub(crate) count: usize,
}

impl Tree {
    /// Compiles a node description into a tree.
    ///
    /// Fails with [`CompileError::DuplicateNodeId`] if two nodes carry
    /// the same user-assigned id.
    pub fn load(mut root: Node) -> Result<Self, CompileError> {
        let mut indices = HashMap::new();
        let count = assign_indices(&mut root, 0, &mut indices)?;
        Ok(Self {
            root,
            indices: Arc::new(indices),
            count,
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.count
    }

    /// The pre-order index of the node carrying the user id `id`.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.indices.get(id).copied()
    }

    /// Creates a running instance with an empty shared memory.
    ///
    /// The registry decides which nodes get a private memory slot: a node
    /// whose name resolves to a stateful action has a slot seeded with
    /// the node description's properties.
    pub fn create_instance<C>(&self, registry: &Registry<C>) -> Instance {
        self.create_instance_with(registry, Memory::default())
    }

    /// Creates a running instance seeded with `memory` as the shared
    /// memory.
    pub fn create_instance_with<C>(&self, registry: &Registry<C>, memory: Memory) -> Instance {
        Instance::new(self, registry, memory)
    }
}

/// Pre-order index assignment. Returns the next unused index so a caller
/// can continue numbering across sibling subtrees.
fn assign_indices(
    node: &mut Node,
    index: usize,
    indices: &mut HashMap<String, usize>,
) -> Result<usize, CompileError> {
    if let Some(id) = &node.id {
        if indices.contains_key(id) {
            return Err(CompileError::DuplicateNodeId(id.clone()));
        }
        indices.insert(id.clone(), index);
    }
    node.index = index;
    let mut next = index + 1;
    for kid in &mut node.kids {
        next = assign_indices(kid, next, indices)?;
    }
    Ok(next)
}
