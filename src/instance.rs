use std::{collections::HashMap, sync::Arc};

use crate::{node::Node, registry::Registry, tree::Tree, Memory};

/// The running state of one agent: a shared memory, one private memory
/// slot per stateful node, and the marker of the node that reported
/// [`crate::Outcome::Running`] on the previous tick.
///
/// An instance must be ticked by at most one caller at a time; its
/// memories are mutated in place with no internal locking.
pub struct Instance {
    pub(crate) memory: Memory,
    pub(crate) slots: Vec<Option<Memory>>,
    pub(crate) running: Option<usize>,
    pub(crate) indices: Arc<HashMap<String, usize>>,
}

impl Instance {
    pub(crate) fn new<C>(tree: &Tree, registry: &Registry<C>, memory: Memory) -> Self {
        let mut slots = vec![None; tree.count];
        seed_slots(&tree.root, registry, &mut slots);
        Self {
            memory,
            slots,
            running: None,
            indices: tree.indices.clone(),
        }
    }

    /// The shared memory, visible to every leaf action of this instance.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Consumes the instance and hands the shared memory back.
    pub fn into_memory(self) -> Memory {
        self.memory
    }

    /// The private memory of the node named `id` in the tree description,
    /// or `None` if no node carries that id or the node has no slot.
    pub fn node_memory(&self, id: &str) -> Option<&Memory> {
        self.slots.get(*self.indices.get(id)?)?.as_ref()
    }

    pub fn node_memory_mut(&mut self, id: &str) -> Option<&mut Memory> {
        let index = *self.indices.get(id)?;
        self.slots.get_mut(index)?.as_mut()
    }
}

/// A node gets a slot iff its name resolves to a stateful action. The
/// slot starts as a copy of the description's properties.
fn seed_slots<C>(node: &Node, registry: &Registry<C>, slots: &mut Vec<Option<Memory>>) {
    if let Some(action) = registry.lookup(&node.name) {
        if action.is_stateful() {
            slots[node.index] = Some(node.props.clone());
        }
    }
    for kid in &node.kids {
        seed_slots(kid, registry, slots);
    }
}
