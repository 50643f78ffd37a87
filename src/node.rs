use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::Value;

/// The built-in composite and decorator kinds. Anything else is a leaf
/// dispatched through the action registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Sequence,
    Selector,
    Inverter,
    Succeeder,
    Failer,
    RepeatUntilSuccess,
    RepeatUntilFailure,
}

static BUILTIN_NODES: Lazy<HashMap<&'static str, NodeKind>> = Lazy::new(|| {
    let mut ret = HashMap::new();
    ret.insert("Sequence", NodeKind::Sequence);
    ret.insert("Selector", NodeKind::Selector);
    ret.insert("Inverter", NodeKind::Inverter);
    ret.insert("Succeeder", NodeKind::Succeeder);
    ret.insert("Failer", NodeKind::Failer);
    ret.insert("RepeatUntilSuccess", NodeKind::RepeatUntilSuccess);
    ret.insert("RepeatUntilFailure", NodeKind::RepeatUntilFailure);
    ret
});

impl NodeKind {
    pub(crate) fn from_name(name: &str) -> Option<NodeKind> {
        BUILTIN_NODES.get(name).copied()
    }
}

/// One element of a tree description.
///
/// `name` is either a built-in composite/decorator name or the name of a
/// registered action. Any field beyond `name`, `id` and `kids` is a
/// property, copied into the node's private memory slot when an instance
/// is created (see [`crate::Action::stateful`]).
///
/// ```
/// use behavior_tick::Node;
///
/// let root = Node::new("Selector")
///     .kid(Node::new("CheckBattery").named("battery").prop("threshold", 20))
///     .kid(Node::new("Recharge"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) kids: Vec<Node>,
    #[serde(flatten)]
    pub(crate) props: HashMap<String, Value>,
    #[serde(skip)]
    pub(crate) index: usize,
}

impl Node {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            id: None,
            kids: vec![],
            props: HashMap::new(),
            index: 0,
        }
    }

    /// Gives the node a stable string id, unique across the whole tree.
    /// Named nodes can be looked up with [`crate::Tree::node_index`] and
    /// [`crate::Instance::node_memory`].
    pub fn named(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Attaches a static property to the node description.
    pub fn prop(mut self, key: impl ToString, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    /// Appends a child node. Composite and decorator kinds consume
    /// children; leaf kinds ignore them.
    pub fn kid(mut self, child: Node) -> Self {
        self.kids.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn kids(&self) -> &[Node] {
        &self.kids
    }

    pub fn props(&self) -> &HashMap<String, Value> {
        &self.props
    }
}
