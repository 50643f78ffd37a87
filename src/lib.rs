//! # behavior-tick
//!
//! A behavior tree engine that separates the tree from the agents
//! running it: a tree description is compiled once into an immutable
//! [`Tree`], and every agent gets its own lightweight [`Instance`]
//! holding the mutable state. One call to [`Tree::update`] evaluates the
//! whole tree once (a *tick*) and reports whether the behavior
//! succeeded, failed or is still in progress.
//!
//! A behavior tree is an extension to finite state machines that makes
//! describing transitional behavior easier: composites like `Sequence`
//! and `Selector` aggregate their children's outcomes, decorators
//! transform a single child's outcome, and the leaves are user-supplied
//! actions looked up by name in a caller-owned [`Registry`].
//!
//!
//! ## How it looks like
//!
//! First, register the actions your trees can refer to. An action is a
//! closure taking the tick context (any caller type) and the instance's
//! shared memory.
//!
//! ```rust
//! use behavior_tick::{Action, Outcome, Registry};
//!
//! struct Agent {
//!     distance: i32,
//! }
//!
//! let mut registry: Registry<Agent> = Registry::default();
//! registry
//!     .register("Approach", Action::stateless(|agent: &mut Agent, _memory| {
//!         if agent.distance == 0 {
//!             Outcome::Success
//!         } else {
//!             agent.distance -= 1;
//!             Outcome::Running
//!         }
//!     }))
//!     .unwrap();
//! registry
//!     .register("Arrived", Action::stateless(|agent: &mut Agent, _memory| {
//!         agent.distance == 0
//!     }))
//!     .unwrap();
//! ```
//!
//! Then compile a tree and create an instance from it.
//!
//! ```rust
//! # use behavior_tick::{Action, Node, Outcome, Registry, Tree};
//! # struct Agent { distance: i32 }
//! # let mut registry: Registry<Agent> = Registry::default();
//! # registry.register("Approach", Action::stateless(|agent: &mut Agent, _memory| {
//! #     if agent.distance == 0 { Outcome::Success } else { agent.distance -= 1; Outcome::Running }
//! # })).unwrap();
//! # registry.register("Arrived", Action::stateless(|agent: &mut Agent, _memory| {
//! #     agent.distance == 0
//! # })).unwrap();
//! let tree = Tree::load(
//!     Node::new("Sequence")
//!         .kid(Node::new("Approach"))
//!         .kid(Node::new("Arrived")),
//! )
//! .unwrap();
//!
//! let mut instance = tree.create_instance(&registry);
//! let mut agent = Agent { distance: 2 };
//!
//! assert_eq!(
//!     tree.update(&mut agent, &mut instance, &registry).unwrap(),
//!     Outcome::Running
//! );
//! assert_eq!(
//!     tree.update(&mut agent, &mut instance, &registry).unwrap(),
//!     Outcome::Running
//! );
//! assert_eq!(
//!     tree.update(&mut agent, &mut instance, &registry).unwrap(),
//!     Outcome::Success
//! );
//! ```
//!
//! The context argument (`agent` above) is an opaque value of your
//! choosing, handed through unmodified to every action callback. It is
//! the place for per-tick data with a lifetime shorter than the
//! instance, like a frame's world state in a game loop.
//!
//!
//! ## Built-in nodes
//!
//! * `Sequence` ticks children left to right and stops at the first
//!   child that does not succeed; it succeeds only if all children do.
//! * `Selector` ticks children left to right and stops at the first
//!   child that does not fail; it fails only if all children do.
//! * `Inverter` swaps its child's `Success` and `Failure`; `Running`
//!   passes through.
//! * `Succeeder` / `Failer` force any terminal child outcome to
//!   `Success` / `Failure`; `Running` passes through.
//! * `RepeatUntilSuccess` / `RepeatUntilFailure` re-tick their child in
//!   a loop *within the current tick* until it returns the terminal
//!   outcome in the name, then yield `Success`.
//!
//! Be careful with the repeat decorators: the loop is unbounded and
//! synchronous. A child that never returns the awaited outcome, or that
//! keeps returning `Running`, never lets the tick finish. The engine
//! does not guard against this; make sure such a child terminates.
//!
//!
//! ## Node memory and stateful actions
//!
//! Each instance owns two kinds of memory, both plain maps from `String`
//! to [`Value`]:
//!
//! * the **shared memory**, one per instance, visible to every action;
//! * a **private memory slot** per node whose action was registered with
//!   [`Action::stateful`]. The slot starts as a copy of the node
//!   description's extra properties.
//!
//! ```rust
//! use behavior_tick::{memory, Action, Node, Registry, Tree};
//!
//! let mut registry: Registry<()> = Registry::default();
//! registry
//!     .register("Compare", Action::stateful(|_ctx: &mut (), memory, node| {
//!         node.get("count") == memory.get("count")
//!     }))
//!     .unwrap();
//!
//! let tree = Tree::load(
//!     Node::new("Compare").named("myNode").prop("count", 12),
//! )
//! .unwrap();
//!
//! let instance = tree.create_instance_with(&registry, memory! { "count" => 12 });
//! let slot = instance.node_memory("myNode").unwrap();
//! assert_eq!(slot.get("count").and_then(|v| v.as_i64()), Some(12));
//! ```
//!
//! Nodes with an `id` can have their slot inspected from outside through
//! [`Instance::node_memory`], keyed by the id string rather than the
//! internal node index.
//!
//! An action may also declare an `init` callback
//! ([`Action::stateless_with_init`], [`Action::stateful_with_init`]).
//! `init` runs before `update` whenever the node becomes active: on the
//! first tick that reaches it, and again on any tick where a *different*
//! node was the one still running. Re-ticking the node that itself
//! returned [`Outcome::Running`] on the previous tick skips `init`, so a
//! long-running action performs its one-time setup exactly once per
//! activation.
//!
//!
//! ## The text format
//!
//! Trees can be written in a small config format and parsed with
//! [`parse_file`]. The AST borrows from the source string; instantiate
//! trees from it with [`load`] (the `main` tree) or [`load_tree`] (any
//! named tree).
//!
//! ```raw
//! # Patrol back and forth until the battery runs low.
//! tree main = Selector {
//!     CheckBattery (id = "battery", threshold = 20)
//!     Recharge
//! }
//! ```
//!
//! A node is an identifier, optionally followed by a parenthesized,
//! comma-separated attribute list and a braced list of children.
//! Attribute values are literals: a double-quoted string, a number or
//! `true`/`false`. The `id` attribute names the node; every other
//! attribute becomes a property of the node description. A hash (`#`)
//! starts a line comment.
//!
//! ```rust
//! use behavior_tick::{load, parse_file, Action, Outcome, Registry};
//!
//! let source = r#"
//! tree main = Selector {
//!     CheckBattery (id = "battery", threshold = 20)
//!     Recharge
//! }
//! "#;
//!
//! let (_, parsed) = parse_file(source).unwrap();
//! let tree = load(&parsed).unwrap();
//!
//! let mut registry: Registry<i32> = Registry::default();
//! registry
//!     .register("CheckBattery", Action::stateful(|level: &mut i32, _memory, node| {
//!         let threshold = node.get("threshold").and_then(|v| v.as_i64()).unwrap_or(0);
//!         i64::from(*level) >= threshold
//!     }))
//!     .unwrap();
//! registry
//!     .register("Recharge", Action::stateless(|level: &mut i32, _memory| {
//!         *level = 100;
//!         true
//!     }))
//!     .unwrap();
//!
//! let mut instance = tree.create_instance(&registry);
//! let mut level = 5;
//! assert_eq!(
//!     tree.update(&mut level, &mut instance, &registry).unwrap(),
//!     Outcome::Success
//! );
//! assert_eq!(level, 100);
//! ```
//!
//!
//! ## Loading from YAML
//!
//! The same node description deserializes from a YAML document with a
//! single `root` key, which is handy when trees are produced by other
//! tools.
//!
//! ```yaml
//! root:
//!   name: Sequence
//!   kids:
//!     - name: Compare
//!       id: myNode
//!       count: 12
//! ```
//!
//! See [`load_yaml`].
//!
//!
//! ## Sharing
//!
//! A [`Tree`] and a [`Registry`] are read-only during evaluation and can
//! be shared freely, including across threads (action callbacks must be
//! `Send + Sync`, which the registration bounds enforce). An
//! [`Instance`] is the single-writer part: tick it from one place at a
//! time.

pub mod error;
mod instance;
mod node;
pub mod parser;
mod registry;
mod tick;
mod tree;

use std::collections::HashMap;

pub use crate::{
    instance::Instance,
    node::Node,
    parser::{load, load_tree, load_yaml, parse_file, TreeSource},
    registry::{Action, Registry},
    tree::Tree,
};
pub use serde_yaml::Value;

/// The result of evaluating any node.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    Success,
    Failure,
    /// The node should keep running in the next tick
    Running,
}

/// Conversion into an [`Outcome`] at the registration boundary.
///
/// Implemented for `Outcome` itself and for `bool`, so condition-like
/// actions can simply return a boolean.
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Outcome {
        if self {
            Outcome::Success
        } else {
            Outcome::Failure
        }
    }
}

/// A key/value map used for both the shared memory and the per-node
/// memory slots.
pub type Memory = HashMap<String, Value>;

/// Builds a [`Memory`] from `"key" => value` pairs.
///
/// ```
/// use behavior_tick::memory;
///
/// let memory = memory! { "count" => 12, "name" => "scout" };
/// assert_eq!(memory.get("count").and_then(|v| v.as_i64()), Some(12));
/// ```
#[macro_export]
macro_rules! memory {
    () => {
        $crate::Memory::default()
    };
    ($($key: literal => $val: expr),* $(,)?) => {{
        let mut ret = $crate::Memory::default();
        $(ret.insert($key.to_string(), $crate::Value::from($val));)*
        ret
    }};
}
