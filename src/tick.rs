use crate::{
    error::UpdateError,
    node::{Node, NodeKind},
    registry::{Action, Registry},
    Instance, Memory, Outcome, Tree,
};

impl Tree {
    /// Performs one tick: a single synchronous recursive evaluation of
    /// the whole tree against `instance`.
    ///
    /// `ctx` is an opaque caller value handed through unmodified to every
    /// leaf `init` and `update` callback, so per-tick data can reach the
    /// actions without going through the shared memory.
    ///
    /// A leaf whose name has no registered action aborts the tick with
    /// [`UpdateError::UnknownAction`]; only `Success`, `Failure` and
    /// `Running` are carried forward as ordinary results.
    pub fn update<C>(
        &self,
        ctx: &mut C,
        instance: &mut Instance,
        registry: &Registry<C>,
    ) -> Result<Outcome, UpdateError> {
        let outcome = tick_node(&self.root, ctx, instance, registry)?;
        if outcome != Outcome::Running {
            instance.running = None;
        }
        Ok(outcome)
    }
}

fn tick_node<C>(
    node: &Node,
    ctx: &mut C,
    instance: &mut Instance,
    registry: &Registry<C>,
) -> Result<Outcome, UpdateError> {
    let kind = match NodeKind::from_name(&node.name) {
        Some(kind) => kind,
        None => return tick_leaf(node, ctx, instance, registry),
    };

    let outcome = match kind {
        NodeKind::Sequence => {
            let mut result = Outcome::Success;
            for kid in &node.kids {
                match tick_node(kid, ctx, instance, registry)? {
                    Outcome::Success => (),
                    other => {
                        result = other;
                        break;
                    }
                }
            }
            result
        }
        NodeKind::Selector => {
            let mut result = Outcome::Failure;
            for kid in &node.kids {
                match tick_node(kid, ctx, instance, registry)? {
                    Outcome::Failure => (),
                    other => {
                        result = other;
                        break;
                    }
                }
            }
            result
        }
        NodeKind::Inverter => match node.kids.first() {
            Some(kid) => match tick_node(kid, ctx, instance, registry)? {
                Outcome::Success => Outcome::Failure,
                Outcome::Failure => Outcome::Success,
                Outcome::Running => Outcome::Running,
            },
            None => Outcome::Success,
        },
        NodeKind::Succeeder => match node.kids.first() {
            Some(kid) => match tick_node(kid, ctx, instance, registry)? {
                Outcome::Running => Outcome::Running,
                _ => Outcome::Success,
            },
            None => Outcome::Success,
        },
        NodeKind::Failer => match node.kids.first() {
            Some(kid) => match tick_node(kid, ctx, instance, registry)? {
                Outcome::Running => Outcome::Running,
                _ => Outcome::Failure,
            },
            None => Outcome::Failure,
        },
        // The repeat decorators block the current tick: the child's
        // Running results keep the loop going and are never surfaced.
        NodeKind::RepeatUntilSuccess => match node.kids.first() {
            Some(kid) => {
                while tick_node(kid, ctx, instance, registry)? != Outcome::Success {}
                Outcome::Success
            }
            None => Outcome::Success,
        },
        NodeKind::RepeatUntilFailure => match node.kids.first() {
            Some(kid) => {
                while tick_node(kid, ctx, instance, registry)? != Outcome::Failure {}
                Outcome::Success
            }
            None => Outcome::Success,
        },
    };
    Ok(outcome)
}

fn tick_leaf<C>(
    node: &Node,
    ctx: &mut C,
    instance: &mut Instance,
    registry: &Registry<C>,
) -> Result<Outcome, UpdateError> {
    let action = registry
        .lookup(&node.name)
        .ok_or_else(|| UpdateError::UnknownAction(node.name.clone()))?;

    // A leaf that was running on the previous tick resumes without
    // re-initialization; any other visit counts as becoming active.
    let fresh = instance.running != Some(node.index);

    let Instance { memory, slots, .. } = instance;
    let outcome = match action {
        Action::Stateless { init, update } => {
            if fresh {
                if let Some(init) = init {
                    init(ctx, memory);
                }
            }
            update(ctx, memory)
        }
        Action::Stateful { init, update } => {
            let slot = slots[node.index].get_or_insert_with(Memory::default);
            if fresh {
                if let Some(init) = init {
                    init(ctx, memory, slot);
                }
            }
            update(ctx, memory, slot)
        }
    };

    if outcome == Outcome::Running {
        instance.running = Some(node.index);
    }
    Ok(outcome)
}
