use std::collections::HashMap;

use crate::{error::RegisterError, node::NodeKind, IntoOutcome, Memory, Outcome};

/// A leaf action, the user-supplied behavior behind a leaf node name.
///
/// Actions come in two capabilities, declared at registration time:
///
/// * [`Action::stateless`] callbacks see the tick context and the
///   instance's shared memory.
/// * [`Action::stateful`] callbacks additionally receive a private memory
///   slot, seeded from the node description's properties when the
///   instance is created. Only stateful actions are given a slot.
///
/// Either capability can carry an `init` callback, invoked before
/// `update` whenever the node becomes active again, that is, on every
/// tick except a re-tick of the node that returned [`Outcome::Running`]
/// on the immediately preceding tick.
///
/// The update callback may return [`Outcome`] or `bool`; booleans map to
/// `Success`/`Failure`.
pub enum Action<C = ()> {
    Stateless {
        init: Option<Box<dyn Fn(&mut C, &mut Memory) + Send + Sync>>,
        update: Box<dyn Fn(&mut C, &mut Memory) -> Outcome + Send + Sync>,
    },
    Stateful {
        init: Option<Box<dyn Fn(&mut C, &mut Memory, &mut Memory) + Send + Sync>>,
        update: Box<dyn Fn(&mut C, &mut Memory, &mut Memory) -> Outcome + Send + Sync>,
    },
}

impl<C> Action<C> {
    pub fn stateless<R, F>(update: F) -> Self
    where
        R: IntoOutcome,
        F: Fn(&mut C, &mut Memory) -> R + Send + Sync + 'static,
    {
        Self::Stateless {
            init: None,
            update: Box::new(move |ctx, memory| update(ctx, memory).into_outcome()),
        }
    }

    pub fn stateless_with_init<R, I, F>(init: I, update: F) -> Self
    where
        R: IntoOutcome,
        I: Fn(&mut C, &mut Memory) + Send + Sync + 'static,
        F: Fn(&mut C, &mut Memory) -> R + Send + Sync + 'static,
    {
        Self::Stateless {
            init: Some(Box::new(init)),
            update: Box::new(move |ctx, memory| update(ctx, memory).into_outcome()),
        }
    }

    pub fn stateful<R, F>(update: F) -> Self
    where
        R: IntoOutcome,
        F: Fn(&mut C, &mut Memory, &mut Memory) -> R + Send + Sync + 'static,
    {
        Self::Stateful {
            init: None,
            update: Box::new(move |ctx, memory, node| update(ctx, memory, node).into_outcome()),
        }
    }

    pub fn stateful_with_init<R, I, F>(init: I, update: F) -> Self
    where
        R: IntoOutcome,
        I: Fn(&mut C, &mut Memory, &mut Memory) + Send + Sync + 'static,
        F: Fn(&mut C, &mut Memory, &mut Memory) -> R + Send + Sync + 'static,
    {
        Self::Stateful {
            init: Some(Box::new(init)),
            update: Box::new(move |ctx, memory, node| update(ctx, memory, node).into_outcome()),
        }
    }

    /// Whether this action receives a private memory slot per node.
    pub fn is_stateful(&self) -> bool {
        matches!(self, Self::Stateful { .. })
    }
}

/// A name to leaf action mapping, owned by the caller and passed by
/// reference into instance creation and evaluation.
///
/// A registry holds no per-instance state, so one registry can back any
/// number of trees and instances, including instances ticked from
/// different threads.
pub struct Registry<C = ()> {
    actions: HashMap<String, Action<C>>,
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }
}

impl<C> Registry<C> {
    /// Registers an action under `name`. Registering the same name again
    /// replaces the previous action.
    ///
    /// Built-in composite and decorator names are rejected with
    /// [`RegisterError::ReservedName`], and names that would not parse as
    /// an identifier in a tree source file with
    /// [`RegisterError::InvalidName`].
    pub fn register(
        &mut self,
        name: impl ToString,
        action: Action<C>,
    ) -> Result<(), RegisterError> {
        let name = name.to_string();
        if NodeKind::from_name(&name).is_some() {
            return Err(RegisterError::ReservedName(name));
        }
        if !is_identifier(&name) {
            return Err(RegisterError::InvalidName(name));
        }
        self.actions.insert(name, action);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Action<C>> {
        self.actions.get(name)
    }

    /// Clears all registrations.
    pub fn reset(&mut self) {
        self.actions.clear();
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
