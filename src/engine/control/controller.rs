// Character controller: owns a character's control handler stack
//
// The controller decides which handler is in charge of the character. Every
// frame the active (top) handler is updated; handlers that report
// `CanBeDisposed` are popped and the next one down gets a chance to activate.
// Handlers below the top get a passive notification once the frame settled.

use std::fmt;

use log::{debug, error, info};

use super::handler::{ControlHandler, HandlerId};
use super::stack::HandlerStack;
use super::ControlError;

/// A handler together with its identity inside the controller
struct StackEntry<C> {
    id: HandlerId,
    handler: Box<dyn ControlHandler<C>>,
}

/// The handler that was in charge before an activation attempt
enum Previous<C> {
    None,
    /// Still on the stack, below the handler being activated
    Stacked(HandlerId),
    /// Already popped and disposed
    Popped(Box<dyn ControlHandler<C>>),
}

/// Owns a character context and the stack of handlers acting on it.
///
/// Index 0 of the stack is the default handler. The active handler is always
/// the top of the stack, or none when the stack ran out of handlers that
/// could activate.
pub struct CharacterController<C> {
    /// Character name, used in diagnostics
    name: String,
    /// State shared by all handlers of this character
    context: C,
    handlers: HandlerStack<StackEntry<C>>,
    active: Option<HandlerId>,
    next_id: u64,
}

impl<C> CharacterController<C> {
    /// Create a controller with an empty handler stack
    pub fn new(name: impl Into<String>, context: C) -> Self {
        Self {
            name: name.into(),
            context,
            handlers: HandlerStack::new(),
            active: None,
            next_id: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character state the handlers act on
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// The handler currently in control of the character
    pub fn active_control_handler(&self) -> Option<&dyn ControlHandler<C>> {
        let id = self.active?;
        self.handlers
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.handler.as_ref())
    }

    pub fn active_handler_id(&self) -> Option<HandlerId> {
        self.active
    }

    /// Check if a handler is in control
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of handlers on the stack
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler ids from bottom to top
    pub fn handler_ids(&self) -> Vec<HandlerId> {
        self.handlers.iter().map(|entry| entry.id).collect()
    }

    /// Handler names from bottom to top
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|entry| entry.handler.name()).collect()
    }

    /// Stack index of a handler
    pub fn position_of(&self, id: HandlerId) -> Option<usize> {
        self.handlers.position(|entry| entry.id == id)
    }

    /// Push a handler and try to activate it.
    ///
    /// If it declines, it is disposed and the handlers below get their turn.
    pub fn push_control_handler(&mut self, handler: Box<dyn ControlHandler<C>>) -> HandlerId {
        let id = self.allocate_id();
        info!("{}: pushing handler {} ({})", self.name, handler.name(), id);

        self.handlers.push(StackEntry { id, handler });

        let previous = self.previous_active();
        self.try_activate_current_control_handler(previous);

        id
    }

    /// Push several handlers in order, then activate from the new top.
    ///
    /// Only the last handler gets an activation attempt unless it declines.
    pub fn push_control_handlers<I>(&mut self, handlers: I) -> Vec<HandlerId>
    where
        I: IntoIterator<Item = Box<dyn ControlHandler<C>>>,
    {
        let mut ids = Vec::new();
        for handler in handlers {
            let id = self.allocate_id();
            info!(
                "{}: pushing (chained) handler {} ({})",
                self.name,
                handler.name(),
                id
            );
            self.handlers.push(StackEntry { id, handler });
            ids.push(id);
        }

        if !ids.is_empty() {
            let previous = self.previous_active();
            self.try_activate_current_control_handler(previous);
        }

        ids
    }

    /// Insert a handler at `index`.
    ///
    /// Inserting at or past the top behaves like a push. Anything lower
    /// leaves the active handler alone.
    pub fn insert_control_handler(
        &mut self,
        index: usize,
        handler: Box<dyn ControlHandler<C>>,
    ) -> HandlerId {
        info!(
            "{}: inserting handler {} at index {}",
            self.name,
            handler.name(),
            index
        );

        if index >= self.handlers.len() {
            return self.push_control_handler(handler);
        }

        let id = self.allocate_id();
        self.handlers.insert(index, StackEntry { id, handler });
        id
    }

    /// Insert a handler right below the current top, without activating it
    pub fn insert_control_handler_before_current(
        &mut self,
        handler: Box<dyn ControlHandler<C>>,
    ) -> HandlerId {
        let index = self.handlers.len().saturating_sub(1);
        info!(
            "{}: inserting handler {} at index {}",
            self.name,
            handler.name(),
            index
        );

        let id = self.allocate_id();
        self.handlers.insert(index, StackEntry { id, handler });
        id
    }

    /// Remove and dispose a handler.
    ///
    /// Removing the active handler reactivates the stack from the new top.
    pub fn remove_control_handler(&mut self, id: HandlerId) -> Result<(), ControlError> {
        if self.active == Some(id) {
            let mut removed = self.handlers.pop().ok_or(ControlError::UnknownHandler(id))?;
            info!("{}: removing handler {} ({})", self.name, removed.handler.name(), id);

            removed.handler.dispose(&mut self.context);
            self.try_activate_current_control_handler(Previous::Popped(removed.handler));
        } else {
            let mut removed = self
                .handlers
                .remove(|entry| entry.id == id)
                .ok_or(ControlError::UnknownHandler(id))?;
            info!("{}: removing handler {} ({})", self.name, removed.handler.name(), id);

            removed.handler.dispose(&mut self.context);
        }

        Ok(())
    }

    /// Replace the top handler
    pub fn exchange_active_control_handler(
        &mut self,
        handler: Box<dyn ControlHandler<C>>,
    ) -> Result<HandlerId, ControlError> {
        let top = self
            .handlers
            .len()
            .checked_sub(1)
            .ok_or(ControlError::EmptyStack)?;
        self.exchange_control_handler(top, handler)
    }

    /// Replace the handler at `index` and dispose the replaced one.
    ///
    /// If the replaced handler was active, the new one goes through the
    /// activation cascade. Otherwise the active handler is unchanged.
    pub fn exchange_control_handler(
        &mut self,
        index: usize,
        handler: Box<dyn ControlHandler<C>>,
    ) -> Result<HandlerId, ControlError> {
        let len = self.handlers.len();
        let Some(current) = self.handlers.get(index) else {
            return Err(ControlError::IndexOutOfRange { index, len });
        };

        let was_active = self.active == Some(current.id);
        info!(
            "{}: exchanging handler {} (index: {}) with {}",
            self.name,
            current.handler.name(),
            index,
            handler.name()
        );

        let id = self.allocate_id();
        let mut replaced = self
            .handlers
            .exchange(index, StackEntry { id, handler })
            .map_err(|_| ControlError::IndexOutOfRange { index, len })?;

        replaced.handler.dispose(&mut self.context);

        if was_active {
            self.try_activate_current_control_handler(Previous::Popped(replaced.handler));
        }

        Ok(id)
    }

    /// Dispose every handler from the top down, then push `default` if given
    pub fn reset_control_handlers(
        &mut self,
        default: Option<Box<dyn ControlHandler<C>>>,
    ) -> Option<HandlerId> {
        info!("{}: resetting control handlers", self.name);

        while let Some(mut entry) = self.handlers.pop() {
            info!(
                "{}: removing handler {} ({})",
                self.name,
                entry.handler.name(),
                entry.id
            );
            entry.handler.dispose(&mut self.context);
        }

        self.active = None;

        default.map(|handler| self.push_control_handler(handler))
    }

    /// Run one frame.
    ///
    /// Updates the active handler. Each handler that finishes is popped and
    /// the next one down is activated and updated in the same frame, until a
    /// handler continues or the stack runs out. Afterwards every handler below
    /// the top receives `on_after_stack_peek_update`, top-down.
    ///
    /// A failing handler update is logged and returned; the stack is left as
    /// it was when the failure happened.
    pub fn update(&mut self) -> Result<(), ControlError> {
        if self.active.is_none() {
            return Ok(());
        }

        while let Some(top) = self.handlers.peek_mut() {
            let status = match top.handler.update(&mut self.context) {
                Ok(status) => status,
                Err(source) => {
                    error!(
                        "{}: handler {} ({}) failed to update: {}",
                        self.name,
                        top.handler.name(),
                        top.id,
                        source
                    );
                    return Err(ControlError::HandlerUpdate {
                        character: self.name.clone(),
                        handler: top.handler.name().to_string(),
                        source,
                    });
                }
            };

            if !status.can_be_disposed() {
                break;
            }

            let Some(mut finished) = self.handlers.pop() else {
                break;
            };
            finished.handler.dispose(&mut self.context);
            info!(
                "{}: popped handler {} ({})",
                self.name,
                finished.handler.name(),
                finished.id
            );

            self.try_activate_current_control_handler(Previous::Popped(finished.handler));

            if self.active.is_none() {
                break;
            }
        }

        // Layers below the top may react to what happened this frame,
        // e.g. an attack cancelling itself after a wall jump took over.
        for index in (0..self.handlers.len().saturating_sub(1)).rev() {
            self.handlers[index]
                .handler
                .on_after_stack_peek_update(&mut self.context);
        }

        Ok(())
    }

    fn allocate_id(&mut self) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        id
    }

    fn previous_active(&self) -> Previous<C> {
        match self.active {
            Some(id) => Previous::Stacked(id),
            None => Previous::None,
        }
    }

    /// Activation cascade: try the top handler, pop and dispose it on
    /// refusal, and repeat until one activates or the stack is empty.
    fn try_activate_current_control_handler(&mut self, mut previous: Previous<C>) {
        loop {
            let Some((top, below)) = self.handlers.split_top_mut() else {
                self.active = None;
                error!(
                    "{}: no control handler left that can activate, the character misses a default control handler",
                    self.name
                );
                return;
            };

            let previous_handler = match &previous {
                Previous::None => None,
                Previous::Stacked(id) => below
                    .iter()
                    .find(|entry| entry.id == *id)
                    .map(|entry| entry.handler.as_ref()),
                Previous::Popped(handler) => Some(handler.as_ref()),
            };

            if top.handler.try_activate(&mut self.context, previous_handler) {
                debug!(
                    "{}: activated handler {} ({})",
                    self.name,
                    top.handler.name(),
                    top.id
                );
                self.active = Some(top.id);
                return;
            }

            // The stack held `top` a moment ago
            let Some(mut declined) = self.handlers.pop() else {
                return;
            };
            info!(
                "{}: popped handler {} ({})",
                self.name,
                declined.handler.name(),
                declined.id
            );
            declined.handler.dispose(&mut self.context);

            previous = Previous::Popped(declined.handler);
        }
    }
}

impl<C> Drop for CharacterController<C> {
    fn drop(&mut self) {
        while let Some(mut entry) = self.handlers.pop() {
            debug!(
                "{}: disposing handler {} ({}) on drop",
                self.name,
                entry.handler.name(),
                entry.id
            );
            entry.handler.dispose(&mut self.context);
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for CharacterController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharacterController")
            .field("name", &self.name)
            .field("handlers", &self.handler_names())
            .field("active", &self.active)
            .field("context", &self.context)
            .finish()
    }
}
