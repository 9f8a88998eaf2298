// Control handler contract
//
// A control handler is one unit of character behavior (locomotion, attack,
// freeze, wall jump, ...). Handlers compete for control of a character through
// the `CharacterController` stack.

use std::fmt;

/// Error type returned by a failing handler update
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a handler update
pub type HandlerResult = Result<AfterUpdateStatus, BoxError>;

/// Outcome of a single handler update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AfterUpdateStatus {
    /// The handler keeps control of the character
    Continue,
    /// The handler finished its job and should be popped and disposed
    CanBeDisposed,
}

impl AfterUpdateStatus {
    /// Returns `true` if the handler asked to be removed
    #[inline]
    pub fn can_be_disposed(self) -> bool {
        matches!(self, Self::CanBeDisposed)
    }
}

/// Identity of a handler inside a controller
///
/// Ids are handed out by the controller on push/insert/exchange and are
/// never reused by the same controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(pub(crate) u64);

impl HandlerId {
    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A unit of character behavior driven by a `CharacterController`.
///
/// The controller owns the context `C` (usually the character) and lends it to
/// every callback.
///
/// # Lifecycle
///
/// 1. Created by game code and pushed onto a controller.
/// 2. `try_activate` each time it becomes the top of the stack.
/// 3. `update` once per frame while it is the active handler.
/// 4. `on_after_stack_peek_update` once per frame while it sits below the top.
/// 5. `dispose` exactly once, when it leaves the stack.
pub trait ControlHandler<C> {
    /// Name used in log messages
    fn name(&self) -> &str {
        // Generic arguments carry their own paths, cut them off first
        let full = std::any::type_name::<Self>();
        let path = full.split('<').next().unwrap_or(full);
        path.rsplit("::").next().unwrap_or(path)
    }

    /// Try to take control of the character.
    ///
    /// `previous` is the handler that was active right before this one, if
    /// any. It may already be disposed (when it was just popped). Returning
    /// `false` makes the controller pop and dispose this handler and try the
    /// one below it.
    fn try_activate(&mut self, _ctx: &mut C, _previous: Option<&dyn ControlHandler<C>>) -> bool {
        true
    }

    /// Per-frame update, only called on the active handler
    fn update(&mut self, ctx: &mut C) -> HandlerResult;

    /// Called after the active handler's update settled, on every handler
    /// below the top of the stack
    fn on_after_stack_peek_update(&mut self, _ctx: &mut C) {}

    /// Release whatever the handler holds. Called exactly once.
    fn dispose(&mut self, _ctx: &mut C) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::marker::PhantomData;

    struct Noop;

    impl ControlHandler<()> for Noop {
        fn update(&mut self, _ctx: &mut ()) -> HandlerResult {
            Ok(AfterUpdateStatus::Continue)
        }
    }

    #[test]
    fn test_default_name_is_type_name() {
        let handler = Noop;
        assert_eq!(handler.name(), "Noop");
    }

    struct Wrapper<T>(PhantomData<T>);

    impl<T> ControlHandler<()> for Wrapper<T> {
        fn update(&mut self, _ctx: &mut ()) -> HandlerResult {
            Ok(AfterUpdateStatus::Continue)
        }
    }

    #[test]
    fn test_default_name_drops_generic_arguments() {
        let handler = Wrapper::<Noop>(PhantomData);
        assert_eq!(handler.name(), "Wrapper");

        let nested = Wrapper::<Wrapper<HashMap<u8, Noop>>>(PhantomData);
        assert_eq!(nested.name(), "Wrapper");
    }

    #[test]
    fn test_default_activation_succeeds() {
        let mut handler = Noop;
        assert!(handler.try_activate(&mut (), None));
    }

    #[test]
    fn test_status_helpers() {
        assert!(AfterUpdateStatus::CanBeDisposed.can_be_disposed());
        assert!(!AfterUpdateStatus::Continue.can_be_disposed());
    }

    #[test]
    fn test_handler_id_display() {
        assert_eq!(HandlerId(7).to_string(), "#7");
        assert_eq!(HandlerId(7).as_u64(), 7);
    }
}
