// Character control system
//
// Layered control handlers deciding which behavior owns a character each
// frame.
//
// ## Architecture
//
// - `handler`: the `ControlHandler` contract and update status
// - `stack`: indexable LIFO stack the handlers live on
// - `controller`: `CharacterController`, the per-character orchestrator
//
// ## Usage Example
//
// ```rust
// use engine::control::CharacterController;
//
// let mut controller = CharacterController::new("hero", character);
//
// // The bottom handler must always be able to activate
// controller.push_control_handler(Box::new(LocomotionHandler::new()));
//
// // Layer an attack on top; it returns control when it finishes
// controller.push_control_handler(Box::new(AttackHandler::new(12)));
//
// // Once per frame
// controller.update()?;
// ```

pub mod controller;
pub mod handler;
pub mod stack;

pub use controller::CharacterController;
pub use handler::{AfterUpdateStatus, BoxError, ControlHandler, HandlerId, HandlerResult};
pub use stack::HandlerStack;

/// Control handler stack errors
#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Handler index {index} out of range (stack holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Handler {0} is not on the stack")]
    UnknownHandler(HandlerId),

    #[error("Handler stack is empty")]
    EmptyStack,

    #[error("Character {character}: handler {handler} failed to update")]
    HandlerUpdate {
        character: String,
        handler: String,
        #[source]
        source: BoxError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_control_error_display() {
        let err = ControlError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Handler index 4 out of range (stack holds 2)");

        let err = ControlError::UnknownHandler(HandlerId(3));
        assert_eq!(err.to_string(), "Handler #3 is not on the stack");
    }

    #[test]
    fn test_handler_update_error_keeps_source() {
        let err = ControlError::HandlerUpdate {
            character: "hero".to_string(),
            handler: "attack".to_string(),
            source: "missing weapon".into(),
        };

        assert_eq!(err.to_string(), "Character hero: handler attack failed to update");
        assert_eq!(err.source().map(|s| s.to_string()), Some("missing weapon".to_string()));
    }
}
