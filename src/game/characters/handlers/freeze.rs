// Freeze handler: character ignores input for a while (hit stun)

use glam::Vec2;

use crate::engine::control::{AfterUpdateStatus, ControlHandler, HandlerResult};
use crate::game::characters::Character;

/// Holds the character in place for a number of frames
#[derive(Debug)]
pub struct FreezeHandler {
    frames_remaining: u32,
}

impl FreezeHandler {
    pub fn new(frames: u32) -> Self {
        Self {
            frames_remaining: frames.max(1),
        }
    }

    /// Freeze lasting the character's configured duration
    pub fn for_character(character: &Character) -> Self {
        Self::new(character.stats.freeze_frames)
    }

    pub fn frames_remaining(&self) -> u32 {
        self.frames_remaining
    }
}

impl ControlHandler<Character> for FreezeHandler {
    fn name(&self) -> &str {
        "freeze"
    }

    fn try_activate(&mut self, ctx: &mut Character, _previous: Option<&dyn ControlHandler<Character>>) -> bool {
        ctx.frozen = true;
        ctx.velocity = Vec2::ZERO;
        true
    }

    fn update(&mut self, ctx: &mut Character) -> HandlerResult {
        // Gravity still applies, horizontal motion does not
        ctx.velocity.x = 0.0;

        self.frames_remaining = self.frames_remaining.saturating_sub(1);
        if self.frames_remaining == 0 {
            return Ok(AfterUpdateStatus::CanBeDisposed);
        }

        Ok(AfterUpdateStatus::Continue)
    }

    fn dispose(&mut self, ctx: &mut Character) {
        ctx.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::control::CharacterController;
    use crate::game::characters::handlers::{AttackHandler, LocomotionHandler};
    use crate::game::characters::stats::BASE_STATS;
    use crate::game::characters::{AxisState, FrameInput};

    fn character() -> Character {
        let mut character = Character::new(0, "hero", BASE_STATS, Vec2::ZERO);
        character.delta_time = 1.0 / 60.0;
        character
    }

    #[test]
    fn test_freeze_stops_character() {
        let mut character = character();
        character.velocity = Vec2::new(5.0, 2.0);
        let mut freeze = FreezeHandler::for_character(&character);

        assert!(freeze.try_activate(&mut character, None));
        assert!(character.frozen);
        assert_eq!(character.velocity, Vec2::ZERO);
        assert_eq!(freeze.frames_remaining(), BASE_STATS.freeze_frames);
    }

    #[test]
    fn test_freeze_ignores_input_until_released() {
        let mut controller = CharacterController::new("hero", character());
        let locomotion = controller.push_control_handler(Box::new(LocomotionHandler::new()));
        controller.push_control_handler(Box::new(FreezeHandler::new(3)));

        let run_right = FrameInput {
            axis: AxisState::new(1.0, 0.0),
            ..Default::default()
        };

        for _ in 0..2 {
            controller.context_mut().begin_frame(run_right, 1.0 / 60.0);
            controller.update().unwrap();
            assert_eq!(controller.context().velocity.x, 0.0);
        }

        // Third frame: freeze ends and locomotion takes over in the same frame
        controller.context_mut().begin_frame(run_right, 1.0 / 60.0);
        controller.update().unwrap();
        assert_eq!(controller.active_handler_id(), Some(locomotion));
        assert!(!controller.context().frozen);
        assert!(controller.context().velocity.x > 0.0);
    }

    #[test]
    fn test_freeze_cancels_attack_in_progress() {
        let mut controller = CharacterController::new("hero", character());
        let locomotion = controller.push_control_handler(Box::new(LocomotionHandler::new()));
        controller.push_control_handler(Box::new(AttackHandler::new(20)));
        controller.update().unwrap();

        controller.push_control_handler(Box::new(FreezeHandler::new(2)));
        controller.update().unwrap();
        assert!(!controller.context().attacking);

        controller.update().unwrap();
        assert_eq!(controller.active_handler_id(), Some(locomotion));
        assert!(!controller.context().attacking);
        assert!(!controller.context().frozen);
    }

    #[test]
    fn test_hit_exchanges_active_attack_for_freeze() {
        let mut controller = CharacterController::new("hero", character());
        let locomotion = controller.push_control_handler(Box::new(LocomotionHandler::new()));
        controller.push_control_handler(Box::new(AttackHandler::new(20)));
        controller.update().unwrap();
        assert!(controller.context().attacking);

        let freeze = controller
            .exchange_active_control_handler(Box::new(FreezeHandler::new(1)))
            .unwrap();

        assert_eq!(controller.active_handler_id(), Some(freeze));
        assert_eq!(controller.len(), 2);
        assert!(!controller.context().attacking);
        assert!(controller.context().frozen);

        controller.update().unwrap();
        assert_eq!(controller.active_handler_id(), Some(locomotion));
        assert!(!controller.context().frozen);
    }
}
