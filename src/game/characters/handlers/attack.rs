// Melee attack handler

use log::debug;

use crate::core::math;
use crate::engine::control::{AfterUpdateStatus, ControlHandler, HandlerResult};
use crate::game::characters::Character;

/// Timed melee attack.
///
/// Finishes after its frame budget. If another handler keeps control while
/// the attack sits below the top of the stack, the attack counts as
/// interrupted and refuses to resume, so it is discarded as soon as it is
/// uncovered.
#[derive(Debug)]
pub struct AttackHandler {
    frames_remaining: u32,
    interrupted: bool,
}

impl AttackHandler {
    /// Attack lasting `frames` updates
    pub fn new(frames: u32) -> Self {
        Self {
            frames_remaining: frames.max(1),
            interrupted: false,
        }
    }

    /// Attack lasting the character's configured attack duration
    pub fn for_character(character: &Character) -> Self {
        Self::new(character.stats.attack_frames)
    }

    pub fn frames_remaining(&self) -> u32 {
        self.frames_remaining
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }
}

impl ControlHandler<Character> for AttackHandler {
    fn name(&self) -> &str {
        "attack"
    }

    fn try_activate(&mut self, ctx: &mut Character, _previous: Option<&dyn ControlHandler<Character>>) -> bool {
        if self.interrupted || ctx.frozen {
            debug!("{}: attack cannot resume", ctx.name);
            return false;
        }

        ctx.attacking = true;
        true
    }

    fn update(&mut self, ctx: &mut Character) -> HandlerResult {
        // Planted attack on the ground, momentum is kept in the air
        if ctx.grounded {
            let braking = ctx.stats.ground_acceleration * ctx.delta_time;
            ctx.velocity.x = math::approach(ctx.velocity.x, 0.0, braking);
        }

        self.frames_remaining = self.frames_remaining.saturating_sub(1);
        if self.frames_remaining == 0 {
            return Ok(AfterUpdateStatus::CanBeDisposed);
        }

        Ok(AfterUpdateStatus::Continue)
    }

    fn on_after_stack_peek_update(&mut self, ctx: &mut Character) {
        if !self.interrupted {
            debug!("{}: attack interrupted", ctx.name);
            self.interrupted = true;
            ctx.attacking = false;
        }
    }

    fn dispose(&mut self, ctx: &mut Character) {
        ctx.attacking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::control::CharacterController;
    use crate::game::characters::handlers::{LocomotionHandler, WallJumpHandler};
    use crate::game::characters::stats::BASE_STATS;
    use crate::game::characters::WallSide;
    use glam::Vec2;

    fn character() -> Character {
        let mut character = Character::new(0, "hero", BASE_STATS, Vec2::ZERO);
        character.delta_time = 1.0 / 60.0;
        character
    }

    #[test]
    fn test_attack_runs_for_frame_budget() {
        let mut character = character();
        let mut attack = AttackHandler::new(3);
        assert!(attack.try_activate(&mut character, None));
        assert!(character.attacking);

        assert_eq!(attack.update(&mut character).unwrap(), AfterUpdateStatus::Continue);
        assert_eq!(attack.update(&mut character).unwrap(), AfterUpdateStatus::Continue);
        assert_eq!(
            attack.update(&mut character).unwrap(),
            AfterUpdateStatus::CanBeDisposed
        );
    }

    #[test]
    fn test_zero_frames_still_lasts_one_update() {
        let mut character = character();
        let mut attack = AttackHandler::new(0);
        assert_eq!(attack.frames_remaining(), 1);
        assert_eq!(
            attack.update(&mut character).unwrap(),
            AfterUpdateStatus::CanBeDisposed
        );
    }

    #[test]
    fn test_attack_brakes_on_ground() {
        let mut character = character();
        character.velocity.x = 8.0;
        let mut attack = AttackHandler::for_character(&character);

        attack.update(&mut character).unwrap();

        assert!(character.velocity.x < 8.0);
        assert_eq!(attack.frames_remaining(), BASE_STATS.attack_frames - 1);
    }

    #[test]
    fn test_frozen_character_cannot_attack() {
        let mut character = character();
        character.frozen = true;
        let mut attack = AttackHandler::new(5);

        assert!(!attack.try_activate(&mut character, None));
        assert!(!character.attacking);
    }

    #[test]
    fn test_covered_attack_does_not_resume() {
        let mut character = character();
        let mut attack = AttackHandler::new(5);
        attack.try_activate(&mut character, None);

        attack.on_after_stack_peek_update(&mut character);

        assert!(attack.is_interrupted());
        assert!(!character.attacking);
        assert!(!attack.try_activate(&mut character, None));
    }

    #[test]
    fn test_declined_push_does_not_cancel_attack() {
        let mut controller = CharacterController::new("hero", character());
        controller.push_control_handler(Box::new(LocomotionHandler::new()));
        let attack = controller.push_control_handler(Box::new(AttackHandler::new(10)));

        // Grounded: the wall jump declines and the attack resumes
        controller.push_control_handler(Box::new(WallJumpHandler::new(5)));

        assert_eq!(controller.active_handler_id(), Some(attack));
        assert!(controller.context().attacking);
    }

    #[test]
    fn test_attack_returns_control_to_locomotion() {
        let mut controller = CharacterController::new("hero", character());
        let locomotion = controller.push_control_handler(Box::new(LocomotionHandler::new()));
        controller.push_control_handler(Box::new(AttackHandler::new(2)));
        assert!(controller.context().attacking);

        controller.update().unwrap();
        assert!(controller.context().attacking);

        controller.update().unwrap();
        assert_eq!(controller.active_handler_id(), Some(locomotion));
        assert!(!controller.context().attacking);
        assert_eq!(controller.len(), 1);
    }

    #[test]
    fn test_wall_jump_interrupts_attack() {
        let mut character = character();
        character.grounded = false;
        character.position.y = 3.0;
        character.wall_contact = Some(WallSide::Left);

        let mut controller = CharacterController::new("hero", character);
        let locomotion = controller.push_control_handler(Box::new(LocomotionHandler::new()));
        controller.push_control_handler(Box::new(AttackHandler::new(30)));
        controller.push_control_handler(Box::new(WallJumpHandler::new(2)));
        assert_eq!(controller.handler_names(), vec!["locomotion", "attack", "wall_jump"]);

        // Wall jump keeps control, the attack underneath notices
        controller.update().unwrap();
        assert!(!controller.context().attacking);

        // Wall jump finishes; the interrupted attack declines and falls through
        controller.update().unwrap();
        assert_eq!(controller.active_handler_id(), Some(locomotion));
        assert_eq!(controller.handler_names(), vec!["locomotion"]);
    }
}
