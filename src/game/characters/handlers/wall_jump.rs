// Wall jump handler

use log::debug;

use crate::engine::control::{AfterUpdateStatus, ControlHandler, HandlerResult};
use crate::game::characters::{Character, WallSide};

/// Kick off a wall while airborne.
///
/// Only activates when the character is in the air and touching a wall.
/// While active, horizontal input is ignored so the push away from the wall
/// cannot be cancelled immediately.
#[derive(Debug)]
pub struct WallJumpHandler {
    frames_remaining: u32,
    wall: Option<WallSide>,
}

impl WallJumpHandler {
    /// Wall jump that locks input for `frames` updates
    pub fn new(frames: u32) -> Self {
        Self {
            frames_remaining: frames.max(1),
            wall: None,
        }
    }

    /// Wall jump using the character's configured lock duration
    pub fn for_character(character: &Character) -> Self {
        Self::new(character.stats.wall_jump_frames)
    }

    /// Wall the jump pushed off from, once activated
    pub fn wall(&self) -> Option<WallSide> {
        self.wall
    }
}

impl ControlHandler<Character> for WallJumpHandler {
    fn name(&self) -> &str {
        "wall_jump"
    }

    fn try_activate(&mut self, ctx: &mut Character, _previous: Option<&dyn ControlHandler<Character>>) -> bool {
        // Already kicked off: resume without a second kick
        if self.wall.is_some() {
            return true;
        }

        let Some(wall) = ctx.wall_contact else {
            return false;
        };
        if ctx.grounded || ctx.frozen {
            return false;
        }

        let away = -wall.direction();
        ctx.velocity.x = away * ctx.stats.wall_jump_push;
        ctx.velocity.y = ctx.stats.wall_jump_velocity;
        ctx.face(away);
        self.wall = Some(wall);

        debug!("{}: wall jump off {:?} wall", ctx.name, wall);
        true
    }

    fn update(&mut self, ctx: &mut Character) -> HandlerResult {
        if ctx.grounded {
            return Ok(AfterUpdateStatus::CanBeDisposed);
        }

        self.frames_remaining = self.frames_remaining.saturating_sub(1);
        if self.frames_remaining == 0 {
            return Ok(AfterUpdateStatus::CanBeDisposed);
        }

        Ok(AfterUpdateStatus::Continue)
    }
}
