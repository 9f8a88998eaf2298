// Player state dispatch: picks the animation a character should show
//
// State controllers describe what the body is doing (idle, running, in the
// air, on a wall), weapon controllers describe what the weapon is doing. Each
// group is asked in order and the first controller that handles the frame
// wins; the two answers are then compared by priority.

use super::animation::{clips, AnimationClipInfo, AnimationPlayer};
use super::character::{AxisState, Character};

/// Answer of a single state controller
#[derive(Debug, Clone, PartialEq)]
pub struct StateUpdateResult {
    /// Whether the controller recognized the current situation
    pub handled: bool,
    /// Clip to show, if any
    pub clip: Option<AnimationClipInfo>,
    /// Higher priority wins when state and weapon results compete
    pub priority: i32,
}

impl StateUpdateResult {
    /// Nothing to say about this frame
    pub const UNHANDLED: Self = Self {
        handled: false,
        clip: None,
        priority: i32::MIN,
    };

    /// Handled result showing `clip`
    pub fn handled(clip: AnimationClipInfo, priority: i32) -> Self {
        Self {
            handled: true,
            clip: Some(clip),
            priority,
        }
    }

    /// Pick the stronger of two results.
    ///
    /// Handled beats unhandled, then higher priority wins; on a tie `a` is kept.
    pub fn max(a: Self, b: Self) -> Self {
        match (a.handled, b.handled) {
            (_, false) => a,
            (false, true) => b,
            (true, true) if b.priority > a.priority => b,
            _ => a,
        }
    }
}

/// Maps a character's situation to an animation
pub trait PlayerStateController {
    /// Name used in debug output
    fn name(&self) -> &str;

    fn update_player_state(&mut self, character: &Character, axis: AxisState) -> StateUpdateResult;
}

/// Frozen characters show the frozen clip over everything else
#[derive(Debug, Default)]
pub struct FrozenStateController;

impl PlayerStateController for FrozenStateController {
    fn name(&self) -> &str {
        "frozen"
    }

    fn update_player_state(&mut self, character: &Character, _axis: AxisState) -> StateUpdateResult {
        if !character.frozen {
            return StateUpdateResult::UNHANDLED;
        }
        StateUpdateResult::handled(AnimationClipInfo::new(clips::FROZEN), 100)
    }
}

/// Sliding down a wall
#[derive(Debug, Default)]
pub struct WallStateController;

impl PlayerStateController for WallStateController {
    fn name(&self) -> &str {
        "wall"
    }

    fn update_player_state(&mut self, character: &Character, _axis: AxisState) -> StateUpdateResult {
        if character.grounded || character.wall_contact.is_none() || character.velocity.y > 0.0 {
            return StateUpdateResult::UNHANDLED;
        }
        StateUpdateResult::handled(AnimationClipInfo::new(clips::WALL_SLIDE), 20)
    }
}

/// Rising or falling
#[derive(Debug, Default)]
pub struct AirborneStateController;

impl PlayerStateController for AirborneStateController {
    fn name(&self) -> &str {
        "airborne"
    }

    fn update_player_state(&mut self, character: &Character, _axis: AxisState) -> StateUpdateResult {
        if character.grounded {
            return StateUpdateResult::UNHANDLED;
        }

        let clip = if character.velocity.y > 0.0 {
            AnimationClipInfo::new(clips::JUMP).with_linked(&[clips::WALL_JUMP])
        } else {
            AnimationClipInfo::new(clips::FALL)
        };
        StateUpdateResult::handled(clip, 10)
    }
}

/// Idle or running on the ground
#[derive(Debug, Default)]
pub struct GroundedStateController;

impl PlayerStateController for GroundedStateController {
    fn name(&self) -> &str {
        "grounded"
    }

    fn update_player_state(&mut self, character: &Character, axis: AxisState) -> StateUpdateResult {
        if !character.grounded {
            return StateUpdateResult::UNHANDLED;
        }

        if axis.horizontal() == 0.0 {
            return StateUpdateResult::handled(AnimationClipInfo::new(clips::IDLE), 0);
        }

        // Run cycle follows the actual speed
        let speed = (character.velocity.x.abs() / character.stats.run_speed).clamp(0.5, 1.5);
        StateUpdateResult::handled(AnimationClipInfo::new(clips::RUN).with_speed(speed), 0)
    }
}

/// Melee weapon: attack clip while an attack is in progress
#[derive(Debug, Default)]
pub struct MeleeWeaponController;

impl PlayerStateController for MeleeWeaponController {
    fn name(&self) -> &str {
        "melee"
    }

    fn update_player_state(&mut self, character: &Character, _axis: AxisState) -> StateUpdateResult {
        if !character.attacking {
            return StateUpdateResult::UNHANDLED;
        }

        // Switching between ground and air attack must not restart the swing
        let clip = if character.grounded {
            AnimationClipInfo::new(clips::ATTACK).with_linked(&[clips::ATTACK_AIR])
        } else {
            AnimationClipInfo::new(clips::ATTACK_AIR).with_linked(&[clips::ATTACK])
        };
        StateUpdateResult::handled(clip, 50)
    }
}

/// Runs the state and weapon controllers and applies the result to the
/// character's animation
pub struct PlayerStateDispatcher {
    state_controllers: Vec<Box<dyn PlayerStateController>>,
    weapon_controllers: Vec<Box<dyn PlayerStateController>>,
}

impl PlayerStateDispatcher {
    pub fn new(
        state_controllers: Vec<Box<dyn PlayerStateController>>,
        weapon_controllers: Vec<Box<dyn PlayerStateController>>,
    ) -> Self {
        Self {
            state_controllers,
            weapon_controllers,
        }
    }

    /// Dispatcher with the built-in controllers, most specific first
    pub fn with_standard_controllers() -> Self {
        Self::new(
            vec![
                Box::new(FrozenStateController),
                Box::new(WallStateController),
                Box::new(AirborneStateController),
                Box::new(GroundedStateController),
            ],
            vec![Box::new(MeleeWeaponController)],
        )
    }

    /// Pick this frame's clip, adjust facing and play the clip.
    ///
    /// Returns the winning result.
    pub fn update_player_state(&mut self, character: &mut Character) -> StateUpdateResult {
        let axis = character.input.axis;

        let result = StateUpdateResult::max(
            Self::first_handled(&mut self.state_controllers, character, axis),
            Self::first_handled(&mut self.weapon_controllers, character, axis),
        );

        Self::adjust_facing(&mut character.animation, axis);

        if let Some(clip) = &result.clip {
            Self::play_animation(&mut character.animation, clip);
        }

        result
    }

    fn first_handled(
        controllers: &mut [Box<dyn PlayerStateController>],
        character: &Character,
        axis: AxisState,
    ) -> StateUpdateResult {
        for controller in controllers.iter_mut() {
            let result = controller.update_player_state(character, axis);
            if result.handled {
                log::trace!("{}: state handled by {}", character.name, controller.name());
                return result;
            }
        }

        StateUpdateResult::UNHANDLED
    }

    /// Flip the sprite when input points the other way
    fn adjust_facing(animation: &mut AnimationPlayer, axis: AxisState) {
        let flipped = animation.is_flipped_horizontal();
        if (axis.x > 0.0 && flipped) || (axis.x < 0.0 && !flipped) {
            animation.set_flip_horizontal(!flipped);
        }
    }

    /// Play `clip` unless it (or a linked clip) is already showing
    fn play_animation(animation: &mut AnimationPlayer, clip: &AnimationClipInfo) {
        animation.set_speed(clip.speed);

        if clip.matches(animation.current_clip()) {
            return;
        }

        animation.play(&clip.name);
    }
}

impl Default for PlayerStateDispatcher {
    fn default() -> Self {
        Self::with_standard_controllers()
    }
}
