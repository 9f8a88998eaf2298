// Character context shared by a character's control handlers

use glam::Vec2;

use super::animation::AnimationPlayer;
use super::stats::CharacterStats;
use crate::core::math;

/// Unique identifier for a character
pub type CharacterId = u32;

/// Horizontal input below this magnitude counts as no input
pub const AXIS_DEAD_ZONE: f32 = 0.1;

/// Directional input for one frame, each axis in -1..=1
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    pub x: f32,
    pub y: f32,
}

impl AxisState {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Horizontal direction: -1, 0 or 1
    pub fn horizontal(&self) -> f32 {
        math::sign(self.x, AXIS_DEAD_ZONE)
    }
}

/// Everything the player asked for this frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub axis: AxisState,
    /// Jump was pressed this frame
    pub jump_pressed: bool,
    /// Attack was pressed this frame
    pub attack_pressed: bool,
}

/// Side of the character a wall is touching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Direction pointing into the wall
    pub fn direction(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// A character as seen by its control handlers
#[derive(Debug)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display and logs)
    pub name: String,
    /// Tuning values
    pub stats: CharacterStats,

    // Motion
    pub position: Vec2,
    pub velocity: Vec2,
    /// Standing on the ground this frame
    pub grounded: bool,
    /// Touching a wall this frame
    pub wall_contact: Option<WallSide>,
    /// Direction character is facing (1 = right, -1 = left)
    pub facing: f32,

    // Flags raised by handlers
    /// A melee attack is in progress
    pub attacking: bool,
    /// The character is frozen and ignores input
    pub frozen: bool,

    // Frame state (set by the host before the controller update)
    pub input: FrameInput,
    /// Seconds covered by the current frame
    pub delta_time: f32,

    /// Animation state for the renderer
    pub animation: AnimationPlayer,
}

impl Character {
    /// Create a character standing at `spawn`
    pub fn new(id: CharacterId, name: &str, stats: CharacterStats, spawn: Vec2) -> Self {
        Self {
            id,
            name: name.to_string(),
            stats,
            position: spawn,
            velocity: Vec2::ZERO,
            grounded: spawn.y <= 0.0,
            wall_contact: None,
            facing: 1.0,
            attacking: false,
            frozen: false,
            input: FrameInput::default(),
            delta_time: 0.0,
            animation: AnimationPlayer::new(),
        }
    }

    /// Store this frame's input and duration
    pub fn begin_frame(&mut self, input: FrameInput, dt: f32) {
        self.input = input;
        self.delta_time = dt;
    }

    /// Move the character by its velocity.
    ///
    /// Minimal kinematics: gravity, fall speed cap, a ground plane at y = 0
    /// and two walls at `-half_width` / `half_width`.
    pub fn integrate(&mut self, half_width: f32) {
        let dt = self.delta_time;

        if !self.grounded || self.velocity.y > 0.0 {
            self.velocity.y -= self.stats.gravity * dt;
        }

        let max_fall = if self.wall_contact.is_some() && !self.grounded {
            self.stats.wall_slide_speed
        } else {
            self.stats.max_fall_speed
        };
        self.velocity.y = self.velocity.y.max(-max_fall);

        self.position += self.velocity * dt;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity.y = self.velocity.y.max(0.0);
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        self.wall_contact = if self.position.x <= -half_width {
            self.position.x = -half_width;
            self.velocity.x = self.velocity.x.max(0.0);
            Some(WallSide::Left)
        } else if self.position.x >= half_width {
            self.position.x = half_width;
            self.velocity.x = self.velocity.x.min(0.0);
            Some(WallSide::Right)
        } else {
            None
        };
    }

    /// Check if character is in the air
    pub fn is_airborne(&self) -> bool {
        !self.grounded
    }

    /// Face the direction of `horizontal` if it is not zero
    pub fn face(&mut self, horizontal: f32) {
        if horizontal > 0.0 {
            self.facing = 1.0;
        } else if horizontal < 0.0 {
            self.facing = -1.0;
        }
    }

    /// Clear per-frame input (called at end of frame)
    pub fn clear_input(&mut self) {
        self.input.jump_pressed = false;
        self.input.attack_pressed = false;
    }
}
