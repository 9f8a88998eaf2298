// Character system
//
// This module contains everything related to playable characters:
// - Character context the control handlers act on
// - Character tuning values
// - Control handlers (locomotion, attack, wall jump, freeze)
// - Player state dispatch choosing the animation
// - Animation state

pub mod animation;
pub mod character;
pub mod handlers;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClipInfo, AnimationPlayer};
pub use character::{AxisState, Character, CharacterId, FrameInput, WallSide};
pub use state::{PlayerStateController, PlayerStateDispatcher, StateUpdateResult};
pub use stats::{CharacterStats, BASE_STATS};
