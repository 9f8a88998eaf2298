// Rusted Controls
//
// Layered control handlers for 2D platformer characters. The `engine` side
// holds the generic handler stack and frame scheduling, the `game` side the
// platformer character and its handlers.

pub mod core;
pub mod engine;
pub mod game;
