// Control handlers for player characters
//
// - `locomotion`: default handler, always at the bottom of the stack
// - `attack`: timed melee attack, cancelled when covered
// - `wall_jump`: kick off a wall while airborne
// - `freeze`: hit stun, ignores input

pub mod attack;
pub mod freeze;
pub mod locomotion;
pub mod wall_jump;

pub use attack::AttackHandler;
pub use freeze::FreezeHandler;
pub use locomotion::LocomotionHandler;
pub use wall_jump::WallJumpHandler;
