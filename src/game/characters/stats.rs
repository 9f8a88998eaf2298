// Character tuning - ALL PLAYERS SHARE THE SAME STATS
// Differentiation comes from the handlers pushed on a character, not base stats

/// Fixed character tuning values read by the control handlers
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Locomotion
    /// Maximum horizontal run speed (units/second)
    pub run_speed: f32,
    /// Horizontal acceleration on the ground (units/second^2)
    pub ground_acceleration: f32,
    /// Horizontal acceleration in the air (units/second^2)
    pub air_acceleration: f32,
    /// Upward velocity applied on jump
    pub jump_velocity: f32,

    // Gravity
    /// Downward acceleration (units/second^2)
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Fall speed cap while sliding down a wall
    pub wall_slide_speed: f32,

    // Wall jump
    /// Horizontal push away from the wall
    pub wall_jump_push: f32,
    /// Upward velocity of a wall jump
    pub wall_jump_velocity: f32,
    /// Frames during which the wall jump ignores horizontal input
    pub wall_jump_frames: u32,

    // Combat
    /// Frames a melee attack lasts
    pub attack_frames: u32,
    /// Frames a character stays frozen when hit
    pub freeze_frames: u32,
}

/// The ONE set of stats used by all players
pub const BASE_STATS: CharacterStats = CharacterStats {
    // Locomotion - responsive but not too fast
    run_speed: 8.0,
    ground_acceleration: 80.0,
    air_acceleration: 40.0,
    jump_velocity: 14.0,

    // Gravity
    gravity: 40.0,
    max_fall_speed: 20.0,
    wall_slide_speed: 4.0,

    // Wall jump
    wall_jump_push: 9.0,
    wall_jump_velocity: 13.0,
    wall_jump_frames: 10,

    // Combat - 60 updates per second
    attack_frames: 18,
    freeze_frames: 30,
};

impl Default for CharacterStats {
    fn default() -> Self {
        BASE_STATS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_base_stats() {
        assert_eq!(CharacterStats::default(), BASE_STATS);
    }

    #[test]
    fn test_stats_are_sane() {
        let stats = CharacterStats::default();
        assert!(stats.run_speed > 0.0);
        assert!(stats.wall_slide_speed < stats.max_fall_speed);
        assert!(stats.ground_acceleration >= stats.air_acceleration);
        assert!(stats.attack_frames > 0);
        assert!(stats.freeze_frames > 0);
    }
}
