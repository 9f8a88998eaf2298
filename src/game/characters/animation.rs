// Character animation state
//
// Tracks which clip a character should be showing. Frame playback and
// rendering live outside this crate.

/// Standard character clip names
pub mod clips {
    pub const IDLE: &str = "idle";
    pub const RUN: &str = "run";
    pub const JUMP: &str = "jump";
    pub const FALL: &str = "fall";
    pub const WALL_SLIDE: &str = "wall_slide";
    pub const WALL_JUMP: &str = "wall_jump";
    pub const ATTACK: &str = "attack";
    pub const ATTACK_AIR: &str = "attack_air";
    pub const FROZEN: &str = "frozen";
}

/// A clip request produced by the player state controllers
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClipInfo {
    /// Name of the clip (e.g., "idle", "run", "jump")
    pub name: String,
    /// Playback speed multiplier (1.0 = normal)
    pub speed: f32,
    /// Clips that count as "already playing" this one, so the request does
    /// not restart them (e.g. "attack_air" while "attack" is requested)
    pub linked: Vec<String>,
}

impl AnimationClipInfo {
    /// Create a clip request at normal speed
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            speed: 1.0,
            linked: Vec::new(),
        }
    }

    /// Set the playback speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    /// Add clips that should not be interrupted by this request
    pub fn with_linked(mut self, linked: &[&str]) -> Self {
        self.linked.extend(linked.iter().map(|name| name.to_string()));
        self
    }

    /// Check if `clip` is this clip or one of its linked clips
    pub fn matches(&self, clip: &str) -> bool {
        self.name == clip || self.linked.iter().any(|linked| linked == clip)
    }
}

/// Animation state of a single character
#[derive(Debug)]
pub struct AnimationPlayer {
    /// Currently playing clip name
    current_clip: String,
    /// Time spent in the current clip, scaled by speed
    elapsed: f32,
    /// Playback speed multiplier (1.0 = normal)
    speed: f32,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,
    /// Number of times a clip was (re)started
    play_count: u32,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    /// Create a player showing the idle clip
    pub fn new() -> Self {
        Self {
            current_clip: clips::IDLE.to_string(),
            elapsed: 0.0,
            speed: 1.0,
            flip_horizontal: false,
            play_count: 0,
        }
    }

    /// Start a clip from the beginning
    pub fn play(&mut self, name: &str) {
        self.current_clip = name.to_string();
        self.elapsed = 0.0;
        self.play_count += 1;
    }

    /// Set playback speed (1.0 = normal, 2.0 = double speed)
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    /// Advance clip time (called every frame)
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt * self.speed;
    }

    /// Get the current clip name
    pub fn current_clip(&self) -> &str {
        &self.current_clip
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Time spent in the current clip
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Set horizontal flip state
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }
}
