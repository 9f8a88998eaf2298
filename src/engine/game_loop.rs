/// Frame scheduling for character controllers
///
/// Fixed timestep accumulator: the host reports how much time a frame took and
/// gets back how many fixed updates to run. Character controllers are
/// updated once per fixed update, never in the middle of another one.
use std::time::Duration;

/// Target update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of fixed updates per frame to prevent spiral of death
pub const MAX_UPDATE_STEPS: u32 = 5;

/// Fixed update scheduling state
#[derive(Debug, Default)]
pub struct GameLoop {
    /// Simulation time not yet consumed by a fixed update
    accumulator: Duration,

    /// Frames reported so far
    frame_count: u64,

    /// Fixed updates handed out so far
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for a frame that lasted `frame_time`, returns the number of fixed updates to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_UPDATE_STEPS {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }

        // Drop the backlog we refused to simulate
        if updates == MAX_UPDATE_STEPS && self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Frame took {:?}, dropping {:?} of simulation time",
                frame_time,
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Length of one fixed update in seconds
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
