//! Sky Run data structures and tuning constants.

use rand::Rng;

use crate::games::{Phase, WORLD_WIDTH};

/// Bird fixed horizontal position (center).
pub const BIRD_X: f64 = 200.0;
/// Bird half-extent; the hitbox is a 30x30 box around the center.
pub const BIRD_HALF: f64 = 15.0;
/// Vertical start position.
pub const BIRD_START_Y: f64 = 300.0;
/// Velocity change per tick (downward).
pub const GRAVITY: f64 = 0.5;
/// Velocity set by a flap. Absolute, not additive.
pub const JUMP_STRENGTH: f64 = 8.0;
/// Horizontal scroll speed per tick.
pub const SCROLL_SPEED: f64 = 5.0;
/// Pipe body width.
pub const PIPE_WIDTH: f64 = 50.0;
/// Vertical clearance between the pipe halves.
pub const PIPE_GAP: f64 = 150.0;
/// Number of pipes in the rolling pool. Fixed for the whole session.
pub const PIPE_COUNT: usize = 5;
/// Horizontal stride between freshly laid pipes.
pub const PIPE_STRIDE: f64 = 200.0;
/// Points per pipe cleared.
pub const POINTS_PER_PIPE: u32 = 10;
/// Wing animation advance per tick.
pub const WING_RATE: f64 = 0.2;

/// A pipe pair: the bottom half reaches up to `height`, the top half starts
/// at `height + PIPE_GAP`.
#[derive(Debug, Clone)]
pub struct Pipe {
    pub x: f64,
    /// Top edge of the bottom half (bottom of the gap).
    pub height: f64,
    /// Whether this pipe has already been scored.
    pub passed: bool,
}

/// Sky Run session state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub phase: Phase,

    // -- Bird state --
    pub bird_y: f64,
    /// Vertical velocity, positive = upward.
    pub velocity: f64,
    /// Render-only flap animation phase.
    pub wing_phase: f64,

    // -- World state --
    /// The rolling pipe pool, recycled in place. Always `PIPE_COUNT` long.
    pub pipes: Vec<Pipe>,

    // -- Scoring --
    pub score: u32,
    /// Best score across restarts within this process.
    pub high_score: u32,

    // -- Timing --
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create a new session waiting for the first flap.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let pipes = (0..PIPE_COUNT)
            .map(|i| Pipe {
                x: WORLD_WIDTH + i as f64 * PIPE_STRIDE,
                height: Self::random_gap_height(rng),
                passed: false,
            })
            .collect();

        Self {
            phase: Phase::NotStarted,
            bird_y: BIRD_START_Y,
            velocity: 0.0,
            wing_phase: 0.0,
            pipes,
            score: 0,
            high_score: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Reinitialize for a fresh run. The session high score survives.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let high_score = self.high_score;
        *self = Self::new(rng);
        self.high_score = high_score;
    }

    /// Random bottom-of-gap height for a new or recycled pipe.
    pub fn random_gap_height<R: Rng>(rng: &mut R) -> f64 {
        rng.gen_range(100.0..300.0)
    }
}
