//! Late Dash data structures and tuning constants.

use rand::Rng;

use crate::games::{Phase, WORLD_WIDTH};

/// Runner fixed horizontal position (center).
pub const RUNNER_X: f64 = 150.0;
/// Runner half-width.
pub const RUNNER_HALF_WIDTH: f64 = 15.0;
/// Feet offset below the runner's center.
pub const RUNNER_FOOT: f64 = 60.0;
/// Head offset above the runner's center.
pub const RUNNER_HEAD: f64 = 55.0;
/// Torso bottom offset below the center; the legs swing below it.
pub const RUNNER_TORSO: f64 = 25.0;
/// Vertical start position.
pub const RUNNER_START_Y: f64 = 300.0;
/// Velocity change per tick (downward).
pub const GRAVITY: f64 = 0.4;
/// Velocity set by a jump. Absolute, not additive.
pub const JUMP_STRENGTH: f64 = 7.0;
/// Horizontal scroll speed per tick.
pub const SCROLL_SPEED: f64 = 5.0;
/// Hazard width, shared by every kind.
pub const HAZARD_WIDTH: f64 = 60.0;
/// Number of hazards in the rolling pool. Fixed for the whole session.
pub const HAZARD_COUNT: usize = 15;
/// Horizontal stride between hazards in the initial layout.
pub const HAZARD_STRIDE: f64 = 300.0;
/// Max random jitter past the right edge when a hazard is recycled.
pub const RESPAWN_JITTER: f64 = 100.0;
/// Velocity after bouncing off the ceiling.
pub const CEILING_BOUNCE: f64 = -2.0;
/// Running animation advance per tick.
pub const RUN_RATE: f64 = 0.2;

/// Points per hazard cleared.
pub const POINTS_PER_HAZARD: u32 = 100;
/// Score needed to reach class.
pub const TARGET_SCORE: u32 = 1500;
/// Seconds on the clock at the start of a run.
pub const START_TIME_SECS: u32 = 90;
/// Simulated milliseconds per timer decrement.
pub const TIMER_STEP_MS: u64 = 1000;

/// The closed set of things blocking the way to class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    Teacher,
    Puddle,
    StudentGroup,
    StrayDog,
}

impl HazardKind {
    pub const ALL: [HazardKind; 4] = [
        HazardKind::Teacher,
        HazardKind::Puddle,
        HazardKind::StudentGroup,
        HazardKind::StrayDog,
    ];

    /// Hitbox bottom edge, as an offset above the hazard's base height.
    pub fn box_offset(&self) -> f64 {
        match self {
            HazardKind::Teacher => 30.0,
            HazardKind::Puddle => 10.0,
            HazardKind::StudentGroup => 30.0,
            HazardKind::StrayDog => 10.0,
        }
    }

    /// Hitbox vertical extent.
    pub fn box_height(&self) -> f64 {
        match self {
            HazardKind::Teacher => 100.0,
            HazardKind::Puddle => 20.0,
            HazardKind::StudentGroup => 70.0,
            HazardKind::StrayDog => 40.0,
        }
    }

    /// Puddles lie flat on the street; everything else stands at a random
    /// base height.
    pub fn is_grounded(&self) -> bool {
        matches!(self, HazardKind::Puddle)
    }

    pub fn pick<R: Rng>(rng: &mut R) -> HazardKind {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A single hazard in the rolling pool.
#[derive(Debug, Clone)]
pub struct Hazard {
    pub x: f64,
    /// Base height of the hitbox above the street. Always 0 for puddles.
    pub height: f64,
    /// Whether this hazard has already been scored.
    pub passed: bool,
    pub kind: HazardKind,
}

impl Hazard {
    /// Roll a fresh kind and height at the given x.
    pub(crate) fn randomize_at<R: Rng>(&mut self, rng: &mut R, x: f64) {
        let kind = HazardKind::pick(rng);
        self.x = x;
        self.kind = kind;
        self.height = if kind.is_grounded() {
            0.0
        } else {
            rng.gen_range(50.0..250.0)
        };
        self.passed = false;
    }
}

/// Late Dash session state.
#[derive(Debug, Clone)]
pub struct DashGame {
    pub phase: Phase,

    // -- Runner state --
    pub runner_y: f64,
    /// Vertical velocity, positive = upward.
    pub velocity: f64,
    /// Render-only leg swing phase.
    pub run_phase: f64,

    // -- World state --
    /// The rolling hazard pool, recycled in place. Always `HAZARD_COUNT` long.
    pub hazards: Vec<Hazard>,
    /// Cosmetic parallax offset for the street.
    pub scroll: f64,

    // -- Scoring and clock --
    pub score: u32,
    /// Whole seconds left before the bell.
    pub time_left: u32,
    /// Simulated milliseconds accumulated toward the next timer decrement.
    pub timer_acc_ms: u64,

    // -- Timing --
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed.
    pub tick_count: u64,
}

impl DashGame {
    /// Create a new session waiting for the first jump.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let hazards = (0..HAZARD_COUNT)
            .map(|i| {
                let mut hazard = Hazard {
                    x: 0.0,
                    height: 0.0,
                    passed: false,
                    kind: HazardKind::Teacher,
                };
                hazard.randomize_at(rng, WORLD_WIDTH + i as f64 * HAZARD_STRIDE);
                hazard
            })
            .collect();

        Self {
            phase: Phase::NotStarted,
            runner_y: RUNNER_START_Y,
            velocity: 0.0,
            run_phase: 0.0,
            hazards,
            scroll: 0.0,
            score: 0,
            time_left: START_TIME_SECS,
            timer_acc_ms: 0,
            accumulated_time_ms: 0,
            tick_count: 0,
        }
    }

    /// Reinitialize for a fresh run.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        *self = Self::new(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_layout() {
        let mut rng = rand::thread_rng();
        let game = DashGame::new(&mut rng);

        assert_eq!(game.phase, Phase::NotStarted);
        assert_eq!(game.score, 0);
        assert_eq!(game.time_left, START_TIME_SECS);
        assert!((game.runner_y - RUNNER_START_Y).abs() < f64::EPSILON);
        assert!((game.velocity - 0.0).abs() < f64::EPSILON);

        assert_eq!(game.hazards.len(), HAZARD_COUNT);
        for (i, hazard) in game.hazards.iter().enumerate() {
            let expected_x = WORLD_WIDTH + i as f64 * HAZARD_STRIDE;
            assert!((hazard.x - expected_x).abs() < f64::EPSILON);
            assert!(!hazard.passed);
            if hazard.kind.is_grounded() {
                assert!((hazard.height - 0.0).abs() < f64::EPSILON);
            } else {
                assert!(hazard.height >= 50.0 && hazard.height < 250.0);
            }
        }
    }

    #[test]
    fn test_hazard_kind_geometry() {
        assert!((HazardKind::Teacher.box_offset() - 30.0).abs() < f64::EPSILON);
        assert!((HazardKind::Teacher.box_height() - 100.0).abs() < f64::EPSILON);
        assert!((HazardKind::Puddle.box_offset() - 10.0).abs() < f64::EPSILON);
        assert!((HazardKind::Puddle.box_height() - 20.0).abs() < f64::EPSILON);
        assert!((HazardKind::StudentGroup.box_offset() - 30.0).abs() < f64::EPSILON);
        assert!((HazardKind::StudentGroup.box_height() - 70.0).abs() < f64::EPSILON);
        assert!((HazardKind::StrayDog.box_offset() - 10.0).abs() < f64::EPSILON);
        assert!((HazardKind::StrayDog.box_height() - 40.0).abs() < f64::EPSILON);

        assert!(HazardKind::Puddle.is_grounded());
        assert!(!HazardKind::Teacher.is_grounded());
        assert!(!HazardKind::StudentGroup.is_grounded());
        assert!(!HazardKind::StrayDog.is_grounded());
    }

    #[test]
    fn test_randomize_at_respects_kind_rules() {
        let mut rng = rand::thread_rng();
        let mut hazard = Hazard {
            x: 0.0,
            height: 123.0,
            passed: true,
            kind: HazardKind::Teacher,
        };

        for _ in 0..50 {
            hazard.randomize_at(&mut rng, 812.0);
            assert!((hazard.x - 812.0).abs() < f64::EPSILON);
            assert!(!hazard.passed);
            if hazard.kind.is_grounded() {
                assert!((hazard.height - 0.0).abs() < f64::EPSILON);
            } else {
                assert!((50.0..250.0).contains(&hazard.height));
            }
        }
    }

    #[test]
    fn test_reset_rebuilds_everything() {
        let mut rng = rand::thread_rng();
        let mut game = DashGame::new(&mut rng);
        game.phase = Phase::Running;
        game.score = 700;
        game.time_left = 12;
        game.runner_y = 60.0;

        game.reset(&mut rng);

        assert_eq!(game.phase, Phase::NotStarted);
        assert_eq!(game.score, 0);
        assert_eq!(game.time_left, START_TIME_SECS);
        assert!((game.runner_y - RUNNER_START_Y).abs() < f64::EPSILON);
        assert_eq!(game.hazards.len(), HAZARD_COUNT);
    }
}
