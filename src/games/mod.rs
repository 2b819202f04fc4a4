//! Arcade game sessions: Sky Run and Late Dash.
//!
//! All simulation happens on a fixed 800x600 logical canvas with y pointing
//! up; scenes scale it to the terminal cell grid at render time. Physics
//! advances in fixed 16ms steps driven by a wall-clock accumulator.

pub mod dash;
pub mod flappy;

use rand::Rng;

use crate::input::GameInput;
pub use dash::{DashGame, Hazard, HazardKind};
pub use flappy::{FlappyGame, Pipe};

/// Logical canvas width in world units.
pub const WORLD_WIDTH: f64 = 800.0;
/// Logical canvas height in world units.
pub const WORLD_HEIGHT: f64 = 600.0;

/// Physics tick interval in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;

/// Maximum wall-clock delta fed to the accumulator in one frame, to prevent
/// a physics explosion after a pause or lag spike.
pub const MAX_FRAME_DELTA_MS: u64 = 100;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Session lifecycle. The first jump input moves NotStarted to Running;
/// once Over, state is frozen until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Over(Outcome),
}

impl Phase {
    pub fn is_running(self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_over(self) -> bool {
        matches!(self, Phase::Over(_))
    }
}

/// The games on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    SkyRun,
    LateDash,
}

impl GameKind {
    pub const ALL: [GameKind; 2] = [GameKind::SkyRun, GameKind::LateDash];

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::SkyRun => "Sky Run",
            GameKind::LateDash => "Late Dash",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            GameKind::SkyRun => "Thread the pipes. The sky keeps the score.",
            GameKind::LateDash => "90 seconds to reach class. Mind the puddles.",
        }
    }

    /// Start a fresh session of this game.
    pub fn start<R: Rng>(&self, rng: &mut R) -> ActiveGame {
        match self {
            GameKind::SkyRun => ActiveGame::Flappy(FlappyGame::new(rng)),
            GameKind::LateDash => ActiveGame::Dash(DashGame::new(rng)),
        }
    }
}

/// The game currently on screen. Only one runs at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Flappy(FlappyGame),
    Dash(DashGame),
}

impl ActiveGame {
    pub fn phase(&self) -> Phase {
        match self {
            ActiveGame::Flappy(game) => game.phase,
            ActiveGame::Dash(game) => game.phase,
        }
    }

    pub fn process_input<R: Rng>(&mut self, input: GameInput, rng: &mut R) {
        match self {
            ActiveGame::Flappy(game) => flappy::process_input(game, input, rng),
            ActiveGame::Dash(game) => dash::process_input(game, input, rng),
        }
    }

    /// Advance the simulation by `dt_ms` of wall-clock time.
    /// Returns true if any physics step ran.
    pub fn advance<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        match self {
            ActiveGame::Flappy(game) => flappy::advance(game, dt_ms, rng),
            ActiveGame::Dash(game) => dash::advance(game, dt_ms, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(!Phase::NotStarted.is_running());
        assert!(!Phase::NotStarted.is_over());
        assert!(Phase::Running.is_running());
        assert!(!Phase::Running.is_over());
        assert!(Phase::Over(Outcome::Success).is_over());
        assert!(Phase::Over(Outcome::Failure).is_over());
        assert!(!Phase::Over(Outcome::Failure).is_running());
    }

    #[test]
    fn test_game_kind_start() {
        let mut rng = rand::thread_rng();
        assert!(matches!(
            GameKind::SkyRun.start(&mut rng),
            ActiveGame::Flappy(_)
        ));
        assert!(matches!(
            GameKind::LateDash.start(&mut rng),
            ActiveGame::Dash(_)
        ));
    }

    #[test]
    fn test_active_game_starts_waiting() {
        let mut rng = rand::thread_rng();
        for kind in GameKind::ALL {
            let game = kind.start(&mut rng);
            assert_eq!(game.phase(), Phase::NotStarted);
        }
    }

    #[test]
    fn test_advance_is_noop_before_start() {
        let mut rng = rand::thread_rng();
        let mut game = GameKind::SkyRun.start(&mut rng);
        assert!(!game.advance(1000, &mut rng));
        assert_eq!(game.phase(), Phase::NotStarted);
    }
}
