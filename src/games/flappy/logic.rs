//! Sky Run game logic: physics, pipe recycling, collision, scoring.

use rand::Rng;

use super::types::*;
use crate::games::{Outcome, Phase, MAX_FRAME_DELTA_MS, PHYSICS_TICK_MS, WORLD_HEIGHT};
use crate::input::GameInput;

/// Process player input.
pub fn process_input<R: Rng>(game: &mut FlappyGame, input: GameInput, rng: &mut R) {
    match input {
        GameInput::Jump => {
            if game.phase.is_over() {
                return;
            }
            if game.phase == Phase::NotStarted {
                game.phase = Phase::Running;
            }
            game.velocity = JUMP_STRENGTH;
        }
        GameInput::Restart => {
            if game.phase.is_over() {
                game.reset(rng);
            }
        }
        GameInput::Quit | GameInput::Other => {}
    }
}

/// Advance the simulation by `dt_ms` of wall-clock time.
///
/// Internally steps physics in fixed 16ms increments (~60 FPS).
/// Returns true if any step ran.
pub fn advance<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> bool {
    if !game.phase.is_running() {
        return false;
    }

    game.accumulated_time_ms += dt_ms.min(MAX_FRAME_DELTA_MS);
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step(game, rng);
        changed = true;

        if game.phase.is_over() {
            break;
        }
    }

    changed
}

/// Single physics step (16ms tick).
pub fn step<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    if !game.phase.is_running() {
        return;
    }
    game.tick_count += 1;

    // 1. Recycled pipes land one stride beyond the rightmost pipe as it
    //    stood before this tick's shift.
    let rightmost = game.pipes.iter().map(|p| p.x).fold(f64::MIN, f64::max);

    // 2. Scroll, recycling pipes whose trailing edge has left the canvas.
    for pipe in &mut game.pipes {
        pipe.x -= SCROLL_SPEED;
        if pipe.x + PIPE_WIDTH < 0.0 {
            pipe.x = rightmost + PIPE_STRIDE;
            pipe.height = FlappyGame::random_gap_height(rng);
            pipe.passed = false;
        }
    }

    // 3. Score pipes whose trailing edge has cleared the bird.
    for pipe in &mut game.pipes {
        if !pipe.passed && pipe.x + PIPE_WIDTH < BIRD_X {
            pipe.passed = true;
            game.score += POINTS_PER_PIPE;
            if game.score > game.high_score {
                game.high_score = game.score;
            }
        }
    }

    // 4. Gravity, then position.
    game.velocity -= GRAVITY;
    game.bird_y += game.velocity;

    // 5. Collision ends the run.
    if check_collision(game) {
        game.phase = Phase::Over(Outcome::Failure);
        return;
    }

    // 6. Flap animation.
    game.wing_phase += WING_RATE;
}

/// Discrete per-tick AABB test: the canvas edges and every pipe overlapping
/// the bird horizontally. No swept collision; tunneling at absurd speeds is
/// not handled.
fn check_collision(game: &FlappyGame) -> bool {
    if game.bird_y <= 0.0 || game.bird_y >= WORLD_HEIGHT {
        return true;
    }

    for pipe in &game.pipes {
        let overlaps_x = BIRD_X + BIRD_HALF > pipe.x && BIRD_X - BIRD_HALF < pipe.x + PIPE_WIDTH;
        if overlaps_x
            && (game.bird_y - BIRD_HALF < pipe.height
                || game.bird_y + BIRD_HALF > pipe.height + PIPE_GAP)
        {
            return true;
        }
    }

    false
}
