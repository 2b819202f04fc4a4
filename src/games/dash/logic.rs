//! Late Dash game logic: physics, hazard recycling, collision, the clock.

use rand::Rng;

use super::types::*;
use crate::games::{Outcome, Phase, MAX_FRAME_DELTA_MS, PHYSICS_TICK_MS, WORLD_HEIGHT, WORLD_WIDTH};
use crate::input::GameInput;

/// Process player input.
pub fn process_input<R: Rng>(game: &mut DashGame, input: GameInput, rng: &mut R) {
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
pub fn advance<R: Rng>(game: &mut DashGame, dt_ms: u64, rng: &mut R) -> bool {
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
pub fn step<R: Rng>(game: &mut DashGame, rng: &mut R) {
    if !game.phase.is_running() {
        return;
    }
    game.tick_count += 1;

    // 1. Street parallax.
    game.scroll += SCROLL_SPEED;

    // 2. Scroll hazards, recycling the ones fully past the left edge to
    //    just beyond the right edge with a little jitter.
    for hazard in &mut game.hazards {
        hazard.x -= SCROLL_SPEED;
        if hazard.x + HAZARD_WIDTH < 0.0 {
            let x = WORLD_WIDTH + rng.gen_range(0.0..RESPAWN_JITTER);
            hazard.randomize_at(rng, x);
        }
    }

    // 3. Score hazards whose trailing edge has cleared the runner.
    for hazard in &mut game.hazards {
        if !hazard.passed && hazard.x + HAZARD_WIDTH < RUNNER_X {
            hazard.passed = true;
            game.score += POINTS_PER_HAZARD;
        }
    }

    // 4. Gravity, then position.
    game.velocity -= GRAVITY;
    game.runner_y += game.velocity;

    // 5. The clock runs on simulated time, one second per accumulated
    //    1000ms of steps.
    game.timer_acc_ms += PHYSICS_TICK_MS;
    if game.timer_acc_ms >= TIMER_STEP_MS {
        game.timer_acc_ms -= TIMER_STEP_MS;
        game.time_left = game.time_left.saturating_sub(1);
    }

    // 6. Boundaries, hazards, and both endings.
    check_collision(game);

    // 7. Leg swing.
    if game.phase.is_running() {
        game.run_phase += RUN_RATE;
    }
}

/// Boundary handling, hazard hit tests, and the win/lose checks, in the
/// order the run resolves them.
fn check_collision(game: &mut DashGame) {
    // Ground and ceiling are survivable: clamp the feet to the street,
    // bounce the head off the top of the canvas.
    if game.runner_y - RUNNER_FOOT <= 0.0 {
        game.runner_y = RUNNER_FOOT;
        game.velocity = 0.0;
    }
    if game.runner_y + RUNNER_HEAD >= WORLD_HEIGHT {
        game.runner_y = WORLD_HEIGHT - RUNNER_HEAD;
        game.velocity = CEILING_BOUNCE;
    }

    for hazard in &game.hazards {
        let overlaps_x = RUNNER_X + RUNNER_HALF_WIDTH > hazard.x
            && RUNNER_X - RUNNER_HALF_WIDTH < hazard.x + HAZARD_WIDTH;
        if !overlaps_x {
            continue;
        }

        let base = hazard.height + hazard.kind.box_offset();
        let top = base + hazard.kind.box_height();
        let feet = game.runner_y - RUNNER_FOOT;
        let torso_bottom = game.runner_y - RUNNER_TORSO;
        let head = game.runner_y + RUNNER_HEAD;

        // Two overlapping vertical tests, kept exactly as tuned: the first
        // catches the runner landing into a hazard, the second catches
        // clipping it head-on. Their asymmetry is part of the game feel.
        if (feet < top && torso_bottom > base) || (head > base && feet < top) {
            game.phase = Phase::Over(Outcome::Failure);
            return;
        }
    }

    if game.score >= TARGET_SCORE {
        game.phase = Phase::Over(Outcome::Success);
        return;
    }
    if game.time_left == 0 {
        game.phase = Phase::Over(Outcome::Failure);
    }
}
