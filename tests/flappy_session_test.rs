//! Integration tests for Sky Run sessions.
//!
//! Drives the library logic directly with a seeded RNG, exercising the pool
//! invariants, the deterministic physics scenarios, and the session state
//! machine end to end.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skydash::games::flappy::palette::{night_phase, SkyPalette, SCORE_CYCLE};
use skydash::games::flappy::types::{
    BIRD_START_Y, PIPE_COUNT, PIPE_STRIDE, PIPE_WIDTH, POINTS_PER_PIPE, SCROLL_SPEED,
};
use skydash::games::flappy::{advance, process_input, step, FlappyGame};
use skydash::games::{Outcome, Phase, WORLD_WIDTH};
use skydash::input::GameInput;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5107)
}

fn started_game(rng: &mut ChaCha8Rng) -> FlappyGame {
    let mut game = FlappyGame::new(rng);
    game.phase = Phase::Running;
    game
}

/// Pin the bird mid-canvas so long scroll scenarios outlive gravity.
fn pin_bird(game: &mut FlappyGame) {
    game.bird_y = BIRD_START_Y;
    game.velocity = 0.0;
}

/// Pin every pipe's gap around the pinned bird so nothing is fatal.
fn pin_gaps(game: &mut FlappyGame) {
    for pipe in &mut game.pipes {
        pipe.height = 200.0;
    }
}

#[test]
fn initial_layout_matches_the_fixed_stride() {
    let mut rng = rng();
    let game = FlappyGame::new(&mut rng);

    assert_eq!(game.phase, Phase::NotStarted);
    assert_eq!(game.pipes.len(), PIPE_COUNT);
    for (i, pipe) in game.pipes.iter().enumerate() {
        assert!((pipe.x - (WORLD_WIDTH + i as f64 * PIPE_STRIDE)).abs() < f64::EPSILON);
        assert!((100.0..300.0).contains(&pipe.height));
        assert!(!pipe.passed);
    }
}

#[test]
fn bird_at_rest_dies_on_exactly_tick_35() {
    // From y = 300 under gravity 0.5 the bird reaches y = 2.5 on tick 34 and
    // falls through the floor on tick 35.
    let mut rng = rng();
    let mut game = started_game(&mut rng);

    for tick in 1..=34u64 {
        step(&mut game, &mut rng);
        assert_eq!(game.phase, Phase::Running, "still alive on tick {}", tick);
    }
    assert!((game.bird_y - 2.5).abs() < 1e-9);

    step(&mut game, &mut rng);
    assert_eq!(game.phase, Phase::Over(Outcome::Failure));
    assert_eq!(game.tick_count, 35);
}

#[test]
fn pool_cardinality_and_strict_x_decrease() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    pin_gaps(&mut game);

    for _ in 0..400 {
        pin_bird(&mut game);
        let xs_before: Vec<f64> = game.pipes.iter().map(|p| p.x).collect();

        step(&mut game, &mut rng);
        pin_gaps(&mut game);

        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.pipes.len(), PIPE_COUNT, "pool size never changes");
        for (pipe, x_before) in game.pipes.iter().zip(xs_before) {
            if (pipe.x - (x_before - SCROLL_SPEED)).abs() < f64::EPSILON {
                // Normal scroll step.
                continue;
            }
            // Otherwise the pipe was recycled: only legal once its trailing
            // edge was strictly past the left edge, and it must reappear
            // ahead of the field with a cleared flag.
            assert!(x_before - SCROLL_SPEED + PIPE_WIDTH < 0.0);
            assert!(pipe.x > WORLD_WIDTH - PIPE_WIDTH);
            assert!(!pipe.passed);
        }
    }
}

#[test]
fn first_pipe_recycles_on_exactly_tick_171() {
    // From x = 800 at 5 per tick the trailing edge reaches x = 0 on tick
    // 170 (pipe at exactly -50), which does not yet recycle; tick 171 does.
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    pin_gaps(&mut game);

    for _ in 0..170 {
        pin_bird(&mut game);
        step(&mut game, &mut rng);
        pin_gaps(&mut game);
    }
    assert!((game.pipes[0].x - (-50.0)).abs() < 1e-9);

    pin_bird(&mut game);
    step(&mut game, &mut rng);
    assert!(game.pipes[0].x > 0.0, "recycled ahead of the field");
}

#[test]
fn score_accumulates_ten_points_per_pipe() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    pin_gaps(&mut game);

    // Pipe 0 starts at 800; its trailing edge crosses the bird's x = 200
    // when 800 - 5n + 50 < 200, first true on tick 131.
    for _ in 0..130 {
        pin_bird(&mut game);
        step(&mut game, &mut rng);
        pin_gaps(&mut game);
        assert_eq!(game.score, 0);
    }

    pin_bird(&mut game);
    step(&mut game, &mut rng);
    assert_eq!(game.score, POINTS_PER_PIPE);
    assert_eq!(game.high_score, POINTS_PER_PIPE);

    // Much later the score is still a multiple of ten and the high score
    // tracks it.
    pin_gaps(&mut game);
    for _ in 0..500 {
        pin_bird(&mut game);
        step(&mut game, &mut rng);
        pin_gaps(&mut game);
    }
    assert!(game.score > POINTS_PER_PIPE);
    assert_eq!(game.score % POINTS_PER_PIPE, 0);
    assert_eq!(game.high_score, game.score);
}

#[test]
fn restart_is_idempotent_and_keeps_the_high_score() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.score = 80;
    game.high_score = 80;
    game.bird_y = 37.0;
    game.phase = Phase::Over(Outcome::Failure);

    process_input(&mut game, GameInput::Restart, &mut rng);

    assert_eq!(game.phase, Phase::NotStarted);
    assert_eq!(game.score, 0);
    assert_eq!(game.high_score, 80);
    assert!((game.bird_y - BIRD_START_Y).abs() < f64::EPSILON);
    assert!((game.velocity - 0.0).abs() < f64::EPSILON);
    assert_eq!(game.pipes.len(), PIPE_COUNT);
    for (i, pipe) in game.pipes.iter().enumerate() {
        assert!((pipe.x - (WORLD_WIDTH + i as f64 * PIPE_STRIDE)).abs() < f64::EPSILON);
        assert!(!pipe.passed);
    }

    // Restarting twice in a row changes nothing structural.
    game.phase = Phase::Over(Outcome::Failure);
    process_input(&mut game, GameInput::Restart, &mut rng);
    assert_eq!(game.phase, Phase::NotStarted);
    assert_eq!(game.high_score, 80);
}

#[test]
fn over_state_is_frozen_until_restart() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.score = 40;
    game.phase = Phase::Over(Outcome::Failure);
    let snapshot = game.clone();

    step(&mut game, &mut rng);
    assert!(!advance(&mut game, 1000, &mut rng));
    process_input(&mut game, GameInput::Jump, &mut rng);

    assert_eq!(game.phase, snapshot.phase);
    assert_eq!(game.score, snapshot.score);
    assert_eq!(game.tick_count, snapshot.tick_count);
    assert!((game.bird_y - snapshot.bird_y).abs() < f64::EPSILON);
    assert!((game.velocity - snapshot.velocity).abs() < f64::EPSILON);
    for (a, b) in game.pipes.iter().zip(&snapshot.pipes) {
        assert!((a.x - b.x).abs() < f64::EPSILON);
        assert!((a.height - b.height).abs() < f64::EPSILON);
    }
}

#[test]
fn flapping_through_the_first_gap() {
    // A bird that flaps whenever it sinks below the middle of every gap
    // survives well past the first pipe (heights pinned to keep the gaps
    // aligned with the flight corridor).
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    pin_gaps(&mut game);

    for _ in 0..200 {
        if game.bird_y < 270.0 {
            process_input(&mut game, GameInput::Jump, &mut rng);
        }
        step(&mut game, &mut rng);
        pin_gaps(&mut game);
        assert_eq!(game.phase, Phase::Running);
    }

    // Pipe 0 scored on tick 131.
    assert!(game.score >= POINTS_PER_PIPE);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let mut rng_a = rng();
    let mut rng_b = rng();
    let mut game_a = started_game(&mut rng_a);
    let mut game_b = started_game(&mut rng_b);

    for _ in 0..300 {
        pin_bird(&mut game_a);
        pin_bird(&mut game_b);
        step(&mut game_a, &mut rng_a);
        step(&mut game_b, &mut rng_b);
    }

    assert_eq!(game_a.score, game_b.score);
    for (a, b) in game_a.pipes.iter().zip(&game_b.pipes) {
        assert!((a.x - b.x).abs() < f64::EPSILON);
        assert!((a.height - b.height).abs() < f64::EPSILON);
    }
}

// -- Day/night palette properties --

#[test]
fn palette_repeats_every_cycle() {
    for score in [0, 10, 33, 50, 72, 99] {
        assert_eq!(
            SkyPalette::for_score(score),
            SkyPalette::for_score(score + SCORE_CYCLE)
        );
        assert_eq!(
            SkyPalette::for_score(score),
            SkyPalette::for_score(score + 3 * SCORE_CYCLE)
        );
    }
}

#[test]
fn palette_has_no_jump_at_the_wrap_or_the_twilight_joint() {
    // Scores step the phase in 1/SCORE_CYCLE increments; adjacent scores
    // must produce nearby colors everywhere, including across the wrap.
    let channel_delta = |a: SkyPalette, b: SkyPalette| {
        let d = |x: u8, y: u8| (x as i16 - y as i16).unsigned_abs();
        d(a.sky.r, b.sky.r).max(d(a.sky.g, b.sky.g)).max(d(a.sky.b, b.sky.b))
    };

    for score in 0..2 * SCORE_CYCLE {
        let here = SkyPalette::for_score(score);
        let next = SkyPalette::for_score(score + 1);
        assert!(
            channel_delta(here, next) <= 16,
            "sky jumped between scores {} and {}",
            score,
            score + 1
        );
    }

    assert!(night_phase(SCORE_CYCLE - 1) < 0.01);
    assert!(night_phase(0) < 1e-12);
}

#[test]
fn celestial_ramps_follow_the_phase() {
    let day = SkyPalette::for_score(0);
    assert!((day.sun_alpha - 1.0).abs() < 1e-12);
    assert!(!day.any_stars());

    let night = SkyPalette::for_score(SCORE_CYCLE / 2);
    assert!(night.sun_alpha < 1e-12);
    assert!((night.moon_alpha - 1.0).abs() < 1e-12);
    assert!(night.any_stars());
}
