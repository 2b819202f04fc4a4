//! UI rendering for Sky Run.
//!
//! The 800x600 logical canvas is scaled onto the terminal cell grid, one
//! span per cell. All colors come from the score-driven day/night palette.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::games::flappy::palette::{star_at, Rgb, SkyPalette};
use crate::games::flappy::types::{BIRD_HALF, BIRD_X, PIPE_GAP, PIPE_WIDTH};
use crate::games::flappy::FlappyGame;
use crate::games::{Outcome, Phase, WORLD_HEIGHT, WORLD_WIDTH};
use crate::ui::game_common::{
    render_game_over_overlay, render_start_overlay, render_status_bar,
};

/// Cosmetic ground band height in world units (collision is at y = 0).
const GROUND_BAND: f64 = 30.0;

/// Pipe cap depth in world units, measured inward from each gap edge.
const CAP_DEPTH: f64 = 10.0;

const SUN_CENTER: (f64, f64) = (650.0, 500.0);
const SUN_RADIUS: f64 = 35.0;
const MOON_CENTER: (f64, f64) = (140.0, 500.0);
const MOON_RADIUS: f64 = 28.0;
/// Stars only render in the upper sky.
const STAR_FLOOR: f64 = 250.0;

const SUN_COLOR: Rgb = Rgb::new(255, 220, 80);
const MOON_COLOR: Rgb = Rgb::new(230, 230, 210);
const STAR_COLOR: Rgb = Rgb::new(255, 255, 255);

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Render the Sky Run scene.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if let Phase::Over(outcome) = game.phase {
        render_flappy_game_over(frame, area, game, outcome);
        return;
    }

    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(area);

    render_canvas(frame, chunks[0], game);
    render_score_overlay(frame, chunks[0], game);

    if game.phase == Phase::NotStarted {
        render_start_overlay(frame, chunks[0], "SKY RUN", "Press Space to take off");
        render_status_bar(
            frame,
            chunks[1],
            "Waiting for the first flap",
            Color::Yellow,
            &[("[Space/Up/Enter]", "Flap"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            chunks[1],
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Esc]", "Menu")],
        );
    }
}

/// Render the scaled world: sky, celestial bodies, pipes, ground, bird.
fn render_canvas(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let palette = SkyPalette::for_score(game.score);
    let x_scale = width as f64 / WORLD_WIDTH;
    let y_scale = height as f64 / WORLD_HEIGHT;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let world_y = WORLD_HEIGHT - (row as f64 + 0.5) / y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let world_x = (col as f64 + 0.5) / x_scale;
            spans.push(cell_span(game, &palette, world_x, world_y, col, row));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Pick the glyph and style for one cell, from front to back: bird, pipes,
/// ground, sun/moon/stars, sky.
fn cell_span(
    game: &FlappyGame,
    palette: &SkyPalette,
    world_x: f64,
    world_y: f64,
    col: usize,
    row: usize,
) -> Span<'static> {
    let sky = Style::default().bg(color(palette.sky));

    // Bird.
    if (world_x - BIRD_X).abs() <= BIRD_HALF && (world_y - game.bird_y).abs() <= BIRD_HALF {
        let glyph = if game.velocity > 1.0 {
            "▲"
        } else if game.velocity < -3.0 {
            "▼"
        } else if game.wing_phase.sin() >= 0.0 {
            "►"
        } else {
            "▻"
        };
        return Span::styled(glyph, sky.fg(Color::Yellow).add_modifier(Modifier::BOLD));
    }

    // Pipes: everything outside the gap is pipe, with a cap band hugging
    // each gap edge.
    for pipe in &game.pipes {
        if world_x < pipe.x || world_x >= pipe.x + PIPE_WIDTH {
            continue;
        }
        let gap_bottom = pipe.height;
        let gap_top = pipe.height + PIPE_GAP;
        if world_y < gap_bottom || world_y >= gap_top {
            let in_cap = (world_y >= gap_bottom - CAP_DEPTH && world_y < gap_bottom)
                || (world_y >= gap_top && world_y < gap_top + CAP_DEPTH);
            let body = if in_cap { palette.pipe_cap } else { palette.pipe };
            return Span::styled("█", sky.fg(color(body)));
        }
    }

    // Ground band.
    if world_y < GROUND_BAND {
        return Span::styled(" ", Style::default().bg(color(palette.ground)));
    }

    // Sun and moon fade by blending toward the sky color; terminal cells
    // have no alpha channel.
    if palette.sun_alpha > 0.0 && inside(world_x, world_y, SUN_CENTER, SUN_RADIUS) {
        let body = palette.sky.lerp(SUN_COLOR, palette.sun_alpha);
        return Span::styled(" ", Style::default().bg(color(body)));
    }
    if palette.moon_alpha > 0.0 && inside(world_x, world_y, MOON_CENTER, MOON_RADIUS) {
        let body = palette.sky.lerp(MOON_COLOR, palette.moon_alpha);
        return Span::styled(" ", Style::default().bg(color(body)));
    }

    // Star field, skipped entirely by day.
    if palette.any_stars() && world_y > STAR_FLOOR && star_at(col as u16, row as u16) {
        let tint = palette.sky.lerp(STAR_COLOR, palette.star_alpha);
        return Span::styled("·", sky.fg(color(tint)));
    }

    Span::styled(" ", sky)
}

fn inside(x: f64, y: f64, center: (f64, f64), radius: f64) -> bool {
    let dx = x - center.0;
    let dy = y - center.1;
    dx * dx + dy * dy <= radius * radius
}

/// Score line drawn over the top-left corner of the canvas.
fn render_score_overlay(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    if area.width < 4 || area.height < 1 {
        return;
    }
    let text = Line::from(vec![
        Span::styled(
            format!(" Score: {} ", game.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" Best: {} ", game.high_score),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(text),
        Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        },
    );
}

fn render_flappy_game_over(frame: &mut Frame, area: Rect, game: &FlappyGame, outcome: Outcome) {
    let details = vec![
        format!("You scored {} points.", game.score),
        format!("Session best: {}.", game.high_score),
    ];
    render_game_over_overlay(frame, area, outcome, "CRASH!", &details);
}
