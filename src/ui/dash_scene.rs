//! UI rendering for Late Dash.
//!
//! Same cell-grid approach as the Sky Run scene: the 800x600 logical world
//! scaled onto the terminal, one span per cell. The street scrolls with the
//! game's parallax offset; hazards render their hitboxes in kind-specific
//! colors.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::games::dash::types::{
    HAZARD_WIDTH, RUNNER_FOOT, RUNNER_HALF_WIDTH, RUNNER_HEAD, RUNNER_TORSO, RUNNER_X,
    TARGET_SCORE,
};
use crate::games::dash::{DashGame, HazardKind};
use crate::games::{Outcome, Phase, WORLD_HEIGHT, WORLD_WIDTH};
use crate::ui::game_common::{
    render_game_over_overlay, render_start_overlay, render_status_bar,
};

const SKY: Color = Color::Rgb(120, 185, 250);
const STREET: Color = Color::Rgb(90, 90, 95);
const STREET_STRIPE: Color = Color::Rgb(150, 150, 155);

/// Street surface top edge in world units (the runner's feet rest here).
const STREET_TOP: f64 = 60.0;
/// Paving stripes repeat every this many world units.
const STRIPE_PERIOD: f64 = 100.0;

impl HazardKind {
    /// Scene glyph and color for this hazard.
    fn sprite(&self) -> (&'static str, Color) {
        match self {
            HazardKind::Teacher => ("█", Color::Rgb(170, 40, 40)),
            HazardKind::Puddle => ("≈", Color::Rgb(60, 110, 220)),
            HazardKind::StudentGroup => ("▓", Color::Rgb(160, 80, 170)),
            HazardKind::StrayDog => ("▒", Color::Rgb(150, 110, 60)),
        }
    }
}

/// Render the Late Dash scene.
pub fn render_dash(frame: &mut Frame, area: Rect, game: &DashGame) {
    if let Phase::Over(outcome) = game.phase {
        render_dash_game_over(frame, area, game, outcome);
        return;
    }

    frame.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(area);

    render_canvas(frame, chunks[0], game);
    render_hud_overlay(frame, chunks[0], game);

    if game.phase == Phase::NotStarted {
        render_start_overlay(frame, chunks[0], "LATE DASH", "Press Space to start running");
        render_status_bar(
            frame,
            chunks[1],
            "The bell rings in 90 seconds",
            Color::Yellow,
            &[("[Space/Up/Enter]", "Jump"), ("[Esc]", "Menu")],
        );
    } else {
        render_status_bar(
            frame,
            chunks[1],
            &format!("Score: {} / {}   Time: {}s", game.score, TARGET_SCORE, game.time_left),
            Color::Green,
            &[("[Space/Up/Enter]", "Jump"), ("[Esc]", "Menu")],
        );
    }
}

fn render_canvas(frame: &mut Frame, area: Rect, game: &DashGame) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = width as f64 / WORLD_WIDTH;
    let y_scale = height as f64 / WORLD_HEIGHT;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let world_y = WORLD_HEIGHT - (row as f64 + 0.5) / y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let world_x = (col as f64 + 0.5) / x_scale;
            spans.push(cell_span(game, world_x, world_y));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Pick the glyph and style for one cell: runner, hazards, street, sky.
fn cell_span(game: &DashGame, world_x: f64, world_y: f64) -> Span<'static> {
    let sky = Style::default().bg(SKY);

    // Runner, drawn as head / torso / legs bands over the full hitbox.
    if (world_x - RUNNER_X).abs() <= RUNNER_HALF_WIDTH {
        let offset = world_y - game.runner_y;
        if (RUNNER_TORSO..=RUNNER_HEAD).contains(&offset) {
            return Span::styled("█", sky.fg(Color::Rgb(240, 200, 150)));
        }
        if (-RUNNER_TORSO..RUNNER_TORSO).contains(&offset) {
            return Span::styled("█", sky.fg(Color::Rgb(60, 120, 200)));
        }
        if (-RUNNER_FOOT..-RUNNER_TORSO).contains(&offset) {
            // Legs alternate with the stride.
            let glyph = if game.run_phase.sin() >= 0.0 { "/" } else { "\\" };
            return Span::styled(glyph, sky.fg(Color::Rgb(40, 40, 60)).add_modifier(Modifier::BOLD));
        }
    }

    // Hazards render their hitbox extent.
    for hazard in &game.hazards {
        if world_x < hazard.x || world_x >= hazard.x + HAZARD_WIDTH {
            continue;
        }
        let base = hazard.height + hazard.kind.box_offset();
        let top = base + hazard.kind.box_height();
        if world_y >= base && world_y < top {
            let (glyph, fg) = hazard.kind.sprite();
            return Span::styled(glyph, sky.fg(fg));
        }
    }

    // Street with scrolling paving stripes.
    if world_y < STREET_TOP {
        let phase = (world_x + game.scroll).rem_euclid(STRIPE_PERIOD);
        let stripe = world_y < 20.0 && phase < STRIPE_PERIOD / 2.0;
        let bg = if stripe { STREET_STRIPE } else { STREET };
        return Span::styled(" ", Style::default().bg(bg));
    }

    Span::styled(" ", sky)
}

/// Score and clock drawn over the top-left corner of the canvas.
fn render_hud_overlay(frame: &mut Frame, area: Rect, game: &DashGame) {
    if area.width < 4 || area.height < 1 {
        return;
    }
    let clock_color = if game.time_left <= 10 {
        Color::Red
    } else {
        Color::White
    };
    let text = Line::from(vec![
        Span::styled(
            format!(" Score: {}/{} ", game.score, TARGET_SCORE),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}s ", game.time_left),
            Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
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

fn render_dash_game_over(frame: &mut Frame, area: Rect, game: &DashGame, outcome: Outcome) {
    let (title, details) = match outcome {
        Outcome::Success => (
            "MADE IT!",
            vec![
                format!("You reached class with {}s to spare.", game.time_left),
                format!("Final score: {}.", game.score),
            ],
        ),
        Outcome::Failure => (
            "LATE AGAIN",
            vec![
                if game.time_left == 0 {
                    "The bell beat you to it.".to_string()
                } else {
                    "Something on the street got you.".to_string()
                },
                format!("Final score: {} / {}.", game.score, TARGET_SCORE),
            ],
        ),
    };
    render_game_over_overlay(frame, area, outcome, title, &details);
}
