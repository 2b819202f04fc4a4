//! Shared UI helpers for the arcade scenes.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::games::Outcome;

/// Overlay color for a finished run.
pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Success => Color::Green,
        Outcome::Failure => Color::Red,
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g.
/// `[("[Space]", "Flap"), ("[Esc]", "Menu")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a centered "press Space to start" style overlay without clearing
/// the canvas behind it.
pub fn render_start_overlay(frame: &mut Frame, area: Rect, title: &str, hint: &str) {
    let content_height: u16 = 3;
    let y_offset = area.y + (area.height.saturating_sub(content_height)) / 2;

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::White))),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(area.x, y_offset, area.width, content_height),
    );
}

/// Render a full-screen game over overlay: bordered, title colored by
/// outcome, detail lines, restart hint.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    outcome: Outcome,
    title: &str,
    details: &[String],
) {
    frame.render_widget(Clear, area);

    let title_color = outcome_color(outcome);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for detail in details {
        lines.push(Line::from(Span::styled(
            detail.clone(),
            Style::default().fg(Color::White),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[R] Restart   [Esc] Menu",
        Style::default().fg(Color::DarkGray),
    )));

    let content_height = lines.len() as u16;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_colors() {
        assert_eq!(outcome_color(Outcome::Success), Color::Green);
        assert_eq!(outcome_color(Outcome::Failure), Color::Red);
    }
}
