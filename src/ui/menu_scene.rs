//! The game-select menu.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::build_info;
use crate::games::GameKind;

/// Menu selection state.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = GameKind::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % GameKind::ALL.len();
    }

    pub fn selected_kind(&self) -> GameKind {
        GameKind::ALL[self.selected]
    }
}

/// Render the menu full-frame.
pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MenuState) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" skydash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "SKYDASH",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let selected = i == menu.selected;
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(kind.title(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", kind.tagline()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "[↑/↓] Select   [Enter] Play   [Q] Quit",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("build {} ({})", build_info::BUILD_DATE, build_info::BUILD_COMMIT),
        Style::default().fg(Color::DarkGray),
    )));

    let content_height = lines.len() as u16;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height.min(inner.height)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut menu = MenuState::new();
        assert_eq!(menu.selected_kind(), GameKind::SkyRun);

        menu.next();
        assert_eq!(menu.selected_kind(), GameKind::LateDash);
        menu.next();
        assert_eq!(menu.selected_kind(), GameKind::SkyRun);

        menu.prev();
        assert_eq!(menu.selected_kind(), GameKind::LateDash);
        menu.prev();
        assert_eq!(menu.selected_kind(), GameKind::SkyRun);
    }
}
