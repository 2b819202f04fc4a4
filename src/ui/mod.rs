//! Terminal scenes. Each scene renders a pure snapshot of game state; no
//! simulation happens here.

pub mod dash_scene;
pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;

use ratatui::Frame;

use crate::games::ActiveGame;

/// Render the active game full-frame.
pub fn draw_game(frame: &mut Frame, game: &ActiveGame) {
    let area = frame.size();
    match game {
        ActiveGame::Flappy(game) => flappy_scene::render_flappy(frame, area, game),
        ActiveGame::Dash(game) => dash_scene::render_dash(frame, area, game),
    }
}
