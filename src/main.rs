use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use skydash::build_info;
use skydash::games::ActiveGame;
use skydash::input::{map_key, GameInput};
use skydash::ui;
use skydash::ui::menu_scene::MenuState;

/// Event poll interval while a game is running. Short, so the fixed-timestep
/// accumulator is fed often enough for smooth scrolling.
const GAME_POLL_MS: u64 = 10;
/// Event poll interval on the menu, where nothing animates.
const MENU_POLL_MS: u64 = 50;

enum Screen {
    Menu,
    Playing(ActiveGame),
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skydash {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("skydash - side-scrolling arcade games for the terminal\n");
                println!("Usage: skydash [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'skydash --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even if the loop errored
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut screen = Screen::Menu;
    let mut menu = MenuState::new();
    let mut last_frame = Instant::now();

    loop {
        match screen {
            Screen::Menu => {
                terminal.draw(|frame| {
                    let area = frame.size();
                    ui::menu_scene::render_menu(frame, area, &menu);
                })?;

                if event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        match key.code {
                            KeyCode::Up | KeyCode::Char('k') => menu.prev(),
                            KeyCode::Down | KeyCode::Char('j') => menu.next(),
                            KeyCode::Enter | KeyCode::Char(' ') => {
                                screen = Screen::Playing(menu.selected_kind().start(&mut rng));
                                last_frame = Instant::now();
                            }
                            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }
                }
            }
            Screen::Playing(ref mut game) => {
                terminal.draw(|frame| ui::draw_game(frame, game))?;

                let mut back_to_menu = false;
                if event::poll(Duration::from_millis(GAME_POLL_MS))? {
                    if let Event::Key(key) = event::read()? {
                        match map_key(key) {
                            GameInput::Quit => back_to_menu = true,
                            input => game.process_input(input, &mut rng),
                        }
                    }
                }

                // Feed wall-clock time into the fixed-timestep simulation.
                let dt_ms = last_frame.elapsed().as_millis() as u64;
                last_frame = Instant::now();
                game.advance(dt_ms, &mut rng);

                if back_to_menu {
                    screen = Screen::Menu;
                }
            }
        }
    }
}
