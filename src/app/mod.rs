use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::input::{action_for_key, Action, TouchButtons};
use crate::ui::draw_game;
use crate::{Game, CELL_W, MAX_COLS, MIN_COLS, MIN_ROWS, SIDEBAR_W};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<()> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

/// Grid dimensions for a terminal of the given size: as many 2-wide cells as
/// fit beside the sidebar, clamped to the minimum playable 10x15 and capped
/// at 35 columns.
pub fn grid_size(width: u16, height: u16) -> (usize, usize) {
    // cabinet border (2) + sidebar, then well side walls (2)
    let avail_w = (width.saturating_sub(SIDEBAR_W + 2) as usize).saturating_sub(2);
    let cols = (avail_w / CELL_W).clamp(MIN_COLS, MAX_COLS);
    // cabinet border (2) + well ceiling/floor (2)
    let avail_h = height.saturating_sub(4) as usize;
    let rows = avail_h.max(MIN_ROWS);
    (cols, rows)
}

fn run_loop(terminal: &mut Term) -> Result<()> {
    let size = terminal.size()?;
    let (cols, rows) = grid_size(size.width, size.height);
    let mut game = Game::new(cols, rows);
    let mut touch = TouchButtons::new();
    let mut last_drop = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &game, &mut touch))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    if let Some(action) = action_for_key(key.code) {
                        handle_action(&mut game, action, terminal, &mut last_drop)?;
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(action) = touch.hit(mouse.column, mouse.row) {
                        handle_action(&mut game, action, terminal, &mut last_drop)?;
                    }
                }
                Event::Resize(w, h) => {
                    // A new grid only before any progress; locked cells are
                    // never re-flowed mid-game.
                    if !game.started() {
                        let (cols, rows) = grid_size(w, h);
                        game = Game::new(cols, rows);
                        last_drop = Instant::now();
                    }
                }
                _ => {}
            }
        }

        if last_drop.elapsed() >= game.drop_interval {
            game.tick_gravity();
            last_drop = Instant::now();
        }
    }
    Ok(())
}

fn handle_action(
    game: &mut Game,
    action: Action,
    terminal: &mut Term,
    last_drop: &mut Instant,
) -> Result<()> {
    match action {
        Action::Pause => game.toggle_pause(),
        Action::Restart => {
            if game.game_over {
                let size = terminal.size()?;
                let (cols, rows) = grid_size(size.width, size.height);
                game.restart(cols, rows);
                *last_drop = Instant::now();
            }
        }
        // Movement is blocked while paused; only pause-toggle and restart
        // stay live.
        _ if game.paused || game.game_over => {}
        Action::Left => {
            let _ = game.try_move(-1, 0);
        }
        Action::Right => {
            let _ = game.try_move(1, 0);
        }
        Action::SoftDrop => {
            let _ = game.soft_drop();
        }
        Action::Rotate => {
            let _ = game.rotate_cw();
        }
        Action::HardDrop => game.hard_drop(),
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
