use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::Cell;
use crate::input::{Action, TouchButtons};
use crate::{Game, PieceType, CELL_W, SIDEBAR_W};

/// Render color for each piece type.
pub fn piece_color(kind: PieceType) -> Color {
    match kind {
        PieceType::H => Color::Rgb(0xff, 0x6b, 0x35),
        PieceType::I => Color::Rgb(0xc8, 0xcd, 0xd4),
        PieceType::J => Color::Rgb(0x4e, 0xcd, 0xc4),
        PieceType::L => Color::Rgb(0x7c, 0x7f, 0x93),
        PieceType::O => Color::Rgb(0x2a, 0x2d, 0x3a),
        PieceType::S => Color::Rgb(0xfe, 0xad, 0x90),
        PieceType::T => Color::Rgb(0x84, 0xce, 0xc9),
        PieceType::Z => Color::Rgb(0x0f, 0x0f, 0x23),
    }
}

pub fn draw_game(frame: &mut Frame, game: &Game, touch: &mut TouchButtons) {
    touch.clear();
    let area = frame.size();

    let play_w = (game.board.width * CELL_W + 2) as u16;
    let play_h = (game.board.height + 2) as u16;
    let min_w = play_w + SIDEBAR_W + 2;
    let min_h = play_h + 2;
    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE PANE (min {}x{})", min_w, min_h))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("GRIDFALL"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("GRIDFALL")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Play area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(play_w + 2), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_h),
            Constraint::Min(0),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_w),
            Constraint::Min(0),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    draw_playfield(frame, game, play_rect);
    draw_sidebar(frame, game, cols[1], touch);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let play_w = game.board.width * CELL_W + 2;
    let play_h = game.board.height + 2;
    let border = Style::default().fg(Color::DarkGray);
    let mut grid = vec![vec![(' ', Style::default()); play_w]; play_h];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0] = ('┌', border);
    grid[0][play_w - 1] = ('┐', border);
    for x in 1..play_w - 1 {
        grid[0][x] = ('─', border);
    }
    for row in grid.iter_mut().take(play_h - 1).skip(1) {
        row[0] = ('│', border);
        row[play_w - 1] = ('│', border);
    }
    grid[play_h - 1][0] = ('└', border);
    grid[play_h - 1][play_w - 1] = ('┘', border);
    for x in 1..play_w - 1 {
        grid[play_h - 1][x] = ('═', border);
    }

    // Plot one board cell as two glyphs in the inner area.
    let plot_block = |grid: &mut [Vec<(char, Style)>], bx: usize, by: usize, ch: char, style: Style| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < play_h && gx + 1 < play_w {
            grid[gy][gx] = (ch, style);
            grid[gy][gx + 1] = (ch, style);
        }
    };

    // Locked cells.
    for y in 0..game.board.height {
        for x in 0..game.board.width {
            if let Cell::Filled(kind) = game.board.get(x, y) {
                let style = Style::default().fg(piece_color(kind));
                plot_block(&mut grid, x, y, '█', style);
            }
        }
    }

    // Ghost projection under the active piece.
    let ghost_style = Style::default().fg(Color::DarkGray);
    for (x, y) in game.ghost_piece().cells() {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < game.board.width && yu < game.board.height {
                plot_block(&mut grid, xu, yu, '·', ghost_style);
            }
        }
    }

    // Active piece. Cells above the top edge are simply not drawn.
    let style = Style::default().fg(piece_color(game.current.kind));
    for (x, y) in game.current.cells() {
        if x >= 0 && y >= 0 {
            let (xu, yu) = (x as usize, y as usize);
            if xu < game.board.width && yu < game.board.height {
                plot_block(&mut grid, xu, yu, '█', style);
            }
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), *style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), play_rect);

    if game.game_over {
        let overlay_w = (play_w as u16).saturating_sub(4).max(26);
        let overlay_h = 5u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new("GAME OVER\nPress Enter to restart")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(overlay, popup);
    }
}

fn draw_sidebar(frame: &mut Frame, game: &Game, area: Rect, touch: &mut TouchButtons) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Min(0),
        ])
        .split(area);

    draw_info(frame, game, chunks[0]);
    draw_buttons(frame, game, chunks[1], touch);
    draw_help(frame, chunks[2]);
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = if game.game_over {
        "OVER"
    } else if game.paused {
        "PAUSED"
    } else {
        "PLAYING"
    };

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "SCORE:", game.score)),
        Line::raw(format!("{:<7} {}", "LINES:", game.lines)),
        Line::raw(format!("{:<7} {}", "LEVEL:", game.level)),
        Line::raw(""),
        Line::raw(format!("{:<7} {}", "STATUS:", status)),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, area);
}

fn draw_buttons(frame: &mut Frame, game: &Game, area: Rect, touch: &mut TouchButtons) {
    let block = Block::default().title("BUTTONS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pause_label = if game.paused { "▶ resume" } else { "⏯ pause" };
    let buttons: [(&str, Action); 5] = [
        ("◄ left", Action::Left),
        ("► right", Action::Right),
        ("↻ rotate", Action::Rotate),
        ("▼ drop", Action::HardDrop),
        (pause_label, Action::Pause),
    ];

    let mut lines = Vec::new();
    for (i, (label, action)) in buttons.iter().enumerate() {
        let row = inner.y + i as u16;
        if row < inner.y + inner.height {
            touch.push(
                Rect {
                    x: inner.x,
                    y: row,
                    width: inner.width,
                    height: 1,
                },
                *action,
            );
        }
        lines.push(Line::raw(format!(" {}", label)));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::raw("←/→ move"),
        Line::raw("↑ rotate"),
        Line::raw("↓ soft drop"),
        Line::raw("space hard drop"),
        Line::raw("p pause"),
        Line::raw("enter restart"),
        Line::raw("q/esc quit"),
    ])
    .block(Block::default().title("KEYS").borders(Borders::ALL));
    frame.render_widget(help, area);
}
