use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::piece::DEAD_COLORS;
use crate::game::{Board, Cell, Game, GameState};

/// One frame of the line-clear highlight: `row` repaints in palette colors
/// on even phases and black on odd phases.
#[derive(Clone, Copy, Debug)]
pub struct Flash {
    pub row: usize,
    pub phase: u8,
}

pub fn ui(f: &mut Frame, game: &Game) {
    draw_frame(
        f,
        &game.board,
        game.score(),
        game.piece_color(),
        None,
        game.game_state == GameState::GameOver,
    );
}

/// Frame drawn mid line-clear, while the game state is being mutated and the
/// renderer only has the board snapshot.
pub fn ui_with_flash(f: &mut Frame, board: &Board, score: u32, piece_color: Color, flash: Flash) {
    draw_frame(f, board, score, piece_color, Some(flash), false);
}

fn draw_frame(
    f: &mut Frame,
    board: &Board,
    score: u32,
    piece_color: Color,
    flash: Option<Flash>,
    game_over: bool,
) {
    let size = f.size();

    let board_rows = BOARD_HEIGHT as u16 + 2; // 20 rows + borders
    let board_cols = BOARD_WIDTH as u16 * 2 + 2; // 2 chars per cell + borders

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_rows),
            Constraint::Min(0),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(board_cols),
            Constraint::Length(18), // side panel
            Constraint::Min(0),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let panel_area = horizontal_chunks[2];

    render_board(f, board, piece_color, flash, board_area);
    render_side_panel(f, score, panel_area);

    if game_over {
        render_game_over_overlay(f, score, board_area);
    }
}

fn render_board(
    f: &mut Frame,
    board: &Board,
    piece_color: Color,
    flash: Option<Flash>,
    area: Rect,
) {
    let mut board_lines = Vec::with_capacity(BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT {
        let mut line_spans = Vec::with_capacity(BOARD_WIDTH);
        for x in 0..BOARD_WIDTH {
            let span = match flash {
                Some(flash) if flash.row == y => {
                    if flash.phase % 2 == 0 {
                        Span::styled("██", Style::default().fg(DEAD_COLORS[(x + y) % 7]))
                    } else {
                        Span::styled("██", Style::default().fg(Color::Black))
                    }
                }
                _ => match board.get(x, y) {
                    Cell::Empty => Span::styled("░░", Style::default().fg(Color::DarkGray)),
                    Cell::Alive => Span::styled("██", Style::default().fg(piece_color)),
                    // Settled cells keep a stable rainbow keyed on position.
                    Cell::Dead => {
                        Span::styled("██", Style::default().fg(DEAD_COLORS[(x + y) % 7]))
                    }
                },
            };
            line_spans.push(span);
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("MINITETRIS"));

    f.render_widget(board_widget, area);
}

fn render_side_panel(f: &mut Frame, score: u32, area: Rect) {
    let panel_text = vec![
        Line::from(Span::styled("MINITETRIS", Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(format!("Score: {}", score)),
        Line::from(""),
        Line::from("Checks:"),
        Line::from("A - Left"),
        Line::from("D - Right"),
        Line::from("S - Below"),
        Line::from("Q/E - Wheel"),
        Line::from("ESC - Done"),
    ];

    let panel_widget = Paragraph::new(panel_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(panel_widget, area);
}

fn render_game_over_overlay(f: &mut Frame, score: u32, area: Rect) {
    let popup_area = centered_rect(70, 35, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("GAME OVER", Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(format!("Final Score: {}", score)),
        Line::from(""),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(widget, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
