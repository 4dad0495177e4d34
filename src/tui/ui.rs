//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Screen};
use crate::games::tictactoe::{Cell, Phase, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BG_COLOR: Color = Color::Rgb(28, 170, 156);
const LINE_COLOR: Color = Color::Rgb(23, 145, 135);
const CIRCLE_COLOR: Color = Color::Rgb(239, 231, 200);
const CROSS_COLOR: Color = Color::Rgb(66, 66, 66);

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "Arrows/1-9: select | Enter: place | U: undo | Y: redo | R: restart | Q: quit";

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Start => draw_start(frame),
        Screen::Board => draw_game(frame, app),
    }
}

fn draw_start(frame: &mut Frame) {
    let area = center_rect(frame.area(), 40, 9);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIC TAC TOE",
            Style::default().fg(CIRCLE_COLOR).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter / Space: start"),
        Line::from("Q / Esc: quit"),
    ];
    let start = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(BG_COLOR).fg(CROSS_COLOR))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(LINE_COLOR)),
        );
    frame.render_widget(start, area);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let (text, color) = match app.notice() {
        Some(notice) => (notice.to_string(), Color::Red),
        None => (app.status_line(), Color::Yellow),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    frame.render_widget(
        Block::default().style(Style::default().bg(LINE_COLOR)),
        board_area,
    );

    let engine = app.engine();
    let finished = !matches!(engine.phase(), Phase::InProgress);
    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(board_area)) {
        let highlighted = pos == app.cursor() && !finished;
        draw_cell(frame, rect, engine.board().get(pos), pos, highlighted);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, pos: Position, highlighted: bool) {
    let mut style = Style::default().bg(BG_COLOR);
    let symbol = match cell.player() {
        Some(player) => {
            style = style.fg(mark_color(player)).add_modifier(Modifier::BOLD);
            player.symbol().to_string()
        }
        None => {
            style = style.fg(LINE_COLOR);
            (pos.to_index() + 1).to_string()
        }
    };
    if highlighted {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::PlayerOne => CIRCLE_COLOR,
        Player::PlayerTwo => CROSS_COLOR,
    }
}

/// Title, board, status and help rows.
fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area)
}

/// Screen rectangles of the 9 cells in row-major order, clipped to `board_area`.
fn cell_rects(board_area: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        let cell = Rect {
            x: board_area.x + pos.col() as u16 * (CELL_WIDTH + 1),
            y: board_area.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            width: CELL_WIDTH,
            height: CELL_HEIGHT,
        };
        cell.intersection(board_area)
    })
}

/// Returns the board cell under terminal coordinates `(column, row)`.
pub fn position_at(frame_area: Rect, column: u16, row: u16) -> Option<Position> {
    let chunks = screen_chunks(frame_area);
    let board_area = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
    Position::ALL
        .into_iter()
        .zip(cell_rects(board_area))
        .find(|(_, rect)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(pos, _)| pos)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
