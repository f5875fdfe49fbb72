//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{GameState, Player, Square};

use super::app::{App, Focus};

const HELP: &str =
    "arrows move · enter play · tab history · [ ] step · home/end · r reverse · n new · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);

    let status = match app.message() {
        Some(message) => format!("{} ({})", app.game().status(), message),
        None => app.game().status().to_string(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let lines = board_lines(app.game(), app.cursor(), app.focus() == Focus::Board);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let width = u16::try_from(app.game().size() * 4)
        .unwrap_or(u16::MAX)
        .saturating_add(1);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Step {}", app.game().current_step()))
        .border_style(focus_style(app.focus() == Focus::Board));
    let board = Paragraph::new(lines).block(block);
    frame.render_widget(board, center_rect(area, width, height));
}

/// Draws the board as text rows separated by rules.
fn board_lines(game: &GameState, cursor: usize, show_cursor: bool) -> Vec<Line<'static>> {
    let board = game.current().board();
    let size = board.size();
    let winning = game.winning_line().unwrap_or(&[]);
    let rule = vec!["───"; size].join("┼");

    let mut lines = Vec::with_capacity(size * 2);
    for row in 0..size {
        if row > 0 {
            lines.push(Line::styled(rule.clone(), Style::default().fg(Color::DarkGray)));
        }
        let mut spans = Vec::with_capacity(size * 2);
        for col in 0..size {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let cell = row * size + col;
            let (symbol, mut style) = match board.get(cell) {
                Some(Square::Occupied(Player::X)) => {
                    (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
                }
                Some(Square::Occupied(Player::O)) => {
                    (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                }
                _ => ("   ", Style::default().fg(Color::DarkGray)),
            };
            if winning.contains(&cell) {
                style = style.bg(Color::Green);
            }
            if show_cursor && cell == cursor {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let items = app
        .game()
        .move_list()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", entry.step, entry.label)).style(style)
        })
        .collect::<Vec<_>>();

    let order = if app.game().is_reversed() {
        "newest first"
    } else {
        "oldest first"
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("History ({order})"))
                .border_style(focus_style(app.focus() == Focus::History)),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
