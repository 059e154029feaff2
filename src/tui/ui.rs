//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::games::tictactoe::{Player, Position, RenderData, Square};

use super::app::{App, Focus};

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and history
            Constraint::Length(3), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    draw_board(frame, body[0], app.frame(), cursor);
    draw_info(frame, body[1], app);

    let help = Paragraph::new(
        "Arrows/1-9: move  Enter: play/jump  Tab: switch pane  s: sort  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, data: &RenderData, cursor: Option<Position>) {
    let block = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], data, cursor, row * 3);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    data: &RenderData,
    cursor: Option<Position>,
    start: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], data, cursor, start + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    data: &RenderData,
    cursor: Option<Position>,
    index: usize,
) {
    let (symbol, base_style) = match data.board.get(index) {
        Some(Square::Occupied(Player::X)) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        _ => (format!(" {} ", index + 1), Style::default().fg(Color::DarkGray)),
    };

    let style = if cursor.is_some_and(|pos| pos.to_index() == index) {
        base_style.bg(Color::White).fg(Color::Black)
    } else if data.is_winning_square(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line cell.
    let text = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let data = app.frame();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let status_style = if data.status.is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(data.status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = data
        .moves
        .iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.label(), style)))
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let title = format!(" Moves ({}: press s) ", data.sort_order.toggle_label());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::History {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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
