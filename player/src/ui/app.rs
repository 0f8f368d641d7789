use crate::app::App;
use crate::ui::components::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use vidboard_core::shortcut_key;

/// Width of one button cell in the grid
const BUTTON_WIDTH: u16 = 26;
/// Height of one button cell in the grid
const BUTTON_HEIGHT: u16 = 3;

/// Draw the board: title, player pane, button grid and key hints
pub fn draw_board_view(f: &mut Frame, app: &mut App, area: Rect) {
    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Title
            Constraint::Length(6),   // Player pane
            Constraint::Min(3),      // Buttons
            Constraint::Length(1),   // Status bar
        ])
        .split(area);

    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" vidboard ")
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(Color::Black));

    let title_text = Paragraph::new(Text::from(app.title.as_str()))
        .block(title_block)
        .style(Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    f.render_widget(title_text, chunks[0]);

    draw_player_pane(f, app, chunks[1]);
    draw_button_grid(f, app, chunks[2]);

    let status_text = "F1: Help | 1-9,0,a-t: Select | Tab: Focus | Enter: Select focused | :: Command | Ctrl+Q: Quit";
    let status = Paragraph::new(Text::from(status_text))
        .style(Style::default().fg(Color::White).bg(Color::DarkGray));

    f.render_widget(status, chunks[3]);
}

/// Draw the player element with its current source
pub fn draw_player_pane(f: &mut Frame, app: &App, area: Rect) {
    let Some(board) = &app.board else {
        let empty = Paragraph::new(Text::from(vec![
            Line::from(Span::styled("Nothing to play", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
            Line::from("The manifest needs a [player] table with id = \"player\" and at least one [[button]]."),
        ]))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Player "));
        f.render_widget(empty, area);
        return;
    };

    let player = board.player();
    let source_style = if player.source.is_blank() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::LightGreen)
    };
    let now_showing = board
        .active_button()
        .map(|button| button.label.as_str())
        .unwrap_or("-");

    let lines = vec![
        Line::from(vec![
            Span::styled("Now showing: ", Style::default().fg(Color::Green)),
            Span::styled(now_showing, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("src: ", Style::default().fg(Color::Green)),
            Span::styled(player.source.as_str(), source_style),
        ]),
        Line::from(vec![
            Span::styled("Provider: ", Style::default().fg(Color::Green)),
            Span::styled(board.embed().host.as_str(), Style::default().fg(Color::White)),
            Span::styled("  Loads: ", Style::default().fg(Color::Green)),
            Span::styled(player.loads.to_string(), Style::default().fg(Color::White)),
            Span::styled("  Loaded: ", Style::default().fg(Color::Green)),
            Span::styled(
                player.loaded_for().map_or("-".to_string(), |age| format!("{}s ago", age.as_secs())),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let pane = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" #{} ", player.element_id)));

    f.render_widget(pane, area);
}

/// Draw buttons in a grid and remember where each one landed
pub fn draw_button_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(board) = &app.board else {
        app.button_areas.clear();
        return;
    };

    let areas = grid_cells(area, board.len());
    for (marking, cell) in board.markings().zip(areas.iter()) {
        if cell.width == 0 || cell.height == 0 {
            continue;
        }
        let button = &board.buttons()[marking.index];
        let has_video = button.video.as_deref().is_some_and(|id| !id.is_empty());
        let widget = VideoButtonWidget::new(&button.label)
            .shortcut(shortcut_key(marking.index))
            .active(marking.active)
            .pressed(marking.pressed_attr())
            .focused(marking.focused)
            .has_video(has_video);
        f.render_widget(widget, *cell);
    }
    app.button_areas = areas;
}

/// Lay `count` buttons out row by row. Cells that do not fit are empty rects.
pub fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    let columns = (area.width / BUTTON_WIDTH).max(1);
    let rows_visible = area.height / BUTTON_HEIGHT;
    let width = area.width / columns;

    (0..count)
        .map(|i| {
            let column = (i % columns as usize) as u16;
            let row = i / columns as usize;
            if row >= rows_visible as usize {
                return Rect::default();
            }
            Rect::new(
                area.x + column * width,
                area.y + row as u16 * BUTTON_HEIGHT,
                width,
                BUTTON_HEIGHT,
            )
        })
        .collect()
}

/// Draw status message
pub fn draw_status_message(f: &mut Frame, message: &str, color: Color, age: Duration) {
    let area = f.area();
    let message_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(5),
        width: area.width,
        height: 3.min(area.height),
    };
    let status_message = StatusMessage::new(message, color, age)
        .max_age(Duration::from_secs(3));

    f.render_widget(status_message, message_area);
}

/// Draw command prompt
pub fn draw_command_prompt(f: &mut Frame, command: &str) {
    if f.area().height < 2 {
        return;
    }
    let area = Rect::new(0, f.area().height - 2, f.area().width, 1);

    f.render_widget(Clear, area);

    let command_para = Paragraph::new(Text::from(format!(":{}", command)))
        .style(Style::default()
            .fg(Color::Yellow)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD))
        .alignment(Alignment::Left);

    f.render_widget(command_para, area);
    f.set_cursor_position((area.x + 1 + command.chars().count() as u16, area.y));
}

/// Draw help dialog
pub fn draw_help_dialog(f: &mut Frame, button_count: usize) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);
    f.render_widget(HelpOverlay::new(button_count), area);
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
