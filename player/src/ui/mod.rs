pub mod app;
pub mod components;

use anyhow::Result;
use crate::app::App;
use ratatui::Frame;

/// Draw the main UI
pub fn draw_ui(f: &mut Frame, app: &mut App) -> Result<()> {
    let size = f.area();

    app::draw_board_view(f, app, size);

    // Draw status message if needed
    if let Some((msg, time, color)) = &app.status_message {
        let age = time.elapsed();
        app::draw_status_message(f, msg, *color, age);
    }

    // Draw command prompt if in command mode
    if app.is_command_mode() {
        app::draw_command_prompt(f, app.get_command_buffer());
    }

    if app.show_help {
        let count = app.board.as_ref().map_or(0, |board| board.len());
        app::draw_help_dialog(f, count);
    }

    Ok(())
}
