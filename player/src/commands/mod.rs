use anyhow::{Result, anyhow};
use ratatui::style::Color;
use vidboard_core::InputFocus;

use crate::app::App;

/// A parsed `:` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click a button, 1-based
    Select(usize),
    /// Move focus to a button without activating it, 1-based
    Focus(usize),
    Help,
    Quit,
    /// Empty command line
    Nothing,
}

/// Command handler for the application
pub struct CommandHandler;

impl CommandHandler {
    /// Parse a command line
    pub fn parse(command_str: &str) -> Result<Command> {
        let parts: Vec<&str> = command_str.trim().splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let args = parts.get(1).map(|s| s.trim());

        match cmd.as_str() {
            "select" | "s" => Ok(Command::Select(Self::position(&cmd, args)?)),
            "focus" | "f" => Ok(Command::Focus(Self::position(&cmd, args)?)),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Ok(Command::Nothing),
            _ => Err(anyhow!("Unknown command: {}", cmd)),
        }
    }

    fn position(cmd: &str, args: Option<&str>) -> Result<usize> {
        let Some(args) = args else {
            return Err(anyhow!("{} command requires a button number", cmd));
        };
        match args.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(anyhow!("Invalid button number: {}", args)),
        }
    }

    /// Parse and execute a command
    pub fn execute(app: &mut App, command_str: &str) -> Result<()> {
        match Self::parse(command_str)? {
            Command::Select(n) => app.select(n - 1)?,
            Command::Focus(n) => {
                let Some(board) = &mut app.board else {
                    return Err(anyhow!("No buttons on this board"));
                };
                if n > board.len() {
                    return Err(anyhow!("No button {} (board has {})", n, board.len()));
                }
                board.set_focus(InputFocus::Button(n - 1));
            }
            Command::Help => app.show_help = true,
            Command::Quit => app.should_quit = true,
            Command::Nothing => {}
        }
        Ok(())
    }
}

/// Handle a command string entered by the user; errors end up in the status line
pub fn handle_command(app: &mut App, command: &str) -> Result<()> {
    if let Err(e) = CommandHandler::execute(app, command) {
        log::debug!("Command error: {}", e);
        app.set_status(format!("Error: {}", e), Color::Red);
    }
    Ok(())
}
