use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, style::Color};
use vidboard_core::{
    BoardManifest, ClickOutcome, InputFocus, KeyOutcome, SelectionController, bind_board,
    resolve_embed_config,
};

use crate::commands;
use crate::events::event_utils;
use crate::sink::TerminalPlayer;

/// How long a status message stays on screen
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

// App state
pub struct App {
    /// Button board; `None` when the manifest has no buttons or no player
    pub board: Option<SelectionController<TerminalPlayer>>,
    /// Heading for the board view
    pub title: String,
    /// Status message to display
    pub status_message: Option<(String, Instant, Color)>,
    /// Whether the app should exit
    pub should_quit: bool,
    /// Help dialog visibility
    pub show_help: bool,
    /// Whether command mode is active
    pub command_mode: bool,
    /// Command buffer for command mode
    pub command_buffer: String,
    /// Focus to restore when command mode closes
    focus_before_command: InputFocus,
    /// Screen area of each button from the last draw, for mouse hits
    pub button_areas: Vec<Rect>,
}

impl App {
    pub fn new(board: Option<SelectionController<TerminalPlayer>>, title: impl Into<String>) -> Self {
        Self {
            board,
            title: title.into(),
            status_message: None,
            should_quit: false,
            show_help: false,
            command_mode: false,
            command_buffer: String::new(),
            focus_before_command: InputFocus::Nowhere,
            button_areas: Vec::new(),
        }
    }

    /// Build the app from a loaded manifest
    pub fn from_manifest(manifest: &BoardManifest, host_override: Option<&str>) -> Self {
        let embed = resolve_embed_config(manifest, host_override);
        let board = bind_board(manifest, embed, |id| TerminalPlayer::new(id));
        if board.is_none() {
            log::info!("Board disabled: manifest has no buttons or no player element");
        }
        let title = manifest.title.clone().unwrap_or_else(|| "Video Board".to_string());
        Self::new(board, title)
    }

    /// Set a status message with a color
    pub fn set_status(&mut self, message: impl Into<String>, color: Color) {
        let message_string = message.into();
        log::debug!("Status message: {} ({})", message_string, color);
        self.status_message = Some((message_string, Instant::now(), color));
    }

    pub fn is_command_mode(&self) -> bool {
        self.command_mode
    }

    pub fn get_command_buffer(&self) -> &str {
        &self.command_buffer
    }

    /// Open the command prompt; the prompt is a text field so shortcuts stop firing
    pub fn enter_command_mode(&mut self) {
        self.command_mode = true;
        self.command_buffer.clear();
        if let Some(board) = &mut self.board {
            self.focus_before_command = board.focus();
            board.set_focus(InputFocus::TextEntry);
        }
    }

    pub fn exit_command_mode(&mut self) {
        self.command_mode = false;
        self.command_buffer.clear();
        if let Some(board) = &mut self.board {
            board.set_focus(self.focus_before_command);
        }
    }

    /// Handle key event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if self.is_command_mode() {
            match key.code {
                KeyCode::Char(c) => self.command_buffer.push(c),
                KeyCode::Backspace => {
                    self.command_buffer.pop();
                }
                KeyCode::Esc => self.exit_command_mode(),
                KeyCode::Enter => {
                    let cmd = self.command_buffer.clone();
                    self.exit_command_mode();
                    log::debug!("Executing command: {}", cmd);
                    commands::handle_command(self, &cmd)?;
                }
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => {
                self.show_help = !self.show_help;
                return Ok(());
            }
            KeyCode::Esc => {
                self.show_help = false;
                return Ok(());
            }
            KeyCode::Char(':') => {
                self.enter_command_mode();
                return Ok(());
            }
            _ => {}
        }

        // The help overlay covers the board
        if self.show_help {
            return Ok(());
        }

        let Some(board) = &mut self.board else {
            return Ok(());
        };

        if event_utils::is_focus_navigation(&key) {
            match key.code {
                KeyCode::Tab | KeyCode::Right | KeyCode::Down => board.focus_next(),
                _ => board.focus_prev(),
            }
        } else if event_utils::is_press_key(&key) {
            if let Some(outcome) = board.press_focused() {
                self.report_click(outcome);
            }
        } else if let KeyCode::Char(c) = key.code {
            if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                return Ok(());
            }
            match board.key_press(c) {
                KeyOutcome::Clicked(outcome) => self.report_click(outcome),
                outcome => log::debug!("Key {:?}: {:?}", c, outcome),
            }
        }

        Ok(())
    }

    /// Handle mouse event; a left click on a button clicks it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        // Any click dismisses the help overlay without reaching the board
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }
        let hit = self
            .button_areas
            .iter()
            .position(|area| contains(area, mouse.column, mouse.row));
        let Some(index) = hit else {
            return Ok(());
        };
        // Clicking a button leaves the prompt, like a click blurring a text field
        if self.is_command_mode() {
            self.exit_command_mode();
        }
        if let Some(board) = &mut self.board {
            let outcome = board.click(index);
            self.report_click(outcome);
        }
        Ok(())
    }

    /// Click a button by position, as a mouse click would
    pub fn select(&mut self, index: usize) -> Result<()> {
        let Some(board) = &mut self.board else {
            return Err(anyhow::anyhow!("No buttons on this board"));
        };
        match board.click(index) {
            ClickOutcome::OutOfRange(_) => Err(anyhow::anyhow!(
                "No button {} (board has {})",
                index + 1,
                board.len()
            )),
            outcome => {
                self.report_click(outcome);
                Ok(())
            }
        }
    }

    fn report_click(&mut self, outcome: ClickOutcome) {
        let ClickOutcome::Activated(index) = outcome else {
            log::debug!("Click: {:?}", outcome);
            return;
        };
        let Some(board) = &self.board else {
            return;
        };
        let label = board.buttons()[index].label.clone();
        if board.player().source.is_blank() {
            self.set_status(format!("No video for {}", label), Color::Yellow);
        } else {
            self.set_status(format!("Playing: {}", label), Color::Green);
        }
    }

    /// Periodic housekeeping
    pub fn update(&mut self) -> Result<()> {
        // Clear status message after timeout
        if let Some((_, time, _)) = &self.status_message {
            if time.elapsed() > STATUS_TIMEOUT {
                self.status_message = None;
            }
        }
        Ok(())
    }
}

fn contains(area: &Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}
