use log::debug;

use crate::embed::{EmbedConfig, PlayerSource};
use crate::shortcuts::shortcut_index;

#[cfg(test)]
mod tests;

/// A selectable button bound to one video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoButton {
    /// Text shown on the button
    pub label: String,
    /// Opaque video identifier; `None` or empty means nothing to play
    pub video: Option<String>,
}

impl VideoButton {
    pub fn new(label: impl Into<String>, video: Option<String>) -> Self {
        Self {
            label: label.into(),
            video,
        }
    }
}

/// Anything that can display an embed source
pub trait PlayerSink {
    fn set_source(&mut self, source: PlayerSource);
}

/// Where keyboard input currently goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    Nowhere,
    /// A board button
    Button(usize),
    /// A free-form text field; shortcuts must not fire
    TextEntry,
}

/// Result of clicking a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The button became active and its video was loaded
    Activated(usize),
    /// The button was already active; nothing changed
    AlreadyActive(usize),
    /// No button at that position
    OutOfRange(usize),
}

/// Result of a key press routed through the shortcut table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus is in a text field, the key was left alone
    Suppressed,
    /// The key has no shortcut
    Unmapped,
    /// The shortcut points past the last button
    OutOfRange(usize),
    /// The shortcut clicked a button
    Clicked(ClickOutcome),
}

/// Derived marking for one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMarking {
    pub index: usize,
    pub active: bool,
    pub focused: bool,
}

impl ButtonMarking {
    /// Value of the pressed accessibility attribute
    pub fn pressed_attr(&self) -> &'static str {
        pressed_attr(self.active)
    }
}

fn pressed_attr(active: bool) -> &'static str {
    if active { "true" } else { "false" }
}

/// Owns the buttons, the player and the single active index.
///
/// Button markings are derived from `active`; nothing else records which
/// button is selected.
pub struct SelectionController<P: PlayerSink> {
    buttons: Vec<VideoButton>,
    player: P,
    embed: EmbedConfig,
    active: Option<usize>,
    focus: InputFocus,
}

impl<P: PlayerSink> SelectionController<P> {
    /// Bind buttons to a player and activate the first button.
    ///
    /// Returns `None` when there are no buttons or no player.
    pub fn initialize(buttons: Vec<VideoButton>, player: Option<P>, embed: EmbedConfig) -> Option<Self> {
        let Some(player) = player else {
            debug!("No player element, board disabled");
            return None;
        };
        if buttons.is_empty() {
            debug!("No buttons, board disabled");
            return None;
        }

        let mut controller = Self {
            buttons,
            player,
            embed,
            active: None,
            focus: InputFocus::Nowhere,
        };
        controller.activate(0);
        let first = controller.buttons[0].video.clone();
        controller.load_source(first.as_deref());
        Some(controller)
    }

    /// Mark `index` as the only active button
    pub fn activate(&mut self, index: usize) {
        if index >= self.buttons.len() {
            return;
        }
        debug!("Activating button {} ({})", index, self.buttons[index].label);
        self.active = Some(index);
    }

    /// Point the player at the video, or blank it when there is none
    pub fn load_source(&mut self, video_id: Option<&str>) {
        let source = self.embed.source_for(video_id);
        debug!("Loading player source {}", source);
        self.player.set_source(source);
    }

    /// Click the button at `index`
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        if index >= self.buttons.len() {
            return ClickOutcome::OutOfRange(index);
        }
        if self.active == Some(index) {
            return ClickOutcome::AlreadyActive(index);
        }

        self.activate(index);
        let video = self.buttons[index].video.clone();
        self.load_source(video.as_deref());
        self.focus = InputFocus::Button(index);
        ClickOutcome::Activated(index)
    }

    /// Handle a pressed key through the shortcut table
    pub fn key_press(&mut self, key: char) -> KeyOutcome {
        if self.focus == InputFocus::TextEntry {
            return KeyOutcome::Suppressed;
        }
        let Some(index) = shortcut_index(key) else {
            return KeyOutcome::Unmapped;
        };
        if index >= self.buttons.len() {
            return KeyOutcome::OutOfRange(index);
        }
        KeyOutcome::Clicked(self.click(index))
    }

    /// Click whichever button holds focus
    pub fn press_focused(&mut self) -> Option<ClickOutcome> {
        match self.focus {
            InputFocus::Button(index) => Some(self.click(index)),
            _ => None,
        }
    }

    /// Move focus to the next button, wrapping at the end
    pub fn focus_next(&mut self) {
        let len = self.buttons.len();
        self.focus = match self.focus {
            InputFocus::Button(index) => InputFocus::Button((index + 1) % len),
            _ => InputFocus::Button(self.active.unwrap_or(0)),
        };
    }

    /// Move focus to the previous button, wrapping at the start
    pub fn focus_prev(&mut self) {
        let len = self.buttons.len();
        self.focus = match self.focus {
            InputFocus::Button(index) => InputFocus::Button((index + len - 1) % len),
            _ => InputFocus::Button(self.active.unwrap_or(0)),
        };
    }

    pub fn focus(&self) -> InputFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: InputFocus) {
        self.focus = match focus {
            InputFocus::Button(index) if index >= self.buttons.len() => InputFocus::Nowhere,
            other => other,
        };
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_button(&self) -> Option<&VideoButton> {
        self.active.and_then(|index| self.buttons.get(index))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn pressed_attr(&self, index: usize) -> &'static str {
        pressed_attr(self.is_active(index))
    }

    /// Markings for every button, in document order
    pub fn markings(&self) -> impl Iterator<Item = ButtonMarking> + '_ {
        (0..self.buttons.len()).map(move |index| ButtonMarking {
            index,
            active: self.is_active(index),
            focused: self.focus == InputFocus::Button(index),
        })
    }

    pub fn buttons(&self) -> &[VideoButton] {
        &self.buttons
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn embed(&self) -> &EmbedConfig {
        &self.embed
    }
}
