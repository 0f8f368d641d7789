use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// One board button: shortcut key, label and pressed state
pub struct VideoButtonWidget<'a> {
    label: &'a str,
    shortcut: Option<char>,
    active: bool,
    pressed: &'static str,
    focused: bool,
    has_video: bool,
}

impl<'a> VideoButtonWidget<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            shortcut: None,
            active: false,
            pressed: "false",
            focused: false,
            has_video: true,
        }
    }

    pub fn shortcut(mut self, key: Option<char>) -> Self {
        self.shortcut = key;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Pressed attribute text, `"true"` or `"false"`
    pub fn pressed(mut self, pressed: &'static str) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn has_video(mut self, has_video: bool) -> Self {
        self.has_video = has_video;
        self
    }
}

impl<'a> Widget for VideoButtonWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.active {
            Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)
        } else if !self.has_video {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        } else {
            Style::default().fg(Color::White).bg(Color::Black)
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.active {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::Gray)
        };

        let key_hint = match self.shortcut {
            Some(key) => format!(" {} ", key),
            None => "   ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.focused { BorderType::Thick } else { BorderType::Plain })
            .border_style(border_style)
            .title_bottom(Line::from(format!(" pressed={} ", self.pressed)).right_aligned())
            .style(style);

        let content = Paragraph::new(Line::from(vec![
            Span::styled(key_hint, style.add_modifier(Modifier::REVERSED)),
            Span::styled(format!(" {}", self.label), style),
        ]))
        .alignment(Alignment::Left)
        .block(block);

        content.render(area, buf);
    }
}

/// Display a status message with fade effect
pub struct StatusMessage<'a> {
    message: &'a str,
    color: Color,
    age: Duration,
    max_age: Duration,
}

impl<'a> StatusMessage<'a> {
    pub fn new(message: &'a str, color: Color, age: Duration) -> Self {
        Self {
            message,
            color,
            age,
            max_age: Duration::from_secs(3),  // Default fade after 3 seconds
        }
    }

    pub fn max_age(mut self, duration: Duration) -> Self {
        self.max_age = duration;
        self
    }
}

impl<'a> Widget for StatusMessage<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.age > self.max_age {
            return;
        }
        let fade_factor = 1.0 - (self.age.as_secs_f32() / self.max_age.as_secs_f32());

        let color = match (self.color, fade_factor) {
            (Color::Red, _) => Color::Red,  // Errors always stay red
            (_, f) if f > 0.5 => self.color,
            _ => Color::DarkGray,
        };

        let text = Paragraph::new(Text::from(self.message))
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(Color::Black)),
            );

        let message_width = message_box_width(self.message);
        let message_area = Rect {
            x: area.x + (area.width.saturating_sub(message_width)) / 2,
            y: area.y,
            width: message_width.min(area.width),
            height: area.height.min(3),
        };

        Clear.render(message_area, buf);
        text.render(message_area, buf);
    }
}

/// Width of a bordered box around `message`, saturating for very long text
pub fn message_box_width(message: &str) -> u16 {
    u16::try_from(message.width()).unwrap_or(u16::MAX).saturating_add(4)
}

/// Keyboard help
pub struct HelpOverlay {
    button_count: usize,
}

impl HelpOverlay {
    pub fn new(button_count: usize) -> Self {
        Self { button_count }
    }
}

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = |k: &'static str, text: &'static str| {
            Line::from(vec![
                Span::styled(k, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(text),
            ])
        };

        let mut help_text = vec![
            Line::from(vec![
                Span::styled("Keyboard Controls", Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
            ]),
            Line::from(""),
            key("1-9, 0", " - Select buttons 1 to 10"),
            key("a-t", " - Select buttons 11 to 30"),
            key("Tab/→/↓", " - Focus next button"),
            key("Shift+Tab/←/↑", " - Focus previous button"),
            key("Enter/Space", " - Select focused button"),
            key("Mouse click", " - Select button"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Commands", Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
            ]),
            key(":select N", " - Select button N"),
            key(":focus N", " - Focus button N"),
            key(":help", " - Show this help"),
            key(":quit", " - Exit"),
            Line::from(""),
            key("F1", " - Toggle help"),
            key("Esc", " - Close help / cancel command"),
            key("Ctrl+Q", " - Quit"),
        ];

        if self.button_count > vidboard_core::MAX_SHORTCUTS {
            help_text.push(Line::from(""));
            help_text.push(Line::from(Span::styled(
                format!(
                    "Buttons past {} have no shortcut key; use focus or the mouse.",
                    vidboard_core::MAX_SHORTCUTS
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let help = Paragraph::new(Text::from(help_text))
            .block(Block::default().title("Help").borders(Borders::ALL))
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        Clear.render(area, buf);
        help.render(area, buf);
    }
}
