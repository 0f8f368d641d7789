use super::*;
use crate::embed::BLANK_SOURCE;

/// Player that records every source it receives
#[derive(Default)]
struct RecordingPlayer {
    sources: Vec<PlayerSource>,
}

impl PlayerSink for RecordingPlayer {
    fn set_source(&mut self, source: PlayerSource) {
        self.sources.push(source);
    }
}

impl RecordingPlayer {
    fn current(&self) -> Option<&str> {
        self.sources.last().map(PlayerSource::as_str)
    }
}

fn board(count: usize) -> Vec<VideoButton> {
    (0..count)
        .map(|i| VideoButton::new(format!("Video {}", i + 1), Some(format!("vid{}", i))))
        .collect()
}

fn controller(count: usize) -> SelectionController<RecordingPlayer> {
    SelectionController::initialize(board(count), Some(RecordingPlayer::default()), EmbedConfig::default())
        .expect("board with buttons and a player")
}

fn embed(id: &str) -> String {
    EmbedConfig::default().embed_url(id)
}

fn active_count(c: &SelectionController<RecordingPlayer>) -> usize {
    c.markings().filter(|m| m.active).count()
}

#[test]
fn test_initialize_activates_first_button() {
    let c = controller(3);
    assert_eq!(c.active(), Some(0));
    assert_eq!(c.player().sources.len(), 1);
    assert_eq!(c.player().current(), Some(embed("vid0").as_str()));
    assert_eq!(c.focus(), InputFocus::Nowhere);
    assert_eq!(c.pressed_attr(0), "true");
    assert_eq!(c.pressed_attr(1), "false");
}

#[test]
fn test_initialize_without_buttons_or_player() {
    assert!(
        SelectionController::initialize(Vec::new(), Some(RecordingPlayer::default()), EmbedConfig::default())
            .is_none()
    );
    assert!(SelectionController::<RecordingPlayer>::initialize(board(3), None, EmbedConfig::default()).is_none());
}

#[test]
fn test_initialize_first_button_without_video() {
    let mut buttons = board(2);
    buttons[0].video = None;
    let c = SelectionController::initialize(buttons, Some(RecordingPlayer::default()), EmbedConfig::default())
        .unwrap();
    assert_eq!(c.active(), Some(0));
    assert_eq!(c.player().current(), Some(BLANK_SOURCE));
}

#[test]
fn test_click_sequence_keeps_single_active() {
    let mut c = controller(5);
    for index in [3, 1, 4, 0, 2] {
        assert_eq!(c.click(index), ClickOutcome::Activated(index));
        assert_eq!(active_count(&c), 1);
        assert_eq!(c.active(), Some(index));
        assert_eq!(c.focus(), InputFocus::Button(index));
        assert_eq!(c.player().current(), Some(embed(&format!("vid{}", index)).as_str()));
        for marking in c.markings() {
            let expected = if marking.index == index { "true" } else { "false" };
            assert_eq!(marking.pressed_attr(), expected);
        }
    }
}

#[test]
fn test_click_active_button_is_noop() {
    let mut c = controller(3);
    c.click(1);
    c.set_focus(InputFocus::Nowhere);
    let loads = c.player().sources.len();

    assert_eq!(c.click(1), ClickOutcome::AlreadyActive(1));
    assert_eq!(c.active(), Some(1));
    assert_eq!(c.player().sources.len(), loads);
    assert_eq!(c.focus(), InputFocus::Nowhere);
}

#[test]
fn test_click_out_of_range() {
    let mut c = controller(2);
    assert_eq!(c.click(2), ClickOutcome::OutOfRange(2));
    assert_eq!(c.active(), Some(0));
    assert_eq!(c.player().sources.len(), 1);
}

#[test]
fn test_click_button_without_video_blanks_player() {
    let mut buttons = board(2);
    buttons[1].video = Some(String::new());
    let mut c = SelectionController::initialize(buttons, Some(RecordingPlayer::default()), EmbedConfig::default())
        .unwrap();
    c.click(1);
    assert_eq!(c.player().current(), Some("about:blank"));
}

#[test]
fn test_reserved_identifier_is_encoded() {
    let buttons = vec![VideoButton::new("Spaced", Some("a b".to_string()))];
    let c = SelectionController::initialize(buttons, Some(RecordingPlayer::default()), EmbedConfig::default())
        .unwrap();
    let source = c.player().current().unwrap();
    assert!(source.contains("a%20b"));
    assert!(!source.contains(' '));
}

#[test]
fn test_load_source_directly() {
    let mut c = controller(1);
    c.load_source(Some("abc123"));
    assert_eq!(
        c.player().current(),
        Some("https://www.youtube.com/embed/abc123?autoplay=1&rel=0&modestbranding=1")
    );
    c.load_source(None);
    assert_eq!(c.player().current(), Some("about:blank"));
}

#[test]
fn test_activate_ignores_out_of_range() {
    let mut c = controller(2);
    c.activate(7);
    assert_eq!(c.active(), Some(0));
    c.activate(1);
    assert_eq!(c.active(), Some(1));
    assert_eq!(c.active_button().map(|b| b.label.as_str()), Some("Video 2"));
}

#[test]
fn test_key_one_matches_click() {
    let mut by_key = controller(3);
    let mut by_click = controller(3);
    by_key.click(2);
    by_click.click(2);

    assert_eq!(by_key.key_press('1'), KeyOutcome::Clicked(ClickOutcome::Activated(0)));
    by_click.click(0);

    assert_eq!(by_key.active(), by_click.active());
    assert_eq!(by_key.focus(), by_click.focus());
    assert_eq!(by_key.focus(), InputFocus::Button(0));
    assert_eq!(by_key.player().sources, by_click.player().sources);
}

#[test]
fn test_key_on_active_button_is_noop() {
    let mut c = controller(3);
    assert_eq!(c.key_press('1'), KeyOutcome::Clicked(ClickOutcome::AlreadyActive(0)));
    assert_eq!(c.player().sources.len(), 1);
}

#[test]
fn test_zero_and_letter_keys() {
    let mut c = controller(12);
    assert_eq!(c.key_press('0'), KeyOutcome::Clicked(ClickOutcome::Activated(9)));
    assert_eq!(c.key_press('a'), KeyOutcome::Clicked(ClickOutcome::Activated(10)));
    assert_eq!(c.key_press('B'), KeyOutcome::Clicked(ClickOutcome::Activated(11)));
}

#[test]
fn test_out_of_range_key() {
    let mut c = controller(3);
    assert_eq!(c.key_press('c'), KeyOutcome::OutOfRange(12));
    assert_eq!(c.key_press('4'), KeyOutcome::OutOfRange(3));
    assert_eq!(c.active(), Some(0));
    assert_eq!(c.player().sources.len(), 1);
}

#[test]
fn test_unmapped_key() {
    let mut c = controller(3);
    assert_eq!(c.key_press('z'), KeyOutcome::Unmapped);
    assert_eq!(c.key_press(' '), KeyOutcome::Unmapped);
    assert_eq!(c.active(), Some(0));
}

#[test]
fn test_keys_suppressed_in_text_entry() {
    let mut c = controller(3);
    c.set_focus(InputFocus::TextEntry);
    assert_eq!(c.key_press('2'), KeyOutcome::Suppressed);
    assert_eq!(c.key_press('z'), KeyOutcome::Suppressed);
    assert_eq!(c.active(), Some(0));
    assert_eq!(c.focus(), InputFocus::TextEntry);
    assert_eq!(c.player().sources.len(), 1);
}

#[test]
fn test_focus_navigation_wraps() {
    let mut c = controller(3);
    c.click(1);
    c.set_focus(InputFocus::Nowhere);

    c.focus_next();
    assert_eq!(c.focus(), InputFocus::Button(1));
    c.focus_next();
    c.focus_next();
    assert_eq!(c.focus(), InputFocus::Button(0));
    c.focus_prev();
    assert_eq!(c.focus(), InputFocus::Button(2));

    // Moving focus never activates
    assert_eq!(c.active(), Some(1));
}

#[test]
fn test_press_focused() {
    let mut c = controller(3);
    assert_eq!(c.press_focused(), None);

    c.set_focus(InputFocus::Button(2));
    assert_eq!(c.press_focused(), Some(ClickOutcome::Activated(2)));
    assert_eq!(c.press_focused(), Some(ClickOutcome::AlreadyActive(2)));
}

#[test]
fn test_set_focus_out_of_range() {
    let mut c = controller(2);
    c.set_focus(InputFocus::Button(5));
    assert_eq!(c.focus(), InputFocus::Nowhere);
}
