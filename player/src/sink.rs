use std::time::{Duration, Instant};

use vidboard_core::{PlayerSink, PlayerSource};

/// Player pane shown in the terminal. Holds whatever source the board last wrote.
pub struct TerminalPlayer {
    /// Element id from the manifest
    pub element_id: String,
    /// Current source
    pub source: PlayerSource,
    /// Number of sources written since start-up
    pub loads: usize,
    /// When the current source was written
    pub loaded_at: Option<Instant>,
}

impl TerminalPlayer {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            source: PlayerSource::Blank,
            loads: 0,
            loaded_at: None,
        }
    }

    /// Time since the current source was written
    pub fn loaded_for(&self) -> Option<Duration> {
        self.loaded_at.map(|at| at.elapsed())
    }
}

impl PlayerSink for TerminalPlayer {
    fn set_source(&mut self, source: PlayerSource) {
        log::info!("Player #{} source -> {}", self.element_id, source);
        self.source = source;
        self.loads += 1;
        self.loaded_at = Some(Instant::now());
    }
}
