pub mod embed;
pub mod error;
pub mod manifest;
pub mod selection;
pub mod shortcuts;

// Re-exports
pub use embed::{BLANK_SOURCE, DEFAULT_EMBED_HOST, EmbedConfig, PlayerSource, encode_component};
pub use error::{BoardError, Result};
pub use manifest::{BoardManifest, PLAYER_ELEMENT_ID, default_manifest_path};
pub use selection::{
    ButtonMarking, ClickOutcome, InputFocus, KeyOutcome, PlayerSink, SelectionController, VideoButton,
};
pub use shortcuts::{MAX_SHORTCUTS, shortcut_index, shortcut_key};

/// Resolve the embed settings for a board.
///
/// A host given on the command line wins over the manifest's provider.
pub fn resolve_embed_config(manifest: &BoardManifest, host_override: Option<&str>) -> EmbedConfig {
    match host_override.or(manifest.provider.as_deref()) {
        Some(host) if !host.is_empty() => EmbedConfig::with_host(host),
        _ => EmbedConfig::default(),
    }
}

/// Build a controller for a manifest, using `make_player` for the player element.
///
/// Returns `None` when the manifest has no buttons or no player element.
pub fn bind_board<P, F>(manifest: &BoardManifest, embed: EmbedConfig, make_player: F) -> Option<SelectionController<P>>
where
    P: PlayerSink,
    F: FnOnce(&str) -> P,
{
    let player = manifest
        .player
        .as_ref()
        .filter(|_| manifest.has_player())
        .map(|element| make_player(&element.id));
    SelectionController::initialize(manifest.video_buttons(), player, embed)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullPlayer(String);

    impl PlayerSink for NullPlayer {
        fn set_source(&mut self, source: PlayerSource) {
            self.0 = source.to_string();
        }
    }

    #[test]
    fn test_host_resolution_order() {
        let mut manifest = BoardManifest::default();
        assert_eq!(resolve_embed_config(&manifest, None), EmbedConfig::default());

        manifest.provider = Some("www.youtube-nocookie.com".to_string());
        assert_eq!(resolve_embed_config(&manifest, None).host, "www.youtube-nocookie.com");
        assert_eq!(resolve_embed_config(&manifest, Some("example.test")).host, "example.test");
    }

    #[test]
    fn test_bind_board() {
        let manifest = BoardManifest::from_toml_str(
            "[player]\nid = \"player\"\n\n[[button]]\nlabel = \"One\"\nvideo = \"abc123\"\n",
        )
        .unwrap();
        let board = bind_board(&manifest, EmbedConfig::default(), |_| NullPlayer(String::new())).unwrap();
        assert_eq!(
            board.player().0,
            "https://www.youtube.com/embed/abc123?autoplay=1&rel=0&modestbranding=1"
        );
    }

    #[test]
    fn test_bind_board_without_player() {
        let manifest = BoardManifest::from_toml_str("[[button]]\nlabel = \"One\"\nvideo = \"abc123\"\n").unwrap();
        assert!(bind_board(&manifest, EmbedConfig::default(), |_| NullPlayer(String::new())).is_none());
    }
}
