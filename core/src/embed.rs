use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Source written to the player when there is nothing to show
pub const BLANK_SOURCE: &str = "about:blank";

/// Embed host used when neither the manifest nor the command line names one
pub const DEFAULT_EMBED_HOST: &str = "www.youtube.com";

/// Query string appended to every embed URL
const EMBED_QUERY: &str = "autoplay=1&rel=0&modestbranding=1";

/// Characters left untouched when encoding a URI component
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string so it can sit in a single URL path segment
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// What the player element is currently pointed at
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlayerSource {
    /// Empty document, playback stopped
    #[default]
    Blank,
    /// Provider embed URL
    Embed(String),
}

impl PlayerSource {
    pub fn as_str(&self) -> &str {
        match self {
            PlayerSource::Blank => BLANK_SOURCE,
            PlayerSource::Embed(url) => url,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, PlayerSource::Blank)
    }
}

impl fmt::Display for PlayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for building embed URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Provider host, without scheme
    pub host: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_EMBED_HOST.to_string(),
        }
    }
}

impl EmbedConfig {
    pub fn with_host(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    /// Build the embed URL for a video identifier
    pub fn embed_url(&self, video_id: &str) -> String {
        format!(
            "https://{}/embed/{}?{}",
            self.host,
            encode_component(video_id),
            EMBED_QUERY
        )
    }

    /// Source for an optional identifier; missing or empty ids give the blank sentinel
    pub fn source_for(&self, video_id: Option<&str>) -> PlayerSource {
        match video_id {
            Some(id) if !id.is_empty() => PlayerSource::Embed(self.embed_url(id)),
            _ => PlayerSource::Blank,
        }
    }
}
