use serde::{Deserialize, Serialize};

/// A track contributed by one source, as delivered by the upstream catalog.
///
/// `id` is the identity key: unique within and across sources, and the only
/// field the blending engine ever compares. Everything else is display
/// payload carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Catalog track ID (e.g., the Spotify track ID)
    pub id: String,
    /// Track title
    pub title: String,
    /// Artist name(s)
    pub artist: String,
    /// Album name (if available)
    pub album: Option<String>,
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Cover art URL (if available)
    pub cover_url: Option<String>,
    /// Playable URI (e.g., "spotify:track:...")
    pub uri: String,
    /// ISRC, the cross-catalog identifier used for audio-feature lookup
    pub isrc: Option<String>,
}
