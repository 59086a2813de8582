//! Data types for audio-feature lookup.

use serde::{Deserialize, Serialize};

/// Audio analysis features for one track.
///
/// Field names and ranges follow the upstream audio-analysis API: all
/// continuous fields are normalized to 0..=1 except `tempo` (BPM, unbounded
/// positive) and `loudness` (dB). `key` is a pitch class (0–11), `mode` is
/// 1 for major, 0 for minor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub key: u8,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: u8,
    pub speechiness: f64,
    pub tempo: f64,
    pub valence: f64,
}

/// One track to look features up for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureQuery {
    /// Identity key the result map will be keyed by
    pub track_id: String,
    /// Cross-catalog identifier, if the source had one.
    /// Providers skip queries without it.
    pub isrc: Option<String>,
}
