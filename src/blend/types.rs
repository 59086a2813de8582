//! Options and result types for the blending engine.

use crate::models::Track;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::blend::errors::BlendError;

/// How the interleaved sequence is ordered before it is returned.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequencingMode {
    /// Keep the randomized interleave order as-is
    #[default]
    ShuffleOnly,
    /// Reorder for smooth transitions using audio features; falls back to a
    /// full shuffle when no features can be resolved
    Similarity,
}

impl FromStr for SequencingMode {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shuffle-only" => Ok(SequencingMode::ShuffleOnly),
            "similarity" => Ok(SequencingMode::Similarity),
            other => Err(BlendError::UnknownSequencingMode(other.to_string())),
        }
    }
}

/// Options for one blend invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlendOptions {
    /// Target size of the final playlist
    pub total_tracks: usize,
    /// Ordering applied to the interleaved sequence
    pub sequencing_mode: SequencingMode,
}

impl Default for BlendOptions {
    fn default() -> Self {
        Self {
            total_tracks: 100,
            sequencing_mode: SequencingMode::default(),
        }
    }
}

/// A blended playlist plus who contributed how much.
///
/// The contribution counts always sum to `tracks.len()`, and no two tracks
/// share an id, even when sources had overlapping candidates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlendResult {
    /// Final ordered track sequence, at most `total_tracks` long
    pub tracks: Vec<Track>,
    /// Tracks actually accepted from each source, keyed by source id
    pub contributions: HashMap<String, usize>,
}
