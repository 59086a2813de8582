//! Blend orchestrator.
//!
//! Composes quota allocation, deduplicating collection, fair interleaving
//! and (optionally) similarity sequencing into the one operation callers
//! use. Everything here degrades instead of failing: empty inputs produce
//! empty playlists, and a broken feature lookup falls back to a shuffle.

use crate::blend::allocation::{allocate_quotas, collect_manifests};
use crate::blend::interleave::interleave;
use crate::blend::types::{BlendOptions, BlendResult, SequencingMode};
use crate::features::{FeatureProvider, FeatureQuery};
use crate::models::Track;
use crate::sequencing::smart_sort;
use rand::seq::SliceRandom;
use rand::Rng;

/// Engine for blending multiple users' track lists into one playlist.
///
/// Holds the audio-feature provider used by similarity mode. The engine is
/// stateless across calls; one instance can serve any number of blends.
pub struct BlendEngine<P> {
    features: P,
}

impl<P: FeatureProvider> BlendEngine<P> {
    /// Create a new blend engine backed by the given feature provider.
    pub fn new(features: P) -> Self {
        Self { features }
    }

    /// Blend tracks from multiple sources into one playlist.
    ///
    /// `sources` maps each source id to its ranked candidate list
    /// (best-first); slice order decides who receives the extra slot when
    /// `total_tracks` does not divide evenly. All randomness flows through
    /// `rng`, so a seeded generator makes the whole blend reproducible.
    ///
    /// The awaited feature lookup is the only suspend point, and only in
    /// [`SequencingMode::Similarity`]. A lookup error or empty result
    /// downgrades to a full shuffle; it never aborts the blend.
    pub async fn blend<R: Rng>(
        &self,
        sources: &[(String, Vec<Track>)],
        options: &BlendOptions,
        rng: &mut R,
    ) -> BlendResult {
        if sources.is_empty() {
            return BlendResult::default();
        }

        let quotas = allocate_quotas(options.total_tracks, sources.len());
        log::debug!(
            "Blending {} sources into {} slots (quotas: {:?})",
            sources.len(),
            options.total_tracks,
            quotas
        );

        let (manifests, contributions) = collect_manifests(sources, &quotas);

        let mut tracks = interleave(manifests, rng);
        tracks.truncate(options.total_tracks);

        if options.sequencing_mode == SequencingMode::Similarity {
            tracks = self.sequence_by_similarity(tracks, rng).await;
        }

        log::info!(
            "Blend complete: {} tracks from {} sources ({:?})",
            tracks.len(),
            sources.len(),
            options.sequencing_mode
        );

        BlendResult {
            tracks,
            contributions,
        }
    }

    /// Reorder the interleaved sequence for smooth transitions.
    ///
    /// Falls back to a plain shuffle when the provider errors out or
    /// resolves no features at all.
    async fn sequence_by_similarity<R: Rng>(&self, mut tracks: Vec<Track>, rng: &mut R) -> Vec<Track> {
        let queries: Vec<FeatureQuery> = tracks
            .iter()
            .map(|t| FeatureQuery {
                track_id: t.id.clone(),
                isrc: t.isrc.clone(),
            })
            .collect();

        let features = match self.features.fetch_features(&queries).await {
            Ok(features) => features,
            Err(e) => {
                log::warn!("Audio feature lookup failed: {e}");
                Default::default()
            }
        };

        if features.is_empty() {
            log::warn!(
                "No audio features resolved for {} tracks, falling back to shuffle",
                tracks.len()
            );
            tracks.shuffle(rng);
            return tracks;
        }

        log::debug!(
            "Smart sorting {} tracks ({} with features)",
            tracks.len(),
            features.len()
        );
        smart_sort(tracks, &features)
    }
}
