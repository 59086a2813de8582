//! The audio-feature lookup seam.
//!
//! The blending engine never talks to an analysis service directly; it asks
//! a [`FeatureProvider`] and tolerates whatever comes back. Partial coverage
//! is the normal case (not every track resolves to an analyzed recording),
//! and a failed lookup degrades to a plain shuffle upstream.

use crate::features::types::{AudioFeatures, FeatureQuery};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait FeatureProvider: Send + Sync {
    /// Resolve audio features for the given tracks.
    ///
    /// Returns a map keyed by `track_id`, covering whatever subset the
    /// provider could resolve. An empty input yields an empty map.
    async fn fetch_features(
        &self,
        queries: &[FeatureQuery],
    ) -> Result<HashMap<String, AudioFeatures>>;
}

/// Provider that resolves nothing.
///
/// For shuffle-only deployments where no analysis service is configured;
/// similarity mode will always fall back to a full shuffle.
pub struct NullFeatureProvider;

#[async_trait]
impl FeatureProvider for NullFeatureProvider {
    async fn fetch_features(
        &self,
        _queries: &[FeatureQuery],
    ) -> Result<HashMap<String, AudioFeatures>> {
        Ok(HashMap::new())
    }
}

/// Provider backed by a precomputed in-memory map.
///
/// Answers only the ids actually queried, so it behaves like a real service
/// with partial coverage. Used by tests and by embedders that batch-fetch
/// features ahead of time.
pub struct StaticFeatureProvider {
    features: HashMap<String, AudioFeatures>,
}

impl StaticFeatureProvider {
    pub fn new(features: HashMap<String, AudioFeatures>) -> Self {
        Self { features }
    }
}

#[async_trait]
impl FeatureProvider for StaticFeatureProvider {
    async fn fetch_features(
        &self,
        queries: &[FeatureQuery],
    ) -> Result<HashMap<String, AudioFeatures>> {
        Ok(queries
            .iter()
            .filter_map(|q| {
                self.features
                    .get(&q.track_id)
                    .map(|f| (q.track_id.clone(), f.clone()))
            })
            .collect())
    }
}
