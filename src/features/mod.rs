//! Audio features and the provider trait the engine consumes.
//!
//! Actually fetching features from an analysis service (HTTP, batching, rate
//! limits) lives outside this crate; implement [`FeatureProvider`] over
//! whatever client you have.

pub mod provider;
pub mod types;

pub use provider::{FeatureProvider, NullFeatureProvider, StaticFeatureProvider};
pub use types::{AudioFeatures, FeatureQuery};
