//! trackblend — collaborative playlist blending.
//!
//! Blends multiple users' ranked track lists into one playlist:
//! 1. Every user gets an even share of the requested playlist size
//!    (remainder slots spread from the front of the user list).
//! 2. Each share is filled from the user's ranked candidates, skipping
//!    tracks another user already contributed.
//! 3. Shares are interleaved round-robin, reshuffling the user order every
//!    round so no user systematically leads.
//! 4. Optionally, the result is reordered by audio-feature similarity
//!    (greedy nearest-neighbor walk) for smooth transitions.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so seeded
//! generators give fully reproducible blends. Audio features come from a
//! [`features::FeatureProvider`]; lookups that fail or resolve nothing
//! degrade to a plain shuffle instead of erroring.

pub mod blend;
pub mod features;
pub mod models;
pub mod sequencing;

pub use blend::{BlendEngine, BlendError, BlendOptions, BlendResult, SequencingMode};
pub use features::{AudioFeatures, FeatureProvider, FeatureQuery};
pub use models::Track;
