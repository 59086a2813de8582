//! Similarity-based track resequencing.
//!
//! A weighted audio-feature distance plus a greedy nearest-neighbor walk
//! that orders tracks so adjacent ones are perceptually close.

pub mod distance;
pub mod smart_sort;

pub use distance::track_distance;
pub use smart_sort::smart_sort;
