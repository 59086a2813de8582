//! The track-blending engine.
//!
//! Takes each user's ranked candidate list, gives every user an even share
//! of the playlist, removes cross-user duplicates, and interleaves the
//! shares with a per-round shuffle so no user dominates the front of the
//! playlist.

pub mod allocation;
pub mod engine;
pub mod errors;
pub mod interleave;
pub mod types;

pub use engine::BlendEngine;
pub use errors::BlendError;
pub use types::{BlendOptions, BlendResult, SequencingMode};
