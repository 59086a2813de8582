//! Typed errors for the blending engine.
//!
//! Uses `thiserror` for ergonomic error definitions and implements
//! `Serialize` so errors can cross an IPC or HTTP boundary cleanly.
//!
//! The engine itself degrades rather than fails (empty inputs, missing
//! features and failed lookups all produce valid results), so the only
//! errors here are configuration errors raised before a blend starts.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while configuring a blend.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum BlendError {
    /// The sequencing mode string is not one of the supported modes
    #[error("Unknown sequencing mode '{0}' (expected 'shuffle-only' or 'similarity')")]
    UnknownSequencingMode(String),
}
