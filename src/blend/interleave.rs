//! Fair interleaving of per-source manifests: chunked round robin with a
//! per-round shuffle.
//!
//! Plain round robin is deterministic and always leads with the same source.
//! Reshuffling the active-source order every round spreads "who goes first"
//! evenly across rounds, while still guaranteeing each source lands exactly
//! one track per round until it runs dry.

use crate::models::Track;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Merge per-source manifests into one sequence.
///
/// Each manifest is shuffled once up front (so a source's own ranking does
/// not leak into the playlist order), then rounds proceed: shuffle the order
/// of the still-active manifests, take one track from the front of each, and
/// drop any manifest that ran out before the next round.
pub fn interleave<R: Rng>(manifests: Vec<Vec<Track>>, rng: &mut R) -> Vec<Track> {
    let mut active: Vec<VecDeque<Track>> = manifests
        .into_iter()
        .filter(|m| !m.is_empty())
        .map(|mut m| {
            m.shuffle(rng);
            VecDeque::from(m)
        })
        .collect();

    let mut interleaved = Vec::new();

    while !active.is_empty() {
        active.shuffle(rng);

        let mut next_round = Vec::with_capacity(active.len());
        for mut manifest in active {
            if let Some(track) = manifest.pop_front() {
                interleaved.push(track);
            }
            if !manifest.is_empty() {
                next_round.push(manifest);
            }
        }
        active = next_round;
    }

    interleaved
}
