//! Weighted dissimilarity between two tracks' audio features.
//!
//! Lower distance = more similar tracks. Symmetric, but it does not satisfy
//! the triangle inequality, so it's a heuristic score rather than a true
//! metric. That's fine for greedy sequencing.

use crate::features::AudioFeatures;

/// Tempo span used to normalize the BPM difference (typical range 60–200).
/// Spans wider than this push the tempo term above 1.0; deliberately left
/// unclamped so extreme tempo jumps dominate the score.
pub const TEMPO_SPAN_BPM: f64 = 140.0;

// Term weights. Tuned by ear, not derived: tempo and key matter most for
// smooth transitions.
const TEMPO_WEIGHT: f64 = 0.30;
const KEY_WEIGHT: f64 = 0.25;
const MODE_WEIGHT: f64 = 0.10;
const ENERGY_WEIGHT: f64 = 0.15;
const VALENCE_WEIGHT: f64 = 0.10;
const DANCEABILITY_WEIGHT: f64 = 0.10;

/// Mismatched mode (major vs minor) contributes a flat half-unit.
const MODE_MISMATCH: f64 = 0.5;

/// Distance between two tracks based on their audio features.
pub fn track_distance(a: &AudioFeatures, b: &AudioFeatures) -> f64 {
    let tempo_diff = (a.tempo - b.tempo).abs() / TEMPO_SPAN_BPM;

    // Pitch classes live on a 12-step ring (circle of fifths adjacency);
    // the shortest way around is at most 6 steps.
    let key_steps = (i32::from(a.key) - i32::from(b.key)).abs();
    let key_diff = f64::from(key_steps.min(12 - key_steps)) / 6.0;

    let mode_diff = if a.mode != b.mode { MODE_MISMATCH } else { 0.0 };

    // Remaining features are already 0..=1
    let energy_diff = (a.energy - b.energy).abs();
    let valence_diff = (a.valence - b.valence).abs();
    let danceability_diff = (a.danceability - b.danceability).abs();

    tempo_diff * TEMPO_WEIGHT
        + key_diff * KEY_WEIGHT
        + mode_diff * MODE_WEIGHT
        + energy_diff * ENERGY_WEIGHT
        + valence_diff * VALENCE_WEIGHT
        + danceability_diff * DANCEABILITY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(tempo: f64, key: u8, mode: u8) -> AudioFeatures {
        AudioFeatures {
            acousticness: 0.5,
            danceability: 0.5,
            energy: 0.5,
            instrumentalness: 0.0,
            key,
            liveness: 0.1,
            loudness: -7.0,
            mode,
            speechiness: 0.05,
            tempo,
            valence: 0.5,
        }
    }

    #[test]
    fn test_identical_features_distance_zero() {
        let a = features(120.0, 5, 1);
        assert_eq!(track_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_tempo_term_isolated() {
        // 140 BPM apart with everything else equal isolates the tempo term
        let a = features(60.0, 0, 1);
        let b = features(200.0, 0, 1);
        assert!((track_distance(&a, &b) - 0.30).abs() < 1e-12);
    }

    #[test]
    fn test_tempo_term_unclamped() {
        // 280 BPM apart: the tempo term alone exceeds its weight
        let a = features(40.0, 0, 1);
        let b = features(320.0, 0, 1);
        assert!((track_distance(&a, &b) - 0.60).abs() < 1e-12);
    }

    #[test]
    fn test_key_distance_wraps_around_ring() {
        // Keys 0 and 11 are one step apart around the ring, not eleven
        let a = features(120.0, 0, 1);
        let b = features(120.0, 11, 1);
        assert!((track_distance(&a, &b) - 0.25 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_keys_max_term() {
        let a = features(120.0, 0, 1);
        let b = features(120.0, 6, 1);
        assert!((track_distance(&a, &b) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_mode_mismatch() {
        let a = features(120.0, 0, 1);
        let b = features(120.0, 0, 0);
        assert!((track_distance(&a, &b) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = features(95.0, 3, 0);
        let b = features(171.0, 9, 1);
        assert_eq!(track_distance(&a, &b), track_distance(&b, &a));
    }
}
