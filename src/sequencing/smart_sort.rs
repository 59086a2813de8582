//! Greedy nearest-neighbor track ordering ("smart sort").
//!
//! Reorders a playlist so adjacent tracks are perceptually close, creating a
//! DJ-like flow. Greedy with no backtracking: the result is a smooth-ish
//! walk, not an optimal tour. O(n²) in the number of featured tracks, which
//! is bounded by the playlist size.

use crate::features::AudioFeatures;
use crate::models::Track;
use crate::sequencing::distance::track_distance;
use std::collections::HashMap;

/// Order tracks for smooth transitions.
///
/// Tracks without an entry in `features` can't be placed on the walk; they
/// keep their relative order and go to the end. With one or zero featured
/// tracks there is nothing to reorder and the input comes back unchanged
/// (featured first, then unfeatured).
///
/// The walk starts from the highest-energy featured track (a good playlist
/// opener) and repeatedly appends the remaining track nearest to the current
/// tail. Ties go to the earlier track in the original order.
pub fn smart_sort(tracks: Vec<Track>, features: &HashMap<String, AudioFeatures>) -> Vec<Track> {
    let (featured, unfeatured): (Vec<Track>, Vec<Track>) = tracks
        .into_iter()
        .partition(|t| features.contains_key(&t.id));

    if featured.len() <= 1 {
        let mut out = featured;
        out.extend(unfeatured);
        return out;
    }

    // Seed: max energy, first encountered wins ties
    let mut seed_idx = 0;
    for (i, track) in featured.iter().enumerate().skip(1) {
        if features[&track.id].energy > features[&featured[seed_idx].id].energy {
            seed_idx = i;
        }
    }

    let mut remaining = featured;
    let mut sorted = Vec::with_capacity(remaining.len());
    let seed = remaining.remove(seed_idx);
    let mut tail = &features[&seed.id];
    sorted.push(seed);

    while !remaining.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_distance = f64::INFINITY;
        for (i, track) in remaining.iter().enumerate() {
            let distance = track_distance(tail, &features[&track.id]);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_idx = i;
            }
        }

        // Vec::remove keeps the rest in order, preserving tie-break stability
        let next = remaining.remove(nearest_idx);
        tail = &features[&next.id];
        sorted.push(next);
    }

    sorted.extend(unfeatured);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Test Artist".to_string(),
            album: None,
            duration_ms: 200_000,
            cover_url: None,
            uri: format!("spotify:track:{id}"),
            isrc: None,
        }
    }

    fn features(tempo: f64, energy: f64) -> AudioFeatures {
        AudioFeatures {
            acousticness: 0.5,
            danceability: 0.5,
            energy,
            instrumentalness: 0.0,
            key: 0,
            liveness: 0.1,
            loudness: -7.0,
            mode: 1,
            speechiness: 0.05,
            tempo,
            valence: 0.5,
        }
    }

    fn ids(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let sorted = smart_sort(Vec::new(), &HashMap::new());
        assert!(sorted.is_empty());
    }

    #[test]
    fn test_no_features_returns_input_order() {
        let tracks = vec![track("a"), track("b"), track("c")];
        let sorted = smart_sort(tracks, &HashMap::new());
        assert_eq!(ids(&sorted), ["a", "b", "c"]);
    }

    #[test]
    fn test_single_featured_track_unchanged() {
        let tracks = vec![track("a"), track("b"), track("c")];
        let mut map = HashMap::new();
        map.insert("b".to_string(), features(120.0, 0.8));

        // "b" is the only featured track: it moves to the front, the
        // unfeatured rest keep their order behind it
        let sorted = smart_sort(tracks, &map);
        assert_eq!(ids(&sorted), ["b", "a", "c"]);
    }

    #[test]
    fn test_starts_with_highest_energy() {
        let tracks = vec![track("a"), track("b"), track("c")];
        let mut map = HashMap::new();
        map.insert("a".to_string(), features(100.0, 0.3));
        map.insert("b".to_string(), features(110.0, 0.9));
        map.insert("c".to_string(), features(120.0, 0.5));

        let sorted = smart_sort(tracks, &map);
        assert_eq!(sorted[0].id, "b");
    }

    #[test]
    fn test_energy_tie_goes_to_first() {
        let tracks = vec![track("a"), track("b")];
        let mut map = HashMap::new();
        map.insert("a".to_string(), features(100.0, 0.7));
        map.insert("b".to_string(), features(180.0, 0.7));

        let sorted = smart_sort(tracks, &map);
        assert_eq!(sorted[0].id, "a");
    }

    #[test]
    fn test_walks_to_nearest_neighbor() {
        // Energies pick "c" as the seed; tempos then force c -> b -> a
        let tracks = vec![track("a"), track("b"), track("c")];
        let mut map = HashMap::new();
        map.insert("a".to_string(), features(60.0, 0.1));
        map.insert("b".to_string(), features(120.0, 0.2));
        map.insert("c".to_string(), features(140.0, 0.9));

        let sorted = smart_sort(tracks, &map);
        assert_eq!(ids(&sorted), ["c", "b", "a"]);
    }

    #[test]
    fn test_unfeatured_appended_in_order() {
        let tracks = vec![track("x"), track("a"), track("y"), track("b")];
        let mut map = HashMap::new();
        map.insert("a".to_string(), features(100.0, 0.9));
        map.insert("b".to_string(), features(105.0, 0.2));

        let sorted = smart_sort(tracks, &map);
        assert_eq!(ids(&sorted), ["a", "b", "x", "y"]);
    }

    #[test]
    fn test_result_is_permutation() {
        let tracks: Vec<Track> = (0..8).map(|i| track(&i.to_string())).collect();
        let mut map = HashMap::new();
        for i in 0..6 {
            map.insert(i.to_string(), features(80.0 + 13.0 * i as f64, 0.1 * i as f64));
        }

        let sorted = smart_sort(tracks, &map);
        assert_eq!(sorted.len(), 8);
        let mut seen: Vec<&str> = ids(&sorted);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }
}
