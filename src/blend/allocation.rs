//! Quota allocation and deduplicating per-source collection.
//!
//! Given a target playlist size, each source gets an even share of slots
//! (remainder spread one-per-source from the front of the source list), then
//! fills its share from its ranked candidates, skipping anything another
//! source already claimed.

use crate::models::Track;
use std::collections::{HashMap, HashSet};

/// Split `total_tracks` slots evenly across `source_count` sources.
///
/// Returns one quota per source, in source order. The first
/// `total_tracks % source_count` sources get the extra slot, so the split
/// depends on source order and always sums to `total_tracks`. Quotas can be
/// zero when there are more sources than slots.
pub fn allocate_quotas(total_tracks: usize, source_count: usize) -> Vec<usize> {
    if source_count == 0 {
        return Vec::new();
    }

    let base = total_tracks / source_count;
    let remainder = total_tracks % source_count;

    (0..source_count)
        .map(|i| base + usize::from(i < remainder))
        .collect()
}

/// Collect each source's contribution, deduplicating across sources.
///
/// Candidates are taken in ranked order up to the source's quota. The `seen`
/// set is global: a track claimed by an earlier source is skipped by every
/// later one, so a shared favourite appears once and counts toward whoever
/// listed it first. A source may come up short when its candidates run out
/// or collide; the returned contribution map records what was actually
/// accepted.
pub fn collect_manifests(
    sources: &[(String, Vec<Track>)],
    quotas: &[usize],
) -> (Vec<Vec<Track>>, HashMap<String, usize>) {
    let mut seen: HashSet<String> = HashSet::new();
    let mut manifests = Vec::with_capacity(sources.len());
    let mut contributions = HashMap::with_capacity(sources.len());

    for ((source_id, candidates), &quota) in sources.iter().zip(quotas) {
        let mut manifest: Vec<Track> = Vec::with_capacity(quota);
        for track in candidates {
            if manifest.len() >= quota {
                break;
            }
            if seen.insert(track.id.clone()) {
                manifest.push(track.clone());
            }
        }

        contributions.insert(source_id.clone(), manifest.len());
        manifests.push(manifest);
    }

    (manifests, contributions)
}
