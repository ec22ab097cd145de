use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::RaptorStopId;
use crate::model::{AccessEgress, ArrivalMode};

/// Reduce the candidate set to one path per (stop, round, arrival mode)
/// for the single-objective search profiles.
///
/// Those profiles keep exactly one arrival state per stop and round, so
/// redundant candidates only waste work and, unless normalized here, leave
/// the chosen path depending on incidental input ordering. Within a
/// group the minimum-duration path wins; on equal duration the earliest
/// input position wins, and the retained paths come back in input order, so
/// hash iteration order never leaks into the result.
///
/// Arrival mode is part of the group key: a flex path arriving on board
/// stays eligible for an immediate transfer and is kept even when a walking
/// path to the same stop is faster.
pub(crate) fn remove_non_optimal_paths(paths: Vec<AccessEgress>) -> Vec<AccessEgress> {
    let mut best: HashMap<(RaptorStopId, usize, ArrivalMode), usize> =
        HashMap::with_capacity(paths.len());

    for (idx, path) in paths.iter().enumerate() {
        match best.entry((path.stop, path.rides, path.mode)) {
            Entry::Vacant(entry) => {
                entry.insert(idx);
            }
            Entry::Occupied(mut entry) => {
                // Strict inequality: on a duration tie the earlier path stays.
                if path.duration < paths[*entry.get()].duration {
                    entry.insert(idx);
                }
            }
        }
    }

    let mut keep = vec![false; paths.len()];
    for &idx in best.values() {
        keep[idx] = true;
    }

    paths
        .into_iter()
        .enumerate()
        .filter_map(|(idx, path)| keep[idx].then_some(path))
        .collect()
}
