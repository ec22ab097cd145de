use log::debug;

use crate::error::SeedError;
use crate::model::{AccessEgress, ArrivalMode, RaptorProfile};
use crate::seed::{RoundBuckets, group_by_round, remove_non_optimal_paths};

/// Access (or egress) paths prepared for the round-based scan: grouped by
/// round and split by arrival mode.
///
/// Built once per request side from the full candidate set, then read-only.
/// The multi-criteria state can hold several paths per stop, but the
/// Standard and BestTime states cannot, so for those profiles the
/// candidates are first reduced to the shortest path per stop, round and
/// arrival mode (first one wins on a tie). Mode matters for flex: a path
/// arriving on board may be boarded onwards immediately and is kept even
/// when walking to the same stop would be faster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPaths {
    on_street: RoundBuckets,
    on_board: RoundBuckets,
}

impl SeedPaths {
    /// Build the seed state from the candidate paths produced by the
    /// street/flex path search.
    ///
    /// Input order is significant: it is the tie-break order for pruning.
    /// Empty input is fine and yields two empty bucket sets.
    ///
    /// # Errors
    ///
    /// [`SeedError::NonPositiveDuration`] if any candidate has a zero
    /// duration. That is a defect in the upstream path search, never
    /// corrected silently here.
    pub fn create(paths: Vec<AccessEgress>, profile: RaptorProfile) -> Result<Self, SeedError> {
        validate_paths(&paths)?;

        let paths = if profile.is_multi_criteria() {
            paths
        } else {
            let candidates = paths.len();
            let kept = remove_non_optimal_paths(paths);
            if kept.len() < candidates {
                debug!(
                    "seed pruning kept {} of {candidates} access/egress paths",
                    kept.len()
                );
            }
            kept
        };

        Ok(SeedPaths {
            on_street: group_by_round(&paths, ArrivalMode::OnStreet),
            on_board: group_by_round(&paths, ArrivalMode::OnBoard),
        })
    }

    /// Paths arriving on street (walking), grouped by round.
    pub fn on_street_by_round(&self) -> &RoundBuckets {
        &self.on_street
    }

    /// Paths arriving on board a transit (flex) service, grouped by round.
    pub fn on_board_by_round(&self) -> &RoundBuckets {
        &self.on_board
    }

    /// Highest round seeded by any path, 0 when there are none.
    ///
    /// The scan sizes its round loop with this and must visit every round
    /// up to it, since an empty round can still be followed by a seeded one.
    pub fn max_round(&self) -> usize {
        self.on_street.max_round().max(self.on_board.max_round())
    }
}

fn validate_paths(paths: &[AccessEgress]) -> Result<(), SeedError> {
    for path in paths {
        if path.duration == 0 {
            return Err(SeedError::NonPositiveDuration(path.stop));
        }
    }
    Ok(())
}
