use crate::model::AccessEgress;

/// Access/egress paths grouped by the round they seed.
///
/// Stored dense: one bucket per round up to the highest round present, the
/// same layout the scan uses for its per-round stop state. Rounds with no
/// paths are valid and read as empty buckets, so consumers can iterate
/// straight through gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundBuckets {
    rounds: Vec<Vec<AccessEgress>>,
}

impl RoundBuckets {
    /// Insert a path into the bucket for `round`, growing the table if the
    /// round has not been seen yet. Insertion order within a bucket is
    /// preserved.
    pub(crate) fn insert(&mut self, round: usize, path: AccessEgress) {
        if round >= self.rounds.len() {
            self.rounds.resize_with(round + 1, Vec::new);
        }
        self.rounds[round].push(path);
    }

    /// Paths seeding the given round. An absent round yields an empty
    /// slice, never an error.
    pub fn round(&self, round: usize) -> &[AccessEgress] {
        self.rounds.get(round).map_or(&[], Vec::as_slice)
    }

    /// Non-empty rounds in ascending order, with their paths.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[AccessEgress])> {
        self.rounds
            .iter()
            .enumerate()
            .filter(|(_, paths)| !paths.is_empty())
            .map(|(round, paths)| (round, paths.as_slice()))
    }

    /// Highest round with any path, or 0 when there are none.
    ///
    /// The last bucket is non-empty by construction, so this is just the
    /// table length.
    pub fn max_round(&self) -> usize {
        self.rounds.len().saturating_sub(1)
    }

    /// Total number of paths across all rounds
    pub fn path_count(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_round_reads_as_empty_slice() {
        let mut buckets = RoundBuckets::default();
        buckets.insert(0, AccessEgress::walk(1, 60));
        buckets.insert(2, AccessEgress::flex(1, 300, 2));

        assert_eq!(buckets.round(0).len(), 1);
        assert!(buckets.round(1).is_empty());
        assert_eq!(buckets.round(2).len(), 1);
        assert!(buckets.round(17).is_empty());
    }

    #[test]
    fn iter_skips_gap_rounds() {
        let mut buckets = RoundBuckets::default();
        buckets.insert(2, AccessEgress::flex(4, 200, 2));
        buckets.insert(0, AccessEgress::walk(4, 100));

        let keys: Vec<usize> = buckets.iter().map(|(round, _)| round).collect();
        assert_eq!(keys, vec![0, 2]);
        assert_eq!(buckets.max_round(), 2);
        assert_eq!(buckets.path_count(), 2);
    }

    #[test]
    fn empty_buckets() {
        let buckets = RoundBuckets::default();
        assert!(buckets.is_empty());
        assert_eq!(buckets.max_round(), 0);
        assert_eq!(buckets.path_count(), 0);
        assert_eq!(buckets.iter().count(), 0);
    }
}
