use crate::model::{AccessEgress, ArrivalMode};
use crate::seed::RoundBuckets;

/// Group the paths arriving with the given mode by the round they seed
/// (round = number of rides already consumed).
///
/// Order within each bucket equals input order. Paths with the other
/// arrival mode are ignored entirely: on-street and on-board candidates at
/// the same stop and round are never weighed against each other here.
pub(crate) fn group_by_round(paths: &[AccessEgress], mode: ArrivalMode) -> RoundBuckets {
    let mut buckets = RoundBuckets::default();
    for path in paths.iter().filter(|path| path.mode == mode) {
        buckets.insert(path.rides, *path);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_ride_count() {
        let paths = vec![
            AccessEgress::walk(1, 120),
            AccessEgress::flex(2, 600, 1),
            AccessEgress::walk(3, 90),
            AccessEgress::flex(4, 900, 2),
        ];

        let buckets = group_by_round(&paths, ArrivalMode::OnStreet);
        assert_eq!(buckets.round(0), &[paths[0], paths[2]]);
        assert_eq!(buckets.round(1), &[paths[1]]);
        assert_eq!(buckets.round(2), &[paths[3]]);
        assert_eq!(buckets.max_round(), 2);
    }

    #[test]
    fn filters_by_arrival_mode() {
        let street = AccessEgress::walk(1, 120);
        let board = AccessEgress::flex_on_board(1, 300, 1);
        let paths = vec![street, board];

        let on_street = group_by_round(&paths, ArrivalMode::OnStreet);
        let on_board = group_by_round(&paths, ArrivalMode::OnBoard);

        assert_eq!(on_street.round(0), &[street]);
        assert!(on_street.round(1).is_empty());
        assert_eq!(on_board.round(1), &[board]);
        assert!(on_board.round(0).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_buckets() {
        let buckets = group_by_round(&[], ArrivalMode::OnStreet);
        assert!(buckets.is_empty());
    }

    #[test]
    fn preserves_input_order_within_bucket() {
        let paths = vec![
            AccessEgress::walk(5, 300),
            AccessEgress::walk(3, 100),
            AccessEgress::walk(5, 200),
        ];
        let buckets = group_by_round(&paths, ArrivalMode::OnStreet);
        assert_eq!(buckets.round(0), &[paths[0], paths[1], paths[2]]);
    }
}
