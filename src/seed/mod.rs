//! Classification and pruning of access/egress paths before the scan

mod classify;
mod pareto;
mod paths;
mod rounds;

pub(crate) use classify::group_by_round;
pub(crate) use pareto::remove_non_optimal_paths;

pub use paths::SeedPaths;
pub use rounds::RoundBuckets;
