use serde::{Deserialize, Serialize};

/// Search profile selected by the routing request configuration.
///
/// The profile decides how much arrival state the scan keeps per stop and
/// round, which in turn decides whether the seed stage may prune candidate
/// paths down to one per stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RaptorProfile {
    /// Earliest arrival with path reconstruction
    #[default]
    Standard,
    /// Earliest arrival times only, no paths
    BestTime,
    /// Pareto-optimal search over several criteria; keeps multiple
    /// candidates per stop, so no seeding-time pruning is allowed
    MultiCriteria,
}

impl RaptorProfile {
    pub fn is_multi_criteria(self) -> bool {
        self == RaptorProfile::MultiCriteria
    }
}
