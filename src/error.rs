use thiserror::Error;

use crate::RaptorStopId;

/// Errors raised while building the seed state.
///
/// Every variant is a precondition violation: a defect in the upstream
/// path search, deterministic and reproducible. Retrying never helps and
/// nothing here is meant for end users.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    #[error("access/egress path to stop {0} has non-positive duration")]
    NonPositiveDuration(RaptorStopId),
}
