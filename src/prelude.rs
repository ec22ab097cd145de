// Re-export key components
pub use crate::error::SeedError;
pub use crate::model::{AccessEgress, ArrivalMode, RaptorProfile};
pub use crate::seed::{RoundBuckets, SeedPaths};

// Core types for transit routing
pub use crate::RaptorStopId;
pub use crate::Time;
