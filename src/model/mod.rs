//! Value types shared between the path search and the round-based scan

pub mod path;
pub mod profile;

pub use path::{AccessEgress, ArrivalMode};
pub use profile::RaptorProfile;
