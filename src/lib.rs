//! Seeding stage for round-based (RAPTOR) public transit routing.
//!
//! Before the round-by-round scan can run, every candidate access or egress
//! path produced by the street/flex path search must be classified by the
//! round it belongs to and by how it arrives at the stop. For the
//! single-objective search profiles the candidate set is additionally
//! reduced to one best path per stop, round and arrival mode, so the scan
//! does deterministic, bounded work.
//!
//! The entry point is [`SeedPaths::create`]; the resulting aggregate is
//! immutable and is read by the scan through [`SeedPaths::on_street_by_round`],
//! [`SeedPaths::on_board_by_round`] and [`SeedPaths::max_round`].

pub mod error;
pub mod model;
pub mod prelude;
pub mod seed;

pub use error::SeedError;
pub use model::{AccessEgress, ArrivalMode, RaptorProfile};
pub use seed::{RoundBuckets, SeedPaths};

/// Time in seconds
pub type Time = u32;
/// Index of a stop in the transit model
pub type RaptorStopId = usize;
