use serde::{Deserialize, Serialize};

use crate::{RaptorStopId, Time};

/// How a candidate path reaches (or leaves) its stop.
///
/// An on-board arrival has just alighted a transit vehicle (a flex service
/// ridden as part of the access/egress leg itself) and may transfer
/// immediately, without the minimum-transfer-time rule that applies to
/// on-street arrivals. Grouping and pruning key off this discriminant
/// directly; the two modes are never compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrivalMode {
    /// Reached by walking, cycling or driving
    OnStreet,
    /// Reached on board a transit (flex) vehicle
    OnBoard,
}

/// One candidate access or egress path connecting a request endpoint to a
/// transit stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEgress {
    /// The stop this path connects to
    pub stop: RaptorStopId,
    /// Total travel time of the leg in seconds; always positive
    pub duration: Time,
    /// Transit boardings already consumed by the leg. Non-zero only for
    /// legs that include a flex ride before reaching the stop; defines the
    /// round this path seeds (round = `rides`).
    pub rides: usize,
    /// Arrival mode at the stop
    pub mode: ArrivalMode,
    /// Generalized cost carried for the multi-criteria state downstream.
    /// Not consulted by the single-objective pruner.
    pub generalized_cost: Option<Time>,
}

impl AccessEgress {
    /// A plain walking (or cycling/driving) path: no rides, arrives on street.
    pub fn walk(stop: RaptorStopId, duration: Time) -> Self {
        AccessEgress {
            stop,
            duration,
            rides: 0,
            mode: ArrivalMode::OnStreet,
            generalized_cost: None,
        }
    }

    /// A flex ride followed by a walk to the stop: arrives on street.
    pub fn flex(stop: RaptorStopId, duration: Time, rides: usize) -> Self {
        AccessEgress {
            stop,
            duration,
            rides,
            mode: ArrivalMode::OnStreet,
            generalized_cost: None,
        }
    }

    /// A flex ride alighting directly at the stop: arrives on board.
    pub fn flex_on_board(stop: RaptorStopId, duration: Time, rides: usize) -> Self {
        AccessEgress {
            stop,
            duration,
            rides,
            mode: ArrivalMode::OnBoard,
            generalized_cost: None,
        }
    }

    /// Attach a generalized cost for multi-criteria dominance comparison.
    #[must_use]
    pub fn with_generalized_cost(mut self, cost: Time) -> Self {
        self.generalized_cost = Some(cost);
        self
    }

    /// Whether the path has consumed any transit boardings yet
    pub fn has_rides(&self) -> bool {
        self.rides > 0
    }

    /// Whether the path ends having just alighted a transit vehicle
    pub fn arrives_on_board(&self) -> bool {
        self.mode == ArrivalMode::OnBoard
    }
}
