use std::collections::BTreeSet;

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalNotice {
    Removed(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemovalState {
    /// Bus awaiting a yes/no answer.
    pub confirming: Option<u64>,
    /// Buses whose deletion request is outstanding.
    pub in_flight: BTreeSet<u64>,
    pub notice: Option<RemovalNotice>,
}

impl UiState for RemovalState {}

impl RemovalState {
    pub fn is_confirming(&self) -> bool {
        self.confirming.is_some()
    }

    pub fn is_removing(&self, bus_id: u64) -> bool {
        self.in_flight.contains(&bus_id)
    }
}
