//! The active station and its load lifecycle.
//!
//! The controller never decides *which* station is active on its own: the
//! page path is the identity and every path change is forwarded through
//! [`SelectionController::set_identity`]. What it owns is the mapping from
//! that identity to `Loading`, `Error` or `Ready`, and the guarantee that a
//! slow response for a station the user has already left cannot overwrite
//! the state of the station they moved to.

use log::{debug, info};

use crate::payload::StationPayload;
use crate::station::{StationId, StationInfo};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    Loading,
    /// Failure description, shown to the user as is
    Error(String),
    Ready(Box<StationPayload>),
}

/// Proof that a fetch was issued for a given identity change.
///
/// Only the ticket of the most recent change is accepted by
/// [`SelectionController::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub station: StationId,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    target: Option<StationId>,
    generation: u64,
    state: SelectionState,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self {
            target: None,
            generation: 0,
            state: SelectionState::Loading,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn target(&self) -> Option<&StationId> {
        self.target.as_ref()
    }

    /// The payload, when ready.
    pub fn payload(&self) -> Option<&StationPayload> {
        match &self.state {
            SelectionState::Ready(payload) => Some(payload.as_ref()),
            _ => None,
        }
    }

    /// Station metadata, when ready.
    pub fn active_station(&self) -> Option<&StationInfo> {
        self.payload().map(|p| &p.info)
    }

    /// Point the controller at `id`.
    ///
    /// Returns a ticket when the identity actually changed; the caller must
    /// then fetch `ticket.station` and hand the outcome to [`Self::complete`].
    /// Re-announcing the current identity is a no-op and returns `None`.
    pub fn set_identity(&mut self, id: StationId) -> Option<FetchTicket> {
        if self.target.as_ref() == Some(&id) {
            return None;
        }
        self.generation += 1;
        self.state = SelectionState::Loading;
        self.target = Some(id.clone());
        info!("Selecting station {} (generation {})", id, self.generation);
        Some(FetchTicket {
            station: id,
            generation: self.generation,
        })
    }

    /// Apply a fetch outcome. Returns `false` if the ticket is stale.
    pub fn complete(&mut self, ticket: &FetchTicket, outcome: SelectionState) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale response for {} (generation {}, current {})",
                ticket.station, ticket.generation, self.generation
            );
            return false;
        }
        self.state = outcome;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::TemperatureMatrix;

    fn ready(id: &str) -> SelectionState {
        SelectionState::Ready(Box::new(StationPayload {
            info: StationInfo {
                id: StationId::new(id),
                name: format!("Station {}", id),
                lat: 0.0,
                lon: 0.0,
                elevation: None,
                state: None,
                gsn: None,
                hcn_crn: None,
                wmo: None,
            },
            matrix: TemperatureMatrix::empty(),
            recent: Vec::new(),
            unique_combinations: 0,
            total_days: 0,
            date_range: None,
        }))
    }

    #[test]
    fn test_starts_loading_without_target() {
        let controller = SelectionController::new();
        assert_eq!(controller.state(), &SelectionState::Loading);
        assert_eq!(controller.target(), None);
    }

    #[test]
    fn test_identity_change_enters_loading() {
        let mut controller = SelectionController::new();
        let ticket = controller.set_identity("A".into()).unwrap();
        assert!(controller.complete(&ticket, ready("A")));
        assert!(controller.payload().is_some());

        let ticket = controller.set_identity("B".into()).unwrap();
        assert_eq!(ticket.station, StationId::new("B"));
        assert_eq!(controller.state(), &SelectionState::Loading);
        assert!(controller.active_station().is_none());
    }

    #[test]
    fn test_same_identity_does_not_refetch() {
        let mut controller = SelectionController::new();
        let ticket = controller.set_identity("A".into()).unwrap();
        controller.complete(&ticket, ready("A"));
        assert_eq!(controller.set_identity("A".into()), None);
        assert_eq!(controller.active_station().unwrap().id, StationId::new("A"));
    }

    #[test]
    fn test_late_response_for_previous_identity_is_discarded() {
        let mut controller = SelectionController::new();
        let ticket_a = controller.set_identity("A".into()).unwrap();
        let ticket_b = controller.set_identity("B".into()).unwrap();

        // B resolves first, then A's slow response shows up
        assert!(controller.complete(&ticket_b, ready("B")));
        assert!(!controller.complete(&ticket_a, ready("A")));
        assert_eq!(controller.active_station().unwrap().id, StationId::new("B"));
    }

    #[test]
    fn test_late_error_does_not_clobber_ready() {
        let mut controller = SelectionController::new();
        let ticket_a = controller.set_identity("A".into()).unwrap();
        let ticket_b = controller.set_identity("B".into()).unwrap();
        controller.complete(&ticket_b, SelectionState::Error("Network Error".into()));
        controller.complete(&ticket_a, ready("A"));
        assert_eq!(
            controller.state(),
            &SelectionState::Error("Network Error".into())
        );
    }

    #[test]
    fn test_returning_to_earlier_identity_rejects_its_old_ticket() {
        let mut controller = SelectionController::new();
        let first_a = controller.set_identity("A".into()).unwrap();
        controller.set_identity("B".into()).unwrap();
        let second_a = controller.set_identity("A".into()).unwrap();

        assert!(!controller.complete(&first_a, SelectionState::Error("old".into())));
        assert_eq!(controller.state(), &SelectionState::Loading);
        assert!(controller.complete(&second_a, ready("A")));
    }

    #[test]
    fn test_error_outcome() {
        let mut controller = SelectionController::new();
        let ticket = controller.set_identity("X".into()).unwrap();
        controller.complete(&ticket, SelectionState::Error("Network Error".into()));
        assert_eq!(
            controller.state(),
            &SelectionState::Error("Network Error".into())
        );
        assert!(controller.payload().is_none());
    }
}
