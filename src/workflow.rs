//! Application actions layered over the allocators.
//!
//! The event is passed around as an explicit [`EventSnapshot`] value. Each
//! action consumes a snapshot, applies a freshly computed plan and hands back
//! the new snapshot together with an [`ActivityEntry`] describing what
//! happened. Persisting either one is left to the caller.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::allocation::{
    AllocationError, AllocationOptions, Roster, build_restaurant_rosters,
    plan_captain_assignments, plan_participant_assignments,
};
use crate::entities::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSnapshot {
    #[serde(default)]
    pub workflow_state: WorkflowState,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl EventSnapshot {
    pub fn rosters(&self) -> Vec<Roster> {
        build_restaurant_rosters(&self.restaurants, &self.participants, &self.assignments)
    }

    fn ensure_open(&self) -> Result<(), WorkflowError> {
        if self.workflow_state.is_finalized() {
            return Err(WorkflowError::Finalized);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    /// Drop every existing assignment and place everyone again.
    #[default]
    Reshuffle,
    /// Keep existing assignments and only place participants without one.
    OnlyUnassigned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub detail: String,
    pub created_at: NaiveDateTime,
}

impl ActivityEntry {
    fn new(action: &str, detail: String, created_at: NaiveDateTime) -> Self {
        Self {
            action: action.to_string(),
            detail,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("event is finalized, allocations can no longer change")]
    Finalized,

    #[error("participant {0} not found")]
    UnknownParticipant(ParticipantId),

    #[error(transparent)]
    Allocation(#[from] AllocationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    pub event: EventSnapshot,
    pub activity: ActivityEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantsOutcome {
    pub event: EventSnapshot,
    pub unassigned: Vec<Participant>,
    pub activity: ActivityEntry,
}

/// Binds a captain to every restaurant, replacing any earlier binding.
pub fn assign_captains<R: Rng + ?Sized>(
    mut event: EventSnapshot,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<EventOutcome, WorkflowError> {
    event.ensure_open()?;

    let captains: Vec<Participant> = event
        .participants
        .iter()
        .filter(|p| p.is_eligible_captain())
        .cloned()
        .collect();
    let plan = plan_captain_assignments(&event.restaurants, &captains, rng)?;

    for (restaurant, entry) in event.restaurants.iter_mut().zip(&plan) {
        restaurant.assigned_captain_id = Some(entry.captain_id);
    }

    // A captain is seated through the restaurant, never through a row.
    let bound: HashSet<ParticipantId> = plan.iter().map(|e| e.captain_id).collect();
    event
        .assignments
        .retain(|a| !bound.contains(&a.participant_id));

    event.workflow_state = event
        .workflow_state
        .advance_to(WorkflowState::CaptainsAssigned);

    info!(
        captains = plan.len(),
        available = captains.len(),
        "assigned captains"
    );

    let activity = ActivityEntry::new(
        "captains_assigned",
        format!("Assigned {} captains to restaurants", plan.len()),
        now,
    );
    Ok(EventOutcome { event, activity })
}

/// Places participants into restaurants that have a captain.
pub fn assign_participants<R: Rng + ?Sized>(
    mut event: EventSnapshot,
    mode: AssignmentMode,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<ParticipantsOutcome, WorkflowError> {
    event.ensure_open()?;

    if mode == AssignmentMode::Reshuffle {
        event.assignments.clear();
    }

    let plan = plan_participant_assignments(
        &event.restaurants,
        &event.participants,
        AllocationOptions {
            require_captain: true,
            existing: &event.assignments,
        },
        rng,
    );

    let placed = plan.assignments.len();
    event
        .assignments
        .extend(plan.assignments.into_iter().map(|a| a.stamp(now)));
    event.workflow_state = event
        .workflow_state
        .advance_to(WorkflowState::ParticipantsAssigned);

    info!(
        placed,
        unassigned = plan.unassigned.len(),
        ?mode,
        "assigned participants"
    );
    if !plan.unassigned.is_empty() {
        warn!(
            count = plan.unassigned.len(),
            "participants could not be placed"
        );
    }
    for roster in event.rosters().iter().filter(|r| r.is_overbooked()) {
        warn!(
            restaurant_id = roster.restaurant.id,
            seats = roster.seat_count(),
            max_seats = roster.restaurant.max_seats,
            "restaurant is overbooked"
        );
    }

    let detail = if plan.unassigned.is_empty() {
        format!("Assigned {placed} participants")
    } else {
        format!(
            "Assigned {placed} participants, {} could not be placed",
            plan.unassigned.len()
        )
    };
    let activity = ActivityEntry::new("participants_assigned", detail, now);

    Ok(ParticipantsOutcome {
        event,
        unassigned: plan.unassigned,
        activity,
    })
}

/// Marks a participant as cancelled and frees whatever seat they held.
pub fn cancel_participant(
    mut event: EventSnapshot,
    participant_id: ParticipantId,
    now: NaiveDateTime,
) -> Result<EventOutcome, WorkflowError> {
    event.ensure_open()?;

    let participant = event
        .participants
        .iter_mut()
        .find(|p| p.id == participant_id)
        .ok_or(WorkflowError::UnknownParticipant(participant_id))?;
    participant.status = ParticipantStatus::Cancelled;
    let name = participant.attendee_name.clone();

    event
        .assignments
        .retain(|a| a.participant_id != participant_id);
    for restaurant in &mut event.restaurants {
        if restaurant.assigned_captain_id == Some(participant_id) {
            info!(
                restaurant_id = restaurant.id,
                participant_id, "cleared captain after cancellation"
            );
            restaurant.assigned_captain_id = None;
        }
    }

    let activity = ActivityEntry::new("participant_cancelled", format!("{name} cancelled"), now);
    Ok(EventOutcome { event, activity })
}

pub fn finalize(mut event: EventSnapshot, now: NaiveDateTime) -> EventOutcome {
    event.workflow_state = WorkflowState::Finalized;
    info!("event finalized");

    let activity = ActivityEntry::new(
        "event_finalized",
        format!("Finalized with {} assignments", event.assignments.len()),
        now,
    );
    EventOutcome { event, activity }
}
