use std::collections::HashSet;

use chrono::NaiveDateTime;
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct AllocationOptions<'a> {
    /// Only restaurants that already have a captain take participants.
    pub require_captain: bool,
    /// Assignments kept from an earlier run. They count against capacity and
    /// their participants are not placed again.
    pub existing: &'a [Assignment],
}

impl Default for AllocationOptions<'_> {
    fn default() -> Self {
        Self {
            require_captain: true,
            existing: &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedAssignment {
    pub participant_id: ParticipantId,
    #[serde(alias = "venue_id")]
    pub restaurant_id: RestaurantId,
}

impl PlannedAssignment {
    pub fn stamp(self, assigned_at: NaiveDateTime) -> Assignment {
        Assignment {
            participant_id: self.participant_id,
            restaurant_id: self.restaurant_id,
            assigned_at: Some(assigned_at),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPlan {
    pub assignments: Vec<PlannedAssignment>,
    pub unassigned: Vec<Participant>,
}

/// Live counter for one restaurant during a planning run.
#[derive(Debug)]
struct Slot {
    restaurant_id: RestaurantId,
    assigned: usize,
    capacity: usize,
}

impl Slot {
    fn has_room(&self) -> bool {
        self.assigned < self.capacity
    }
}

/// Places every eligible, non-captain participant into a restaurant.
///
/// Participants are shuffled, then each goes to the restaurant with free
/// capacity holding the fewest people so far (ties go to the larger
/// restaurant). Once every restaurant is full the same rule picks where to
/// overbook, except that restaurants with no participant seats never take
/// anyone. Whoever cannot be placed ends up in `unassigned`.
pub fn plan_participant_assignments<R: Rng + ?Sized>(
    restaurants: &[Restaurant],
    participants: &[Participant],
    options: AllocationOptions<'_>,
    rng: &mut R,
) -> ParticipantPlan {
    let mut slots: Vec<Slot> = restaurants
        .iter()
        .filter(|r| !options.require_captain || r.has_captain())
        .map(|r| Slot {
            restaurant_id: r.id,
            assigned: 0,
            capacity: r.effective_capacity(),
        })
        .collect();

    for existing in options.existing {
        if let Some(slot) = slots
            .iter_mut()
            .find(|s| s.restaurant_id == existing.restaurant_id)
        {
            slot.assigned += 1;
        }
    }

    let mut placed: HashSet<ParticipantId> = options
        .existing
        .iter()
        .map(|a| a.participant_id)
        .collect();
    let mut eligible: Vec<&Participant> = participants
        .iter()
        .filter(|p| !p.is_cancelled() && !p.is_table_captain)
        .filter(|p| placed.insert(p.id))
        .collect();
    eligible.shuffle(rng);

    debug!(
        restaurants = slots.len(),
        participants = eligible.len(),
        "planning participant assignments"
    );

    let mut plan = ParticipantPlan::default();
    for participant in eligible {
        match pick_slot(&slots) {
            Some(index) => {
                let slot = &mut slots[index];
                slot.assigned += 1;
                plan.assignments.push(PlannedAssignment {
                    participant_id: participant.id,
                    restaurant_id: slot.restaurant_id,
                });
            }
            None => plan.unassigned.push(participant.clone()),
        }
    }

    plan
}

fn pick_slot(slots: &[Slot]) -> Option<usize> {
    let by_load = |a: &(usize, &Slot), b: &(usize, &Slot)| {
        a.1.assigned
            .cmp(&b.1.assigned)
            .then_with(|| b.1.capacity.cmp(&a.1.capacity))
    };

    slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.has_room())
        .min_by(by_load)
        .or_else(|| {
            slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.capacity > 0)
                .min_by(by_load)
        })
        .map(|(index, _)| index)
}
