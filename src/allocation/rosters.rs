use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::entities::prelude::*;

/// Who sits at one restaurant: its captain plus the placed participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub restaurant: Restaurant,
    pub captain: Option<Participant>,
    pub participants: Vec<Participant>,
}

impl Roster {
    pub fn seat_count(&self) -> usize {
        self.participants.len() + usize::from(self.captain.is_some())
    }

    pub fn is_overbooked(&self) -> bool {
        self.seat_count() > usize::try_from(self.restaurant.max_seats).unwrap_or(0)
    }
}

/// Groups assignments by restaurant and resolves every id to its record.
///
/// Returns one roster per restaurant in input order. Assignments pointing at
/// an unknown participant or restaurant are dropped. Participants within a
/// roster are ordered by name.
pub fn build_restaurant_rosters(
    restaurants: &[Restaurant],
    participants: &[Participant],
    assignments: &[Assignment],
) -> Vec<Roster> {
    let participants_by_id: HashMap<ParticipantId, &Participant> =
        participants.iter().map(|p| (p.id, p)).collect();
    let restaurant_ids: HashSet<RestaurantId> = restaurants.iter().map(|r| r.id).collect();

    let grouped: HashMap<RestaurantId, Vec<&Participant>> = assignments
        .iter()
        .filter(|a| restaurant_ids.contains(&a.restaurant_id))
        .filter_map(|a| {
            participants_by_id
                .get(&a.participant_id)
                .map(|p| (a.restaurant_id, *p))
        })
        .fold(HashMap::new(), |mut acc, (restaurant_id, participant)| {
            acc.entry(restaurant_id).or_default().push(participant);
            acc
        });

    restaurants
        .iter()
        .map(|restaurant| {
            let captain = restaurant
                .assigned_captain_id
                .and_then(|id| participants_by_id.get(&id))
                .map(|p| (*p).clone());

            let mut seated: Vec<Participant> = grouped
                .get(&restaurant.id)
                .map(|list| list.iter().map(|p| (*p).clone()).collect())
                .unwrap_or_default();
            seated.sort_by(|a, b| a.attendee_name.cmp(&b.attendee_name));

            Roster {
                restaurant: restaurant.clone(),
                captain,
                participants: seated,
            }
        })
        .collect()
}
