use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AllocationError;
use crate::entities::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptainPlanEntry {
    #[serde(alias = "venue_id")]
    pub restaurant_id: RestaurantId,
    pub captain_id: ParticipantId,
}

/// Binds one captain to every restaurant, in restaurant order.
///
/// `captains` must already be filtered down to eligible captains. They are
/// shuffled uniformly and paired positionally with `restaurants`; any captains
/// left over stay unbound. Repeated records of the same captain count once.
/// Fails without a partial plan when there are fewer distinct captains than
/// restaurants.
pub fn plan_captain_assignments<R: Rng + ?Sized>(
    restaurants: &[Restaurant],
    captains: &[Participant],
    rng: &mut R,
) -> Result<Vec<CaptainPlanEntry>, AllocationError> {
    let mut seen: HashSet<ParticipantId> = HashSet::new();
    let mut shuffled: Vec<ParticipantId> = captains
        .iter()
        .map(|c| c.id)
        .filter(|id| seen.insert(*id))
        .collect();

    if shuffled.len() < restaurants.len() {
        return Err(AllocationError::InsufficientCaptains {
            required: restaurants.len(),
            available: shuffled.len(),
        });
    }

    shuffled.shuffle(rng);

    debug!(
        restaurants = restaurants.len(),
        captains = shuffled.len(),
        "planned captain assignments"
    );

    Ok(restaurants
        .iter()
        .zip(shuffled)
        .map(|(restaurant, captain_id)| CaptainPlanEntry {
            restaurant_id: restaurant.id,
            captain_id,
        })
        .collect())
}
