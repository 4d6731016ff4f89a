//! Pure planning over in-memory records: captains to restaurants, participants
//! to seats, and the per-restaurant rosters built from the result.
//!
//! Nothing here performs I/O or knows about the workflow state. Every planner
//! takes its randomness as `&mut impl Rng` so callers decide between a seeded
//! generator and OS entropy.

pub mod captains;
pub mod error;
pub mod participants;
pub mod rosters;

#[cfg(test)]
mod fixtures;

pub use captains::{CaptainPlanEntry, plan_captain_assignments};
pub use error::AllocationError;
pub use participants::{
    AllocationOptions, ParticipantPlan, PlannedAssignment, plan_participant_assignments,
};
pub use rosters::{Roster, build_restaurant_rosters};
