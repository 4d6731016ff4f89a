use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    allocation::{
        AllocationOptions, CaptainPlanEntry, ParticipantPlan, Roster, build_restaurant_rosters,
        plan_captain_assignments, plan_participant_assignments,
    },
    entities::prelude::*,
    error::AppError,
    router::AppState,
    workflow::{self, AssignmentMode, EventOutcome, EventSnapshot, ParticipantsOutcome},
};

#[derive(Deserialize)]
pub struct CaptainPlanRequest {
    pub restaurants: Vec<Restaurant>,
    pub participants: Vec<Participant>,
}

#[derive(Deserialize)]
pub struct ParticipantPlanRequest {
    pub restaurants: Vec<Restaurant>,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    pub require_captain: Option<bool>,
}

#[derive(Deserialize)]
pub struct RosterRequest {
    pub restaurants: Vec<Restaurant>,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

#[derive(Deserialize)]
pub struct EventRequest {
    pub event: EventSnapshot,
}

#[derive(Deserialize)]
pub struct AssignParticipantsRequest {
    pub event: EventSnapshot,
    #[serde(default)]
    pub mode: AssignmentMode,
}

#[derive(Deserialize)]
pub struct CancelParticipantRequest {
    pub event: EventSnapshot,
    pub participant_id: ParticipantId,
}

/// Captain plan over the eligible captains among `participants`.
pub async fn plan_captains(
    State(state): State<AppState>,
    Json(req): Json<CaptainPlanRequest>,
) -> Result<Json<Vec<CaptainPlanEntry>>, AppError> {
    let captains: Vec<Participant> = req
        .participants
        .into_iter()
        .filter(|p| p.is_eligible_captain())
        .collect();
    let plan =
        state.with_rng(|rng| plan_captain_assignments(&req.restaurants, &captains, rng))??;
    Ok(Json(plan))
}

pub async fn plan_participants(
    State(state): State<AppState>,
    Json(req): Json<ParticipantPlanRequest>,
) -> Result<Json<ParticipantPlan>, AppError> {
    let options = AllocationOptions {
        require_captain: req.require_captain.unwrap_or(true),
        existing: &req.assignments,
    };
    let plan = state.with_rng(|rng| {
        plan_participant_assignments(&req.restaurants, &req.participants, options, rng)
    })?;
    Ok(Json(plan))
}

pub async fn rosters(Json(req): Json<RosterRequest>) -> Json<Vec<Roster>> {
    Json(build_restaurant_rosters(
        &req.restaurants,
        &req.participants,
        &req.assignments,
    ))
}

pub async fn assign_captains(
    State(state): State<AppState>,
    Json(req): Json<EventRequest>,
) -> Result<Json<EventOutcome>, AppError> {
    let now = Utc::now().naive_utc();
    let outcome = state.with_rng(|rng| workflow::assign_captains(req.event, rng, now))??;
    Ok(Json(outcome))
}

pub async fn assign_participants(
    State(state): State<AppState>,
    Json(req): Json<AssignParticipantsRequest>,
) -> Result<Json<ParticipantsOutcome>, AppError> {
    let now = Utc::now().naive_utc();
    let outcome =
        state.with_rng(|rng| workflow::assign_participants(req.event, req.mode, rng, now))??;
    Ok(Json(outcome))
}

pub async fn cancel_participant(
    Json(req): Json<CancelParticipantRequest>,
) -> Result<Json<EventOutcome>, AppError> {
    let now = Utc::now().naive_utc();
    let outcome = workflow::cancel_participant(req.event, req.participant_id, now)?;
    Ok(Json(outcome))
}

pub async fn finalize(Json(req): Json<EventRequest>) -> Json<EventOutcome> {
    Json(workflow::finalize(req.event, Utc::now().naive_utc()))
}
