use crate::entities::prelude::*;

pub fn participant(id: i32, name: &str) -> Participant {
    Participant {
        id,
        attendee_name: name.to_string(),
        attendee_email: format!("guest{id}@example.com"),
        is_table_captain: false,
        status: ParticipantStatus::Registered,
        captain_overridden: false,
        email_overridden: false,
    }
}

pub fn captain(id: i32, name: &str) -> Participant {
    Participant {
        is_table_captain: true,
        ..participant(id, name)
    }
}

pub fn restaurant(id: i32, max_seats: i32, captain_id: Option<i32>) -> Restaurant {
    Restaurant {
        id,
        name: format!("Restaurant {id}"),
        address: format!("{id} Main Street"),
        max_seats,
        travel_time_minutes: None,
        assigned_captain_id: captain_id,
    }
}

pub fn assignment(participant_id: i32, restaurant_id: i32) -> Assignment {
    Assignment {
        participant_id,
        restaurant_id,
        assigned_at: None,
    }
}
