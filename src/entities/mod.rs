pub mod assignment;
pub mod participant;
pub mod prelude;
pub mod restaurant;
pub mod workflow;
