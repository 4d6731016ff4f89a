pub mod allocation;
pub mod config;
pub mod entities;
pub mod error;
pub mod router;
pub mod routes;
pub mod workflow;
