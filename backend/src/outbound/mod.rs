//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local store for development and tests
//! - **chart**: PNG line charts drawn with `plotters`
//!
//! Adapters translate between domain types and infrastructure
//! representations and carry no business logic.

pub mod chart;
pub mod memory;
pub mod persistence;
