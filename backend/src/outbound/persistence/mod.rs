//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and the schema (`schema.rs`) stay
//! internal; errors are mapped onto the port's error enum.
//!
//! # Example
//!
//! ```ignore
//! use habits_backend::outbound::persistence::{DbPool, DieselHabitEntryRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/habits")).await?;
//! let repo = DieselHabitEntryRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_habit_entry_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_habit_entry_repository::DieselHabitEntryRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
