//! # Estate DB Client
//!
//! Typed access to estatedb, the Postgres database behind the estate
//! backend. One module per table, one function per query; every function
//! borrows a connection pool and returns db layer models from
//! [`models_estate`].
//!
//! Schema migrations are embedded at compile time and exposed as
//! [`ESTATE_DB_MIGRATIONS`] so the service can bring a fresh database up
//! to date on boot.

pub mod bookings;
pub mod error;
pub mod inquiries;
pub mod listings;

/// Embedded estatedb migrations, applied by the service at startup.
pub static ESTATE_DB_MIGRATIONS: sqlx::migrate::Migrator = sqlx::migrate!();
