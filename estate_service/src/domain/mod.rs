//! Domain logic for the estate backend.
//!
//! Business rules live here and reach storage through ports, keeping the
//! HTTP surface and Postgres at arm's length from each other.

pub mod bookings;
pub mod error;
pub mod mortgage;
