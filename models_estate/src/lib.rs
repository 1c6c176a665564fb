//! # Estate Models
//!
//! Data models for the estate backend, organized into three layers plus a
//! shared core:
//!
//! - [`shared`]: types and helpers used across every layer (slot date
//!   normalization).
//! - [`db`]: row representations matching the estatedb schema exactly, used
//!   by the database client.
//! - [`service`]: domain representations used by business logic.
//! - [`api`]: request and response shapes for the HTTP surface, including
//!   validation.
//!
//! Conversions flow inward on the write path (api -> service -> db) and
//! outward on the read path (db -> service -> api), implemented as `From` /
//! `TryFrom` on the source types so each layer only knows about its
//! neighbors.

pub mod api;
pub mod db;
pub mod service;
pub mod shared;
