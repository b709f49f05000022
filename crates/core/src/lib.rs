//! Domain types and rules for the SME directory.
//!
//! Everything in this crate is pure: enums with guarded transitions for the
//! nomination / profile / enrollment state machines, validation helpers for
//! availability and course input, and the shared error taxonomy. No I/O.

pub mod availability;
pub mod channels;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod nomination;
pub mod profile;
pub mod roles;
pub mod types;
