#![deny(missing_debug_implementations)]

//! # turfbook-entities
//!
//! Reusable, agnostic domain entities for turfbook.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic like locking or persistence.

pub mod activity;
pub mod availability;
pub mod id;
pub mod money;
pub mod payment;
pub mod reservation;
pub mod settings;
pub mod slot;
pub mod time;
pub mod venue;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
