//! # turfbook-core
//!
//! Business rules of the slot reservation engine, independent of any
//! storage backend or transport.

pub use turfbook_entities as entities;

pub mod availability;
pub mod fees;
pub mod gateways;
pub mod repositories;
pub mod settings;
pub mod slots;
pub mod usecases;
