//! # clubsync Store
//!
//! The persistence layer for the clubsync content backend.
//!
//! One independent [`Collection`] per resource kind, all owned by a
//! [`ClubStore`]. Collections support:
//! - ordered list-all
//! - create with a server-issued identifier
//! - full-document replace by identifier
//! - idempotent delete by identifier
//! - count and numeric-sum aggregation
//!
//! Records live in memory; the store can additionally be bound to a JSON
//! snapshot file so contents survive restarts. A closed store refuses
//! every operation with [`StoreError::Disconnected`], which is what the
//! health endpoint's `database` field reports on.
//!
//! ## Key Invariants
//!
//! - Identifiers are issued by the store and never reused
//! - Collections are disjoint; no operation cascades across kinds
//! - Updates replace the full document, never merge field-by-field

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod collection;
mod error;
mod store;

pub use collection::Collection;
pub use error::{StoreError, StoreResult};
pub use store::{ClubStore, DataSnapshot, StoreSlot};
