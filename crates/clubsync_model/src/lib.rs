//! # clubsync Model
//!
//! Shared data model for the clubsync content backend.
//!
//! This crate defines:
//! - The eight resource kinds served by the API
//! - Record schemas with their wire-level (camelCase) field names and
//!   documented defaults for optional fields
//! - The `Stored<T>` envelope that pairs a record with its server-issued
//!   identifier
//! - Wire types for the dashboard statistics and health endpoints
//!
//! The model is deliberately free of storage and transport concerns so the
//! store, server, and client crates can all depend on it.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod id;
mod kind;
mod record;
mod resources;
mod wire;

pub use id::RecordId;
pub use kind::ResourceKind;
pub use record::{ResourceRecord, Stored};
pub use resources::{
    Activity, ActivityStatus, Donation, Expense, Experience, GalleryItem, HeroSlide, Member,
    Payment, PaymentStatus, WeeklyFee, DEFAULT_ACTIVITY_IMAGE, DEFAULT_EXPERIENCE_IMAGE,
    DEFAULT_MEMBER_IMAGE,
};
pub use wire::{DashboardStats, DatabaseStatus, DeleteConfirmation, HealthReport};
