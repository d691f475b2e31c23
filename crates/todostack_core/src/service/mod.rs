//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into user-facing operations.
//! - Pair every successful mutation with the destination the caller should
//!   navigate to next.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - Services remain storage-agnostic.

pub mod item_service;
pub mod list_service;
