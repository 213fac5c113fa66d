//! # scribe-core
//!
//! Core types for Scribe, an audit trail producer for a configuration
//! record store.
//!
//! This crate provides the types shared across all Scribe crates:
//! - Loosely-typed attribute values and record images
//! - Change-feed record and batch envelopes
//! - The audit entry entity and its typed change payloads
//! - Change kind classification
//! - ID prefix constants

pub mod attr;
pub mod entities;
pub mod enums;
pub mod feed;
pub mod ids;
