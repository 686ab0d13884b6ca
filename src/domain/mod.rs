//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Rich domain types (validated, business-logic-ready)
//! - `wire.rs`: Raw serde structs matching backend payloads
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `state.rs`: State containers with update methods
//! - `form.rs`: Form drafts with inline validation
//! - `client.rs`: Sub-client with the HTTP calls

pub mod order;
