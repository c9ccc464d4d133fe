//! Item CRUD Module
//!
//! Implements the in-memory item collection and the HTTP surface over it.
//!
//! ## Core Concepts
//! - **Store**: `ItemStore` maps id to item; an atomic counter hands out
//!   unique, monotonically increasing ids that are never reused.
//! - **Open schema**: payloads are validated on the typed fields (name,
//!   price, quantity, description) and any extra keys are stored verbatim.
//! - **Partial update**: an update payload only overwrites the keys it
//!   actually contains; everything else keeps its stored value.

pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;
