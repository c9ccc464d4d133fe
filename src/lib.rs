//! Item Service Library
//!
//! This library crate defines the modules behind the binary executable
//! (`main.rs`): a small CRUD HTTP API over an in-memory item collection.
//!
//! ## Architecture Modules
//! - **`items`**: the item store (id-keyed in-memory map with a monotonic
//!   id counter), the request/response protocol types, and the axum
//!   handlers wiring HTTP verbs to store operations.

pub mod items;
