//! Item API Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) the service
//! exposes to clients.
//!
//! These structures are serialized as JSON over HTTP; the shapes match the
//! contract documented on the welcome endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::{FieldError, Item};

// --- API Endpoints ---

/// Welcome endpoint listing the available operations.
pub const ENDPOINT_ROOT: &str = "/";
/// Collection endpoint: GET lists all items, POST creates one.
pub const ENDPOINT_ITEMS: &str = "/items";
/// Single-item endpoint: GET / PUT / DELETE by id.
pub const ENDPOINT_ITEM: &str = "/items/:id";

// --- Response Messages ---

pub const MSG_CREATED: &str = "Item created successfully";
pub const MSG_UPDATED: &str = "Item updated successfully";
pub const MSG_DELETED: &str = "Item deleted successfully";
pub const MSG_NOT_FOUND: &str = "Item not found";

// --- Data Transfer Objects ---

/// Payload of the welcome endpoint: a short greeting plus a map from
/// "METHOD /path" to a description of what it does.
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: HashMap<String, String>,
}

/// Response for listing the collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
    pub count: usize,
}

/// Wrapper returned by the mutating endpoints (create/update/delete):
/// a human-readable confirmation plus the affected item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemEnvelope {
    pub message: String,
    pub item: Item,
}

/// Error body. `detail` is either a plain message (404) or a list of
/// field-level errors (422).
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}
