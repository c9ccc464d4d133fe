use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A stored item record.
///
/// The typed fields carry the schema the API validates. Anything else the
/// caller submits lands in `extra` and is flattened back to the top level
/// of the JSON object on output, so clients see one flat record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single failed check on a request payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Item not found")]
    NotFound,
    #[error("invalid item payload")]
    Validation(Vec<FieldError>),
}

/// A validated item payload that has not been assigned an id yet.
///
/// Splitting validation from id assignment keeps the id counter untouched
/// when a create request fails.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub extra: Map<String, Value>,
}

impl ItemDraft {
    /// Validates a create payload.
    ///
    /// Required: `name` (non-empty string) and `price` (number). `quantity`
    /// defaults to 0 when omitted. A caller-supplied `id` is dropped; the
    /// server owns id assignment. All other keys are kept verbatim.
    pub fn from_payload(payload: Value) -> Result<Self, StoreError> {
        let mut fields = match payload {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::Validation(vec![FieldError::new(
                    "body",
                    "expected a JSON object",
                )]));
            }
        };

        let mut errors = Vec::new();

        let name = match fields.remove("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Some(name),
            Some(Value::String(_)) => {
                errors.push(FieldError::new("name", "must be a non-empty string"));
                None
            }
            Some(_) => {
                errors.push(FieldError::new("name", "must be a string"));
                None
            }
            None => {
                errors.push(FieldError::new("name", "field is required"));
                None
            }
        };

        let description = match fields.remove("description") {
            Some(Value::String(description)) => Some(description),
            Some(Value::Null) | None => None,
            Some(_) => {
                errors.push(FieldError::new("description", "must be a string or null"));
                None
            }
        };

        let price = match fields.remove("price") {
            Some(Value::Number(price)) => match price.as_f64() {
                Some(price) => Some(price),
                None => {
                    errors.push(FieldError::new("price", "must be a number"));
                    None
                }
            },
            Some(_) => {
                errors.push(FieldError::new("price", "must be a number"));
                None
            }
            None => {
                errors.push(FieldError::new("price", "field is required"));
                None
            }
        };

        let quantity = match fields.remove("quantity") {
            Some(Value::Number(quantity)) => match quantity.as_i64() {
                Some(quantity) => quantity,
                None => {
                    errors.push(FieldError::new("quantity", "must be an integer"));
                    0
                }
            },
            Some(_) => {
                errors.push(FieldError::new("quantity", "must be an integer"));
                0
            }
            None => 0,
        };

        // The server assigns ids; a caller-supplied one is meaningless.
        fields.remove("id");

        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        Ok(Self {
            name: name.unwrap_or_default(),
            description,
            price: price.unwrap_or_default(),
            quantity,
            extra: fields,
        })
    }

    pub fn into_item(self, id: u64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            extra: self.extra,
        }
    }
}

/// A partial update, tracking which keys were present in the request.
///
/// `description` is doubly optional: the outer level records presence, the
/// inner level records an explicit null. Omitting a key leaves the stored
/// field untouched; sending `"description": null` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub extra: Map<String, Value>,
}

impl ItemPatch {
    /// Validates an update payload. Only keys present in the payload are
    /// captured; `id` is immutable and rejected outright.
    pub fn from_payload(payload: Value) -> Result<Self, StoreError> {
        let mut fields = match payload {
            Value::Object(map) => map,
            _ => {
                return Err(StoreError::Validation(vec![FieldError::new(
                    "body",
                    "expected a JSON object",
                )]));
            }
        };

        let mut errors = Vec::new();
        let mut patch = ItemPatch::default();

        if fields.remove("id").is_some() {
            errors.push(FieldError::new("id", "id is immutable"));
        }

        match fields.remove("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => patch.name = Some(name),
            Some(Value::String(_)) => {
                errors.push(FieldError::new("name", "must be a non-empty string"));
            }
            Some(_) => errors.push(FieldError::new("name", "must be a string")),
            None => {}
        }

        match fields.remove("description") {
            Some(Value::String(description)) => patch.description = Some(Some(description)),
            Some(Value::Null) => patch.description = Some(None),
            Some(_) => {
                errors.push(FieldError::new("description", "must be a string or null"));
            }
            None => {}
        }

        match fields.remove("price") {
            Some(Value::Number(price)) => match price.as_f64() {
                Some(price) => patch.price = Some(price),
                None => errors.push(FieldError::new("price", "must be a number")),
            },
            Some(_) => errors.push(FieldError::new("price", "must be a number")),
            None => {}
        }

        match fields.remove("quantity") {
            Some(Value::Number(quantity)) => match quantity.as_i64() {
                Some(quantity) => patch.quantity = Some(quantity),
                None => errors.push(FieldError::new("quantity", "must be an integer")),
            },
            Some(_) => errors.push(FieldError::new("quantity", "must be an integer")),
            None => {}
        }

        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        patch.extra = fields;
        Ok(patch)
    }
}

impl Item {
    /// Merges a validated patch into this item. Only keys the patch carries
    /// are overwritten.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        for (key, value) in &patch.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}
