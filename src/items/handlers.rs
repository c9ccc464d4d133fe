use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::sync::Arc;

use super::protocol::{
    ErrorBody, ErrorDetail, ItemEnvelope, ItemListResponse, MSG_CREATED, MSG_DELETED,
    MSG_NOT_FOUND, MSG_UPDATED, WelcomeResponse,
};
use super::store::ItemStore;
use super::types::{Item, StoreError};

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            StoreError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    detail: ErrorDetail::Message(MSG_NOT_FOUND.to_string()),
                }),
            )
                .into_response(),
            StoreError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    detail: ErrorDetail::Fields(errors),
                }),
            )
                .into_response(),
        }
    }
}

pub async fn handle_root() -> Json<WelcomeResponse> {
    let endpoints = HashMap::from([
        ("GET /items".to_string(), "Get all items".to_string()),
        ("GET /items/{id}".to_string(), "Get item by ID".to_string()),
        ("POST /items".to_string(), "Create new item".to_string()),
        ("PUT /items/{id}".to_string(), "Update item".to_string()),
        ("DELETE /items/{id}".to_string(), "Delete item".to_string()),
    ]);

    Json(WelcomeResponse {
        message: "Welcome to the Simple REST API".to_string(),
        endpoints,
    })
}

pub async fn handle_list_items(
    Extension(store): Extension<Arc<ItemStore>>,
) -> Json<ItemListResponse> {
    let items = store.list();
    let count = items.len();
    Json(ItemListResponse { items, count })
}

pub async fn handle_get_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, StoreError> {
    let item = store.get(id)?;
    Ok(Json(item))
}

pub async fn handle_create_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<ItemEnvelope>), StoreError> {
    let item = match store.create(payload) {
        Ok(item) => item,
        Err(e) => {
            tracing::error!("Failed to create item: {}", e);
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(ItemEnvelope {
            message: MSG_CREATED.to_string(),
            item,
        }),
    ))
}

pub async fn handle_update_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<u64>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ItemEnvelope>, StoreError> {
    let item = match store.update(id, payload) {
        Ok(item) => item,
        Err(e) => {
            tracing::error!("Failed to update item {}: {}", id, e);
            return Err(e);
        }
    };

    Ok(Json(ItemEnvelope {
        message: MSG_UPDATED.to_string(),
        item,
    }))
}

pub async fn handle_delete_item(
    Extension(store): Extension<Arc<ItemStore>>,
    Path(id): Path<u64>,
) -> Result<Json<ItemEnvelope>, StoreError> {
    let item = store.delete(id)?;

    Ok(Json(ItemEnvelope {
        message: MSG_DELETED.to_string(),
        item,
    }))
}
