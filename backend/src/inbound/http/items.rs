//! Item API handlers.
//!
//! ```text
//! GET    /api/items
//! POST   /api/items
//! PUT    /api/items/{id}
//! DELETE /api/items/{id}
//! ```
//!
//! Every write re-runs the domain normalizer regardless of any client-side
//! checks; validation failures come back as 400 with a structured details
//! object, distinct from 500 persistence failures.

use std::str::FromStr;

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::ItemRepositoryError;
use crate::domain::{Error, FieldValue, Item, ItemDraft, ItemId, ItemInput};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{invalid_identifier_error, map_validation_error};
use crate::inbound::http::ApiResult;

/// Request payload for creating or updating an item.
///
/// All fields are optional at the transport layer; the domain normalizer
/// decides which absences are fatal. `price` and `quantity` accept a JSON
/// number or a numeric string.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    /// Display name for the item.
    pub name: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Unit price, number or numeric string.
    pub price: Option<FieldValue>,
    /// Stock count, integer or numeric string.
    pub quantity: Option<FieldValue>,
}

impl From<ItemPayload> for ItemInput {
    fn from(value: ItemPayload) -> Self {
        Self {
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

/// Response payload for a stored item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Store-assigned identifier.
    pub id: String,
    /// Trimmed display name.
    pub name: String,
    /// Description; empty string when none was supplied.
    pub description: String,
    /// Non-negative unit price.
    pub price: f64,
    /// Non-negative stock count.
    pub quantity: u32,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
            created_at: value.created_at.to_rfc3339(),
        }
    }
}

fn not_found_error() -> Error {
    Error::not_found("Item not found")
}

/// Persistence failures surface as generic 500s; the detail stays in the log.
fn map_repository_error(err: &ItemRepositoryError) -> Error {
    error!(error = %err, "item repository operation failed");
    Error::internal("Internal server error")
}

fn parse_item_id(raw: &str) -> Result<ItemId, Error> {
    ItemId::from_str(raw).map_err(|_| invalid_identifier_error(raw))
}

fn normalize_payload(payload: ItemPayload) -> Result<ItemDraft, Error> {
    ItemDraft::normalize(ItemInput::from(payload)).map_err(|err| map_validation_error(&err))
}

/// List all stored items.
#[utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All stored items", body = [ItemResponse]),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let items = state
        .items
        .list()
        .await
        .map_err(|err| map_repository_error(&err))?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Create a new item.
///
/// The store assigns the identifier and creation timestamp; the response
/// carries the full stored record.
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Created item", body = ItemResponse),
        (status = 400, description = "Validation failure", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<HttpResponse> {
    let draft = normalize_payload(payload.into_inner())?;
    let created = state
        .items
        .insert(&draft)
        .await
        .map_err(|err| map_repository_error(&err))?;
    Ok(HttpResponse::Created().json(ItemResponse::from(created)))
}

/// Replace the mutable fields of an existing item.
///
/// `id` and `createdAt` are immutable; an unmatched identifier yields 404
/// and never creates a record.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    request_body = ItemPayload,
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 400, description = "Validation failure", body = Error),
        (status = 404, description = "No item matches the identifier", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ItemPayload>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_item_id(&path.into_inner())?;
    let draft = normalize_payload(payload.into_inner())?;
    let updated = state
        .items
        .update(&id, &draft)
        .await
        .map_err(|err| map_repository_error(&err))?
        .ok_or_else(not_found_error)?;
    Ok(web::Json(ItemResponse::from(updated)))
}

/// Remove an item.
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = String, Path, description = "Item identifier")),
    responses(
        (status = 204, description = "Item removed"),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "No item matches the identifier", body = Error),
        (status = 500, description = "Store failure", body = Error)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_item_id(&path.into_inner())?;
    let removed = state
        .items
        .delete(&id)
        .await
        .map_err(|err| map_repository_error(&err))?;
    if !removed {
        return Err(not_found_error());
    }
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use chrono::Utc;
    use rstest::rstest;

    fn widget_payload() -> ItemPayload {
        ItemPayload {
            name: Some("Widget".to_owned()),
            description: None,
            price: Some(FieldValue::Number(9.99)),
            quantity: Some(FieldValue::Number(5.0)),
        }
    }

    #[rstest]
    fn normalize_payload_accepts_valid_input() {
        let draft = normalize_payload(widget_payload()).expect("valid payload");
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.description, "");
    }

    #[rstest]
    fn normalize_payload_rejects_negative_price() {
        let err = normalize_payload(ItemPayload {
            price: Some(FieldValue::Number(-1.0)),
            ..widget_payload()
        })
        .expect_err("negative price rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().and_then(|v| v.as_object()).expect("details");
        assert_eq!(details.get("field").and_then(|v| v.as_str()), Some("price"));
    }

    #[rstest]
    fn parse_item_id_rejects_malformed_uuid() {
        let err = parse_item_id("not-a-uuid").expect_err("malformed id rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn parse_item_id_accepts_uuid() {
        let id = ItemId::random();
        let parsed = parse_item_id(&id.to_string()).expect("valid id");
        assert_eq!(parsed, id);
    }

    #[rstest]
    fn item_response_maps_domain_values() {
        let created_at = Utc::now();
        let item = Item {
            id: ItemId::random(),
            name: "Widget".to_owned(),
            description: "blue".to_owned(),
            price: 12.50,
            quantity: 3,
            created_at,
        };

        let response = ItemResponse::from(item.clone());
        assert_eq!(response.id, item.id.to_string());
        assert_eq!(response.created_at, created_at.to_rfc3339());
        assert_eq!(response.quantity, 3);
    }

    #[rstest]
    fn repository_errors_redact_to_internal() {
        let err = map_repository_error(&ItemRepositoryError::connection("refused"));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
