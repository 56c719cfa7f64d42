//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the item endpoints, health probes, and the shared error
//! envelope. The generated specification backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::items::{ItemPayload, ItemResponse};

/// OpenAPI document for the REST API.
///
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockroom API",
        description = "Inventory-tracking HTTP interface: create, list, edit, and remove items."
    ),
    paths(
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ItemPayload, ItemResponse, Error, ErrorCode)),
    tags(
        (name = "items", description = "Inventory item operations"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
