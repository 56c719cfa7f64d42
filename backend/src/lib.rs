//! Inventory-tracking backend library.
//!
//! A REST API over a single items collection: raw field input is validated
//! and normalized in the domain, persisted through the `ItemRepository`
//! port, and surfaced as JSON by the Actix inbound adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
