//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed inventory entities used by the HTTP and
//! persistence layers. Types here are transport agnostic; inbound adapters map
//! them to HTTP responses and outbound adapters map them to rows.
//!
//! Public surface:
//! - [`Item`] — the persisted inventory record.
//! - [`ItemDraft`] — validated, normalized item fields ready to persist.
//! - [`Error`] / [`ErrorCode`] — transport-agnostic failure envelope.
//! - [`ports`] — traits describing how the domain reaches driven adapters.

pub mod error;
pub mod item;
pub mod ports;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::item::{FieldValue, Item, ItemDraft, ItemId, ItemInput, ItemValidationError};

/// Response header carrying the request-scoped trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use stockroom::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("missing"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
