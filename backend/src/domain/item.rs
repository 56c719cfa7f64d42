//! Inventory item data model and field validation.
//!
//! This module defines the `Item` aggregate together with the
//! validator/normalizer that gates every write: raw field input is checked in
//! a fixed order and either canonicalised into an [`ItemDraft`] or rejected
//! with the first failing rule. Identifiers and creation timestamps are
//! assigned by the store, never by callers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable item identifier stored as a UUID.
///
/// Assigned exactly once, by the store, at creation. Updates never reassign
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`ItemId`].
    ///
    /// Production identifiers come from the store; this exists for fixtures
    /// and in-memory repositories.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The persisted inventory record.
///
/// ## Invariants
/// - `price >= 0` and `quantity >= 0` hold for every persisted record.
/// - `name` is never empty or whitespace-only after normalization.
/// - `id` and `created_at` are immutable once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store-assigned unique identifier.
    pub id: ItemId,
    /// Trimmed, non-empty display name.
    pub name: String,
    /// Optional free text; empty string when the caller supplied none.
    pub description: String,
    /// Unit price, always non-negative.
    pub price: f64,
    /// Stock count, always non-negative.
    pub quantity: u32,
    /// Assigned once at creation, never mutated.
    pub created_at: DateTime<Utc>,
}

/// Raw numeric field input: a JSON number or a numeric string.
///
/// Mirrors the coercion the original store layer performed, so `"9.99"` and
/// `9.99` are both accepted for `price`. Anything else fails validation for
/// the field that carried it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(f64),
    /// A stringified number, trimmed before parsing.
    Text(String),
    /// Any other JSON shape; never parses as a number.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Interpret the raw value as a finite number, if possible.
    pub fn as_number(&self) -> Option<f64> {
        let parsed = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        };
        parsed.filter(|n| n.is_finite())
    }
}

/// Raw field input for create and update requests, before validation.
///
/// All fields are optional at this stage; [`ItemDraft::normalize`] decides
/// which absences are fatal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemInput {
    /// Raw name, possibly missing or padded with whitespace.
    pub name: Option<String>,
    /// Raw description, possibly missing.
    pub description: Option<String>,
    /// Raw price, possibly missing or non-numeric.
    pub price: Option<FieldValue>,
    /// Raw quantity, possibly missing, non-numeric, or fractional.
    pub quantity: Option<FieldValue>,
}

/// Rejection reasons produced by [`ItemDraft::normalize`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemValidationError {
    /// A required field was absent or blank.
    #[error("missing required field: {field}")]
    MissingField {
        /// The offending field name.
        field: &'static str,
    },
    /// A field was present but violated its rule.
    #[error("invalid value for field: {field}")]
    InvalidField {
        /// The offending field name.
        field: &'static str,
    },
}

impl ItemValidationError {
    /// Helper for absent or blank required fields.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Helper for rule violations on present fields.
    pub fn invalid(field: &'static str) -> Self {
        Self::InvalidField { field }
    }

    /// The field the rejection refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field } | Self::InvalidField { field } => field,
        }
    }
}

/// Validated, normalized item fields ready to persist.
///
/// Construction goes through [`ItemDraft::normalize`], so a draft always
/// satisfies the invariants the store re-checks: trimmed non-empty `name`,
/// `price >= 0`, integral `quantity >= 0`.
///
/// # Examples
/// ```
/// use stockroom::domain::{FieldValue, ItemDraft, ItemInput};
///
/// let draft = ItemDraft::normalize(ItemInput {
///     name: Some("  Widget  ".into()),
///     description: None,
///     price: Some(FieldValue::Text("9.99".into())),
///     quantity: Some(FieldValue::Number(5.0)),
/// })
/// .expect("valid input");
///
/// assert_eq!(draft.name, "Widget");
/// assert_eq!(draft.description, "");
/// assert_eq!(draft.price, 9.99);
/// assert_eq!(draft.quantity, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    /// Trimmed, non-empty display name.
    pub name: String,
    /// Trimmed description; empty when the caller supplied none.
    pub description: String,
    /// Non-negative unit price.
    pub price: f64,
    /// Non-negative stock count.
    pub quantity: u32,
}

impl ItemDraft {
    /// Validate and canonicalise raw field input.
    ///
    /// Rules apply in order and short-circuit on the first failure:
    /// 1. `name` present and non-empty after trimming.
    /// 2. `price` present, parseable as a number, and non-negative.
    /// 3. `quantity` present, parseable as a non-negative integer.
    /// 4. `description` trimmed; absent becomes the empty string.
    ///
    /// # Errors
    /// Returns [`ItemValidationError::MissingField`] for rule 1 and
    /// [`ItemValidationError::InvalidField`] for rules 2 and 3. The input is
    /// not mutated on rejection.
    pub fn normalize(input: ItemInput) -> Result<Self, ItemValidationError> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|trimmed| !trimmed.is_empty())
            .ok_or_else(|| ItemValidationError::missing("name"))?
            .to_owned();

        let price = input
            .price
            .as_ref()
            .and_then(FieldValue::as_number)
            .filter(|value| *value >= 0.0)
            .ok_or_else(|| ItemValidationError::invalid("price"))?;

        let quantity = input
            .quantity
            .as_ref()
            .and_then(FieldValue::as_number)
            .and_then(parse_quantity)
            .ok_or_else(|| ItemValidationError::invalid("quantity"))?;

        let description = input
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned();

        Ok(Self {
            name,
            description,
            price,
            quantity,
        })
    }
}

/// Accept a numeric value as a quantity when it is a non-negative integer
/// representable as `u32`.
fn parse_quantity(value: f64) -> Option<u32> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range and integrality checked above"
    )]
    Some(value as u32)
}
