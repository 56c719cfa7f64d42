//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Inventory items table.
    ///
    /// The `id` column is the primary key (UUID, store-assigned by column
    /// default). CHECK constraints mirror the domain normalizer: non-blank
    /// `name`, `price >= 0`, `quantity >= 0`.
    items (id) {
        /// Primary key: UUID assigned by the database.
        id -> Uuid,
        /// Trimmed, non-blank display name.
        name -> Text,
        /// Free-text description, empty string when absent.
        description -> Text,
        /// Non-negative unit price.
        price -> Float8,
        /// Non-negative stock count.
        quantity -> Int4,
        /// Record creation timestamp, assigned by the database.
        created_at -> Timestamptz,
    }
}
