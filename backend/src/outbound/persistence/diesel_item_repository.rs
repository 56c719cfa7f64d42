//! PostgreSQL-backed `ItemRepository` implementation using Diesel ORM.
//!
//! The database assigns identifiers and creation timestamps via column
//! defaults, so inserts never supply either; updates only ever touch the
//! four mutable fields. CHECK constraints on the table re-enforce the
//! normalizer's invariants as a defense-in-depth layer.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, ItemId};

use super::models::{ItemChangeset, ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the `ItemRepository` port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain item repository errors.
fn map_pool_error(error: PoolError) -> ItemRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ItemRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to domain item repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ItemRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ItemRepositoryError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ItemRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            // A draft that slipped past the normalizer hit the table's floor
            // constraints.
            ItemRepositoryError::query("constraint violation")
        }
        _ => ItemRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain Item.
fn row_to_item(row: ItemRow) -> Item {
    #[expect(
        clippy::cast_sign_loss,
        reason = "quantity is non-negative by CHECK constraint"
    )]
    let quantity = row.quantity as u32;

    Item {
        id: ItemId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        price: row.price,
        quantity,
        created_at: row.created_at,
    }
}

/// Cast domain quantity (u32) to database quantity (i32).
#[expect(
    clippy::cast_possible_wrap,
    reason = "quantities beyond i32::MAX are rejected upstream in practice"
)]
fn cast_quantity_for_db(quantity: u32) -> i32 {
    quantity as i32
}

fn new_row<'a>(draft: &'a ItemDraft) -> NewItemRow<'a> {
    NewItemRow {
        name: &draft.name,
        description: &draft.description,
        price: draft.price,
        quantity: cast_quantity_for_db(draft.quantity),
    }
}

fn changeset<'a>(draft: &'a ItemDraft) -> ItemChangeset<'a> {
    ItemChangeset {
        name: &draft.name,
        description: &draft.description,
        price: draft.price,
        quantity: cast_quantity_for_db(draft.quantity),
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ItemRow = diesel::insert_into(items::table)
            .values(new_row(draft))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_item(row))
    }

    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Stable order for a given storage state; no ordering contract
        // beyond that.
        let rows: Vec<ItemRow> = items::table
            .order((items::created_at.asc(), items::id.asc()))
            .select(ItemRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn update(
        &self,
        id: &ItemId,
        draft: &ItemDraft,
    ) -> Result<Option<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ItemRow> = diesel::update(items::table.find(id.as_uuid()))
            .set(changeset(draft))
            .returning(ItemRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_item))
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(items::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
