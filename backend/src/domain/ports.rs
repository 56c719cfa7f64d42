//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;

use super::{Item, ItemDraft, ItemId};

/// Persistence errors raised by [`ItemRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemRepositoryError {
    /// Store connection could not be established or was lost.
    #[error("item repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("item repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl ItemRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for the items collection.
///
/// The store assigns identifiers and creation timestamps; callers only ever
/// supply validated [`ItemDraft`] field sets. Absent records are a normal
/// negative outcome (`None`/`false`), not an error.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item, returning the stored record with its assigned
    /// identifier and creation timestamp.
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, ItemRepositoryError>;

    /// Return all stored items in a stable order for a given storage state.
    ///
    /// Produces an empty vector, never an error, when no items exist.
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Replace the mutable fields of the record matching `id`.
    ///
    /// Returns the updated record, or `None` when no record matches; an
    /// unmatched identifier never creates a record. `id` and `created_at`
    /// are left untouched.
    async fn update(
        &self,
        id: &ItemId,
        draft: &ItemDraft,
    ) -> Result<Option<Item>, ItemRepositoryError>;

    /// Remove the record matching `id`, reporting whether one existed.
    async fn delete(&self, id: &ItemId) -> Result<bool, ItemRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryItemRepository;
    use actix_rt::System;
    use rstest::{fixture, rstest};

    #[fixture]
    fn widget_draft() -> ItemDraft {
        ItemDraft {
            name: "Widget".to_owned(),
            description: String::new(),
            price: 9.99,
            quantity: 5,
        }
    }

    #[rstest]
    fn insert_then_list_round_trips(widget_draft: ItemDraft) {
        let repo = MemoryItemRepository::default();

        System::new().block_on(async move {
            let created = repo.insert(&widget_draft).await.expect("insert succeeds");
            assert_eq!(created.name, "Widget");
            assert_eq!(created.quantity, 5);

            let listed = repo.list().await.expect("list succeeds");
            assert_eq!(listed, vec![created]);
        });
    }

    #[rstest]
    fn list_is_idempotent_without_writes(widget_draft: ItemDraft) {
        let repo = MemoryItemRepository::default();

        System::new().block_on(async move {
            repo.insert(&widget_draft).await.expect("insert succeeds");
            let first = repo.list().await.expect("first list");
            let second = repo.list().await.expect("second list");
            assert_eq!(first, second);
        });
    }

    #[rstest]
    fn update_replaces_mutable_fields_only(widget_draft: ItemDraft) {
        let repo = MemoryItemRepository::default();

        System::new().block_on(async move {
            let created = repo.insert(&widget_draft).await.expect("insert succeeds");

            let revised = ItemDraft {
                name: "Widget".to_owned(),
                description: "blue".to_owned(),
                price: 12.50,
                quantity: 3,
            };
            let updated = repo
                .update(&created.id, &revised)
                .await
                .expect("update succeeds")
                .expect("record found");

            assert_eq!(updated.id, created.id);
            assert_eq!(updated.created_at, created.created_at);
            assert_eq!(updated.description, "blue");
            assert_eq!(updated.price, 12.50);
            assert_eq!(updated.quantity, 3);
        });
    }

    #[rstest]
    fn update_unknown_id_returns_none_and_alters_nothing(widget_draft: ItemDraft) {
        let repo = MemoryItemRepository::default();

        System::new().block_on(async move {
            let created = repo.insert(&widget_draft).await.expect("insert succeeds");
            let before = repo.list().await.expect("list before");

            let missing = repo
                .update(&ItemId::random(), &widget_draft)
                .await
                .expect("update succeeds");
            assert!(missing.is_none());

            let after = repo.list().await.expect("list after");
            assert_eq!(before, after);
            assert_eq!(after, vec![created]);
        });
    }

    #[rstest]
    fn delete_removes_exactly_the_matched_record(widget_draft: ItemDraft) {
        let repo = MemoryItemRepository::default();

        System::new().block_on(async move {
            let first = repo.insert(&widget_draft).await.expect("insert succeeds");
            let second = repo.insert(&widget_draft).await.expect("insert succeeds");

            assert!(repo.delete(&first.id).await.expect("delete succeeds"));
            let remaining = repo.list().await.expect("list succeeds");
            assert_eq!(remaining, vec![second]);
        });
    }

    #[rstest]
    fn delete_unknown_id_returns_false(widget_draft: ItemDraft) {
        let repo = MemoryItemRepository::default();

        System::new().block_on(async move {
            repo.insert(&widget_draft).await.expect("insert succeeds");
            let removed = repo.delete(&ItemId::random()).await.expect("delete succeeds");
            assert!(!removed);
            assert_eq!(repo.list().await.expect("list succeeds").len(), 1);
        });
    }
}
