//! Test doubles shared between unit and integration tests.
//!
//! Compiled into the crate only for `cfg(test)` or when the `test-support`
//! feature is enabled, so production builds carry none of it.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, ItemId};

/// In-memory [`ItemRepository`] preserving insertion order.
///
/// Identifier and creation-timestamp assignment mimic the store: both are set
/// here, at insert time, and never touched by updates.
#[derive(Debug, Default)]
pub struct MemoryItemRepository {
    store: Mutex<Vec<Item>>,
    fail_next: Mutex<bool>,
}

impl MemoryItemRepository {
    /// Make the next repository call fail with a connection error, to
    /// exercise the persistence-failure paths.
    pub fn fail_next_call(&self) {
        *self.fail_next.lock().expect("flag poisoned") = true;
    }

    fn check_failure(&self) -> Result<(), ItemRepositoryError> {
        let mut flag = self.fail_next.lock().expect("flag poisoned");
        if *flag {
            *flag = false;
            return Err(ItemRepositoryError::connection("simulated outage"));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn insert(&self, draft: &ItemDraft) -> Result<Item, ItemRepositoryError> {
        self.check_failure()?;
        let item = Item {
            id: ItemId::random(),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            quantity: draft.quantity,
            created_at: Utc::now(),
        };
        let mut guard = self.store.lock().expect("store poisoned");
        guard.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        self.check_failure()?;
        let guard = self.store.lock().expect("store poisoned");
        Ok(guard.clone())
    }

    async fn update(
        &self,
        id: &ItemId,
        draft: &ItemDraft,
    ) -> Result<Option<Item>, ItemRepositoryError> {
        self.check_failure()?;
        let mut guard = self.store.lock().expect("store poisoned");
        let Some(existing) = guard.iter_mut().find(|item| item.id == *id) else {
            return Ok(None);
        };
        existing.name = draft.name.clone();
        existing.description = draft.description.clone();
        existing.price = draft.price;
        existing.quantity = draft.quantity;
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &ItemId) -> Result<bool, ItemRepositoryError> {
        self.check_failure()?;
        let mut guard = self.store.lock().expect("store poisoned");
        let before = guard.len();
        guard.retain(|item| item.id != *id);
        Ok(guard.len() < before)
    }
}
