//! In-process [`UserStore`] used when no database is configured and by tests.

use async_trait::async_trait;
use eyre::{Result, eyre};
use interview_core::models::user::{Availability, NewUser, User};
use tokio::sync::RwLock;

use crate::store::UserStore;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        // Ids are never reused since users are never deleted
        let id = users.last().map_or(1, |user| user.id + 1);
        let user = User {
            id,
            name: new_user.name,
            role: new_user.role,
            available_time: None,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn list(&self, search: Option<String>) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let needle = search.filter(|s| !s.is_empty()).map(|s| s.to_lowercase());

        Ok(users
            .iter()
            .filter(|user| match &needle {
                Some(needle) => {
                    user.name.to_lowercase().contains(needle)
                        || user.role.as_str().to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn update_availability(&self, id: i64, availability: Availability) -> Result<()> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| eyre!("User with id {id} does not exist"))?;
        user.available_time = Some(availability);

        Ok(())
    }
}
