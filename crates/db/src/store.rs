//! # User Store
//!
//! The storage interface the HTTP layer is written against. Handlers only
//! ever see an `Arc<dyn UserStore>`, so the PostgreSQL store, the in-memory
//! store and the mocks are interchangeable.

use async_trait::async_trait;
use eyre::Result;
use interview_core::models::user::{Availability, NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user without availability and returns it with its id
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Lists users ordered by id
    ///
    /// With a search term, only users whose name or role contains it
    /// (case-insensitively) are returned.
    async fn list(&self, search: Option<String>) -> Result<Vec<User>>;

    async fn get_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Replaces the user's availability window
    ///
    /// # Errors
    ///
    /// Fails if no user has the given id.
    async fn update_availability(&self, id: i64, availability: Availability) -> Result<()>;
}
