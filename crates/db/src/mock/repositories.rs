use async_trait::async_trait;
use interview_core::models::user::{Availability, NewUser, User};
use mockall::mock;

use crate::store::UserStore;

// Mock store for testing failure paths
mock! {
    pub UserStore {}

    #[async_trait]
    impl UserStore for UserStore {
        async fn create(&self, new_user: NewUser) -> eyre::Result<User>;

        async fn list(&self, search: Option<String>) -> eyre::Result<Vec<User>>;

        async fn get_by_id(&self, id: i64) -> eyre::Result<Option<User>>;

        async fn update_availability(
            &self,
            id: i64,
            availability: Availability,
        ) -> eyre::Result<()>;
    }
}
