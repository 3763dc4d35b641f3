pub mod availability;
pub mod docs;
pub mod health;
pub mod users;
