/// Availability recording and slot matching
pub mod availability;
/// User registration and search
pub mod users;
