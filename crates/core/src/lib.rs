//! # Interview Core
//!
//! Domain types shared by the store and the HTTP layer: users and their
//! roles, availability windows, the wire timestamp codec and the slot
//! calculation that matches a candidate with an interviewer.

pub mod errors;
pub mod models;
pub mod slots;
pub mod timestamp;
