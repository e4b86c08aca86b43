//! Wire types for the Havoc mock user API
//!
//! The records produced here are the product of the service: flat user
//! profiles whose optional fields can be valid, null, or missing entirely
//! when challenge mode degrades them.

pub mod ids;
pub mod user;

pub use ids::UserId;
pub use user::{Address, Degradable, User};
