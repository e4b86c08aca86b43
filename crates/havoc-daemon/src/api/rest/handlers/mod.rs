//! API request handlers

mod health;
mod users;

pub use health::*;
pub use users::*;
