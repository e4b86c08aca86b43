//! Havoc daemon library
//!
//! This module provides the components for the Havoc daemon:
//! - REST API handlers and the chaos middleware
//! - Configuration loading
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
