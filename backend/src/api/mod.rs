//! HTTP API module.
//!
//! This module provides the HTTP server and API types for the ROTTEN backend.

pub mod server;
pub mod types;
pub mod logs;

pub use server::{router, serve, start_server, AppState};
pub use types::*;
pub use logs::*;
