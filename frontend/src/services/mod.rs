//! Backend and browser services.
//!
//! This module provides services for work that leaves the component tree:
//!
//! # Services
//!
//! - [`reader`] - Read a picked file and Base64-encode it
//! - [`submit`] - Send the query and archive to the ROTTEN backend

pub mod reader;
pub mod submit;

pub use reader::*;
pub use submit::*;
