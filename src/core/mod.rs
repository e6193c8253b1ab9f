//! core
//!
//! Support code that does not touch libgit2.
//!
//! # Modules
//!
//! - [`config`] - Settings schema and loading
//! - [`paths`] - Path splitting and settings file locations

pub mod config;
pub mod paths;
