//! # dotconf
//!
//! A small JSON configuration store addressed by dot-separated key paths,
//! with a CLI front end.
//!
//! ## Usage
//!
//! ```bash
//! dotconf set app.name BigUtility
//! dotconf get app.name
//! dotconf show
//! ```
//!
//! ## Modules
//!
//! - `store` - Path-addressed config tree with atomic JSON file persistence

pub mod store;

pub use store::{ConfigError, ConfigResult, ConfigStore, KeyPath};
