//! Translation registry module.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lingua::registry::{Registry, FilesystemSource};
//! ```

pub use lingua_registry::*;
