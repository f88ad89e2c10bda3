//! Catalog readers module.
//!
//! This module provides the binary and key/value catalog readers.
//!
//! # Examples
//!
//! ```rust,no_run
//! use lingua::catalog::{MappingReader, MoReader};
//! ```

pub use lingua_catalog::*;
