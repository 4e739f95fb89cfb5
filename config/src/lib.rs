//! # Config Crate
//!
//! Centralized configuration for the ZenScript CST-to-AST mapper.
//! Recursion limits and the unmapped-rule policy default are defined here so
//! the mapper and its callers agree on a single source of truth.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MapperConfig, DEFAULT_ALLOW_GENERIC_NODE};
//!
//! let cfg = MapperConfig::default();
//! assert_eq!(cfg.allow_generic_node, DEFAULT_ALLOW_GENERIC_NODE);
//!
//! let strict = MapperConfig::strict();
//! assert!(!strict.allow_generic_node);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated**: Hand-built configurations go through `MapperConfig::new`
//! - **Immutable**: A configuration is copied into the mapper at construction

pub mod constants;
