//! Centralized configuration values shared across the ZenScript mapper crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

/// Remaining stack space below which the mapper grows the stack before
/// descending into another CST node.
///
/// # Examples
/// ```
/// use config::constants::STACKER_RED_ZONE_BYTES;
/// assert!(STACKER_RED_ZONE_BYTES >= 32 * 1024);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 128 * 1024;

/// Bytes of stack space allocated each time the `stacker` crate grows the
/// stack during deep recursion.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Whether an unmapped rule shape yields an opaque generic node (permissive)
/// instead of failing the subtree (strict).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ALLOW_GENERIC_NODE;
/// assert!(DEFAULT_ALLOW_GENERIC_NODE);
/// ```
pub const DEFAULT_ALLOW_GENERIC_NODE: bool = true;

/// Immutable snapshot of the settings a mapper is built with.
///
/// # Examples
/// ```
/// use config::constants::MapperConfig;
/// let config = MapperConfig::default();
/// assert!(config.stack_size > config.stack_red_zone);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapperConfig {
    /// Permissive (`true`) or strict (`false`) handling of unmapped rule shapes.
    pub allow_generic_node: bool,
    /// Stack red zone passed to `stacker::maybe_grow`.
    pub stack_red_zone: usize,
    /// Stack segment size passed to `stacker::maybe_grow`.
    pub stack_size: usize,
}

impl MapperConfig {
    /// Builds a configuration, validating the recursion limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MapperConfig;
    /// let cfg = MapperConfig::new(false, 64 * 1024, 1024 * 1024).expect("valid config");
    /// assert!(!cfg.allow_generic_node);
    /// ```
    pub fn new(
        allow_generic_node: bool,
        stack_red_zone: usize,
        stack_size: usize,
    ) -> Result<Self, ConfigError> {
        if stack_red_zone == 0 {
            return Err(ConfigError::InvalidRedZone(stack_red_zone));
        }
        if stack_size <= stack_red_zone {
            return Err(ConfigError::InvalidStackSize {
                stack_size,
                red_zone: stack_red_zone,
            });
        }
        Ok(Self {
            allow_generic_node,
            stack_red_zone,
            stack_size,
        })
    }

    /// Default limits with unmapped shapes turned into generic nodes.
    pub fn permissive() -> Self {
        Self {
            allow_generic_node: true,
            ..Self::default()
        }
    }

    /// Default limits with unmapped shapes rejected.
    pub fn strict() -> Self {
        Self {
            allow_generic_node: false,
            ..Self::default()
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            allow_generic_node: DEFAULT_ALLOW_GENERIC_NODE,
            stack_red_zone: STACKER_RED_ZONE_BYTES,
            stack_size: STACKER_STACK_SIZE_BYTES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Raised when the red zone is zero.
    #[error("stack red zone must be positive: {0}")]
    InvalidRedZone(usize),
    /// Raised when the stack segment cannot hold the red zone.
    #[error("stack size {stack_size} must exceed red zone {red_zone}")]
    InvalidStackSize { stack_size: usize, red_zone: usize },
}
