//! Configuration for TOON serialization and parsing.
//!
//! [`Config`] has no delimiter choice and no length marker, since this
//! grammar doesn't have either, but indentation, the flatten-path
//! separator, the flatten depth cap, and the advanced (nested-object) mode
//! are all caller-tunable.
//!
//! ## Examples
//!
//! ```rust
//! use toon_rs::{Config, to_string_with_config};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//! let config = Config::new().with_indent_size(4);
//! let toon = to_string_with_config(&data, &config).unwrap();
//! ```

/// Configuration controlling indentation, flatten behavior, and the
/// advanced (nested-object) mode.
///
/// # Examples
///
/// ```rust
/// use toon_rs::Config;
///
/// let config = Config::new();
/// assert_eq!(config.indent_size, 2);
/// assert_eq!(config.separator, ".");
/// assert!(!config.advanced);
///
/// let config = Config::new()
///     .with_indent_size(4)
///     .with_separator("_")
///     .with_advanced(true);
/// assert_eq!(config.indent_size, 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Spaces per indentation level in a row. Default 2.
    pub indent_size: usize,
    /// Path separator used by flatten/unflatten. Default `.`.
    pub separator: String,
    /// Depth at which flatten stops descending and keeps an opaque object.
    /// `None` means unbounded.
    pub max_flatten_depth: Option<usize>,
    /// Whether to flatten/unflatten nested objects at all. When `false`,
    /// dotted keys are treated as ordinary literal field names.
    pub advanced: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent_size: 2,
            separator: ".".to_string(),
            max_flatten_depth: None,
            advanced: false,
        }
    }
}

impl Config {
    /// Creates the default configuration (2-space indent, `.` separator, advanced mode off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with advanced (nested-object) mode enabled.
    #[must_use]
    pub fn advanced() -> Self {
        Config {
            advanced: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Sets the flatten path separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the maximum flatten depth.
    #[must_use]
    pub fn with_max_flatten_depth(mut self, depth: usize) -> Self {
        self.max_flatten_depth = Some(depth);
        self
    }

    /// Enables or disables advanced (nested-object) mode.
    #[must_use]
    pub fn with_advanced(mut self, advanced: bool) -> Self {
        self.advanced = advanced;
        self
    }
}
