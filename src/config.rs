//! Detection configuration.

use serde::{Deserialize, Serialize};

use crate::common::{DEFAULT_READ_LIMIT, Error, MAX_READ_LIMIT, Result};

/// Tunables for a [`Detector`](crate::Detector).
///
/// The read limit is the number of leading bytes handed to the matchers.
/// Raising it lets the ZIP and OLE matchers see more of the container index
/// at the cost of a larger per-call buffer for stream sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of bytes read from the input
    pub read_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_limit: DEFAULT_READ_LIMIT,
        }
    }
}

impl Config {
    /// Configuration with the default read limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read limit.
    pub fn with_read_limit(mut self, read_limit: usize) -> Self {
        self.read_limit = read_limit;
        self
    }

    /// Reject limits that are zero or above [`MAX_READ_LIMIT`].
    pub fn validate(&self) -> Result<()> {
        if self.read_limit == 0 {
            return Err(Error::InvalidConfig(
                "read_limit must be greater than zero".to_string(),
            ));
        }
        if self.read_limit > MAX_READ_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "read_limit {} exceeds maximum of {}",
                self.read_limit, MAX_READ_LIMIT
            )));
        }
        Ok(())
    }

    /// Load a configuration from YAML and validate it.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimetree::Config;
    /// let config = Config::from_yaml("read_limit: 8192\n")?;
    /// assert_eq!(config.read_limit, 8192);
    /// # Ok::<(), mimetree::Error>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self> {
        let config: Config = serde_saphyr::from_str(source)
            .map_err(|e| Error::Serialization(format!("Failed to parse configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}
