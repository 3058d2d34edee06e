//! Mapping limits and configuration

use crate::error::{CoreError, Result};
use serde::Deserialize;

/// Limits applied to a single mapping call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum nesting depth of structured fields (default: 32, hard: 256)
    pub max_depth: usize,
    /// Maximum bytes read from a reader input (default: 16 MiB, hard: 256 MiB)
    pub max_input_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_input_bytes: 16 * 1024 * 1024, // 16 MiB
        }
    }
}

impl Limits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_depth: 256,
            max_input_bytes: 256 * 1024 * 1024, // 256 MiB
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_depth > hard.max_depth {
            return Err(CoreError::LimitsExceedHardMaximums {
                reason: format!(
                    "max_depth {} exceeds hard limit {}",
                    self.max_depth, hard.max_depth
                ),
            });
        }

        if self.max_input_bytes > hard.max_input_bytes {
            return Err(CoreError::LimitsExceedHardMaximums {
                reason: format!(
                    "max_input_bytes {} exceeds hard limit {}",
                    self.max_input_bytes, hard.max_input_bytes
                ),
            });
        }

        Ok(())
    }

    /// Check a nesting depth against `max_depth`
    pub fn check_depth(&self, depth: usize, path: &str) -> Result<()> {
        if depth > self.max_depth {
            return Err(CoreError::DepthLimitExceeded {
                path: path.to_string(),
                depth,
                max_depth: self.max_depth,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_within_hard_max() {
        assert!(Limits::default().validate().is_ok());
        assert!(Limits::hard_maximums().validate().is_ok());
    }

    #[test]
    fn rejects_excessive_depth() {
        let limits = Limits {
            max_depth: 1_000,
            ..Limits::default()
        };
        assert!(matches!(
            limits.validate(),
            Err(CoreError::LimitsExceedHardMaximums { .. })
        ));
    }

    #[test]
    fn rejects_excessive_input() {
        let limits = Limits {
            max_input_bytes: 512 * 1024 * 1024,
            ..Limits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn check_depth_reports_path() {
        let limits = Limits {
            max_depth: 2,
            ..Limits::default()
        };
        assert!(limits.check_depth(2, "a/b").is_ok());
        let err = limits.check_depth(3, "a/b/c").unwrap_err();
        assert_eq!(
            err,
            CoreError::DepthLimitExceeded {
                path: "a/b/c".to_string(),
                depth: 3,
                max_depth: 2,
            }
        );
    }

    #[test]
    fn deserializes_partial_toml_with_defaults() {
        let limits: Limits = toml::from_str("max_depth = 8").unwrap();
        assert_eq!(limits.max_depth, 8);
        assert_eq!(limits.max_input_bytes, Limits::default().max_input_bytes);
    }
}
