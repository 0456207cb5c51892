//! REST API version numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// A `major.minor` REST API version, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    major: u16,
    minor: u16,
}

impl ApiVersion {
    /// The first version with split editing/scheduling flow settings.
    pub const SPLIT_FLOW_SETTINGS: Self = Self::new(3, 10);

    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Major component.
    #[must_use]
    pub fn major(&self) -> u16 {
        self.major
    }

    /// Minor component.
    #[must_use]
    pub fn minor(&self) -> u16 {
        self.minor
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::SPLIT_FLOW_SETTINGS
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidApiVersion(s.to_owned());
        let (major, minor) = s.trim().split_once('.').ok_or_else(invalid)?;
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_major_minor() {
        let v: ApiVersion = "3.19".parse().expect("valid version");
        assert_eq!(v, ApiVersion::new(3, 19));
        assert_eq!(v.to_string(), "3.19");
    }

    #[test]
    fn test_should_order_numerically() {
        let old: ApiVersion = "3.9".parse().expect("valid version");
        let new: ApiVersion = "3.10".parse().expect("valid version");
        assert!(old < new);
        assert!(new >= ApiVersion::SPLIT_FLOW_SETTINGS);
    }

    #[test]
    fn test_should_reject_malformed_version() {
        assert!("3".parse::<ApiVersion>().is_err());
        assert!("three.ten".parse::<ApiVersion>().is_err());
        assert!("3.x".parse::<ApiVersion>().is_err());
    }
}
