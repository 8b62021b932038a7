//! Compatibility version identifiers
//!
//! A [`Version`] is a `major.minor.micro` triple. Its integer form
//! (`major * 1_000_000 + minor * 1_000 + micro`) gives the total order used
//! when normalizing a requested version onto a behavioral breakpoint.
//!
//! Versions serialize as their dotted string form (`"2.3.22"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LumenError;

/// A `major.minor.micro` compatibility version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
}

impl Version {
    /// Baseline behavior: deep-copy wrapping of every container
    pub const V2_3_0: Version = Version::new(2, 3, 0);
    /// First release after the baseline with its own normalized floor
    pub const V2_3_21: Version = Version::new(2, 3, 21);
    /// Maps, lists and arrays are wrapped with zero-copy adapters
    pub const V2_3_22: Version = Version::new(2, 3, 22);
    /// The newest release this implementation knows about
    pub const CURRENT: Version = Version::new(2, 3, 23);

    /// Create a version from its components
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Version {
            major,
            minor,
            micro,
        }
    }

    /// Rebuild a version from its integer form
    ///
    /// Majors above `u32::MAX` do not fit a version and are truncated.
    pub const fn from_int(value: u64) -> Self {
        Version::new(
            (value / 1_000_000) as u32,
            (value % 1_000_000 / 1_000) as u32,
            (value % 1_000) as u32,
        )
    }

    /// Major component
    #[inline]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor component
    #[inline]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Micro component
    #[inline]
    pub const fn micro(&self) -> u32 {
        self.micro
    }

    /// Integer form, monotonic with the version order
    #[inline]
    pub const fn int_value(&self) -> u64 {
        self.major as u64 * 1_000_000 + self.minor as u64 * 1_000 + self.micro as u64
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for Version {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(LumenError::invalid_config(format!(
                "version '{}' must have the form major.minor.micro",
                s
            )));
        }
        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                LumenError::invalid_config(format!("version '{}' has a non-numeric component", s))
            })?;
        }
        if nums[1] >= 1_000 || nums[2] >= 1_000 {
            return Err(LumenError::invalid_config(format!(
                "version '{}' has a minor or micro component above 999",
                s
            )));
        }
        Ok(Version::new(nums[0], nums[1], nums[2]))
    }
}

impl TryFrom<String> for Version {
    type Error = LumenError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}
