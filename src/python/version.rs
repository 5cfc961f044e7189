//! Dotted version numbers.
//!
//! Covers Python release strings (`3.12.1`, `3.13.0rc1`) and the version
//! attributes packages report (`2.2.3`, `1.26`, `0.13.2.post1`). Only the
//! leading numeric components take part in ordering.

use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Leading `major[.minor[.micro]]` of a version string.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*v?(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// A `(major, minor, micro)` version triple.
///
/// Ordering is lexicographic over the three components, so `3.10.0`
/// sorts after `3.9.18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub micro: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, micro: u64) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Format as `major.minor`, the form used for minimum requirements.
    pub fn short(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = VERSION_REGEX
            .captures(s)
            .ok_or_else(|| format!("not a version: {:?}", s))?;

        let component = |idx: usize| -> Result<u64, String> {
            match caps.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| format!("version component out of range: {:?}", s)),
                None => Ok(0),
            }
        };

        Ok(Self {
            major: component(1)?,
            minor: component(2)?,
            micro: component(3)?,
        })
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<(u64, u64, u64)> for Version {
    fn from((major, minor, micro): (u64, u64, u64)) -> Self {
        Self::new(major, minor, micro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_triple() {
        assert_eq!("3.12.1".parse::<Version>(), Ok(Version::new(3, 12, 1)));
    }

    #[test]
    fn missing_components_default_to_zero() {
        assert_eq!("3.10".parse::<Version>(), Ok(Version::new(3, 10, 0)));
        assert_eq!("3".parse::<Version>(), Ok(Version::new(3, 0, 0)));
    }

    #[test]
    fn ignores_pre_and_post_release_suffixes() {
        assert_eq!("3.13.0rc1".parse::<Version>(), Ok(Version::new(3, 13, 0)));
        assert_eq!("0.13.2.post1".parse::<Version>(), Ok(Version::new(0, 13, 2)));
        assert_eq!("2.1.0+cu121".parse::<Version>(), Ok(Version::new(2, 1, 0)));
    }

    #[test]
    fn rejects_non_versions() {
        assert!("".parse::<Version>().is_err());
        assert!("unknown".parse::<Version>().is_err());
    }

    #[test]
    fn orders_lexicographically() {
        let v = |s: &str| s.parse::<Version>().unwrap();
        assert!(v("3.10.0") > v("3.9.18"));
        assert!(v("3.10.0") >= v("3.10"));
        assert!(v("3.9.5") < v("3.10"));
        assert!(v("4.0") > v("3.99.99"));
    }

    #[test]
    fn displays_three_components() {
        assert_eq!(Version::new(3, 10, 0).to_string(), "3.10.0");
        assert_eq!(Version::new(3, 10, 0).short(), "3.10");
    }

    #[test]
    fn deserializes_from_string() {
        let v: Version = serde_yaml::from_str("\"3.11\"").unwrap();
        assert_eq!(v, Version::new(3, 11, 0));
    }
}
