//! A release version parsed from one of the tag formats the release
//! process produces.
//!
//! Plain tags ("v0.3.2"), patch-release tags ("0.3.2-1") and git
//! describe output over either ("0.3.2-5-gabc123",
//! "0.3.2-1-1-ga7a46bc") all collapse into the same record.  A patch
//! build number and a commit count are the same quantity as far as
//! ordering is concerned, so both land in `num_commits` and the format
//! that produced them is not recorded.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::parser::parse_version;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Commits since the tag, or the build number of a patch release.
    /// Absent counts as zero for ordering, but not for equality.
    pub num_commits: Option<u32>,
    /// Abbreviated commit id from git describe.  Informational only,
    /// never compared.
    pub hash: Option<String>,
}

impl Version {
    /// A plain release version with no suffix components
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            num_commits: None,
            hash: None,
        }
    }

    /// Whether this version is the given version or newer
    pub fn is_at_least(&self, version: &Version) -> bool {
        self.ordering_fields() >= version.ordering_fields()
    }

    /// Whether this version is strictly newer than the given version
    pub fn is_greater_than(&self, version: &Version) -> bool {
        self.ordering_fields() > version.ordering_fields()
    }

    /// Whether this version is older than the given version and not the
    /// same value
    pub fn is_less_than(&self, version: &Version) -> bool {
        self != version && self.is_equal_or_before(version)
    }

    /// Whether this version is the given version or older
    pub fn is_equal_or_before(&self, version: &Version) -> bool {
        !self.is_greater_than(version)
    }

    /// The components that take part in ordering, highest priority
    /// first.  `hash` is excluded.
    fn ordering_fields(&self) -> (u32, u32, u32, u32) {
        (
            self.major,
            self.minor,
            self.patch,
            self.num_commits.unwrap_or(0),
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.num_commits, &self.hash) {
            // Git describe format
            (Some(num_commits), Some(hash)) => write!(
                f,
                "v{}.{}.{}-{}-g{}",
                self.major, self.minor, self.patch, num_commits, hash
            ),
            // Patch format, which carries no leading v
            (Some(num_commits), None) => write!(
                f,
                "{}.{}.{}-{}",
                self.major, self.minor, self.patch, num_commits
            ),
            // Simple format
            _ => write!(f, "v{}.{}.{}", self.major, self.minor, self.patch),
        }
    }
}

impl FromStr for Version {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}
