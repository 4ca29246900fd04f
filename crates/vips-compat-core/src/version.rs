//! libvips release version handling.
//!
//! libvips numbers releases `major.minor.micro` and release notes routinely
//! abbreviate to `major.minor` ("renamed in 8.17"), so the parser accepts
//! both forms.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// A libvips release version. Ordering is lexicographic over
/// `(major, minor, micro)`, which matches the release numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibraryVersion {
    pub major: u16,
    pub minor: u16,
    pub micro: u16,
}

impl LibraryVersion {
    pub const fn new(major: u16, minor: u16, micro: u16) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }
}

impl Display for LibraryVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionParseError {
    #[error("empty version string")]
    Empty,
    #[error("invalid version component {component:?} in {input:?}")]
    BadComponent { input: String, component: String },
    #[error("expected major.minor or major.minor.micro, got {0:?}")]
    WrongShape(String),
}

impl FromStr for LibraryVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parse = |component: &str| -> Result<u16, VersionParseError> {
            component
                .parse::<u16>()
                .map_err(|_| VersionParseError::BadComponent {
                    input: trimmed.to_string(),
                    component: component.to_string(),
                })
        };

        let parts: Vec<&str> = trimmed.split('.').collect();
        match parts.as_slice() {
            [major, minor] => Ok(Self::new(parse(major)?, parse(minor)?, 0)),
            [major, minor, micro] => Ok(Self::new(parse(major)?, parse(minor)?, parse(micro)?)),
            _ => Err(VersionParseError::WrongShape(trimmed.to_string())),
        }
    }
}
