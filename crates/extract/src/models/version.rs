use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// A documentation set version. Every page, component and API item belongs to
/// exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocVersion {
    /// Ant Design Vue 3.x (`3x.antdv.com`)
    V3,
    /// Ant Design Vue 4.x (`antdv.com`)
    V4,
}
impl DocVersion {
    /// Every known version, in indexing order.
    pub const ALL: [DocVersion; 2] = [DocVersion::V3, DocVersion::V4];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocVersion::V3 => "v3",
            DocVersion::V4 => "v4",
        }
    }
}
impl FromStr for DocVersion {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "v3" => Self::V3,
            "v4" => Self::V4,
            _ => exn::bail!(ErrorKind::InvalidVersion(s.to_string())),
        })
    }
}
impl TryFrom<String> for DocVersion {
    type Error = Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}
impl Display for DocVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Version scope for searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionFilter {
    #[default]
    All,
    Only(DocVersion),
}
impl VersionFilter {
    /// The single version to restrict to, if any.
    pub fn version(&self) -> Option<DocVersion> {
        match self {
            VersionFilter::All => None,
            VersionFilter::Only(version) => Some(*version),
        }
    }

    /// Versions covered by this filter, in indexing order.
    pub fn versions(&self) -> Vec<DocVersion> {
        match self {
            VersionFilter::All => DocVersion::ALL.to_vec(),
            VersionFilter::Only(version) => vec![*version],
        }
    }
}
impl FromStr for VersionFilter {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}
impl From<DocVersion> for VersionFilter {
    fn from(version: DocVersion) -> Self {
        Self::Only(version)
    }
}
impl Display for VersionFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VersionFilter::All => write!(f, "all"),
            VersionFilter::Only(version) => write!(f, "{version}"),
        }
    }
}
