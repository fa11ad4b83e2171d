//! Source API version stamp written into generated projects.
//!
//! The stamp is opaque to the rest of the engine: it is parsed once, then
//! copied verbatim into `sfdx-project.json` and `manifest/package.xml`.

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// API version used when neither `--apiversion` nor `SFDX_API_VERSION` is set.
pub const DEFAULT_API_VERSION: ApiVersion = ApiVersion { major: 58 };

/// A Salesforce API version such as `58.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApiVersion {
    pub major: u32,
}

impl ApiVersion {
    /// Parse `NN.0` or a bare `NN`.
    ///
    /// Handles common formats:
    /// - `"58.0"`
    /// - `"58"`
    /// - `" v58.0 "`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('v').unwrap_or(s);
        let (major, minor) = match s.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (s, "0"),
        };
        if minor != "0" || major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let major: u32 = major.parse().ok()?;
        if major == 0 {
            return None;
        }
        Some(Self { major })
    }
}

impl FromStr for ApiVersion {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ScaffoldError::InvalidApiVersion(s.to_string()))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        DEFAULT_API_VERSION
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.0", self.major)
    }
}
