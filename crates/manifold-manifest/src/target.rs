//! Build target selection: browser plus manifest version.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Target browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
    Edge,
    Brave,
    Opera,
    Safari,
}

impl Browser {
    pub const ALL: [Browser; 6] = [
        Self::Chrome,
        Self::Firefox,
        Self::Edge,
        Self::Brave,
        Self::Opera,
        Self::Safari,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Edge => "edge",
            Self::Brave => "brave",
            Self::Opera => "opera",
            Self::Safari => "safari",
        }
    }

    /// Firefox runs MV3 backgrounds as event pages, not service workers.
    pub fn supports_service_worker(&self) -> bool {
        !matches!(self, Self::Firefox)
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Browser {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| Error::InvalidTarget {
                target: s.to_string(),
                reason: format!(
                    "unknown browser, expected one of: {}",
                    Self::ALL.map(|b| b.as_str()).join(", ")
                ),
            })
    }
}

/// Manifest schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestVersion {
    Mv2,
    Mv3,
}

impl ManifestVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mv2 => "mv2",
            Self::Mv3 => "mv3",
        }
    }

    /// Value of the `manifest_version` field.
    pub fn number(&self) -> u8 {
        match self {
            Self::Mv2 => 2,
            Self::Mv3 => 3,
        }
    }
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManifestVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mv2" => Ok(Self::Mv2),
            "mv3" => Ok(Self::Mv3),
            _ => Err(Error::InvalidTarget {
                target: s.to_string(),
                reason: "unknown manifest version, expected mv2 or mv3".to_string(),
            }),
        }
    }
}

/// Browser and manifest version for one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetData {
    pub browser: Browser,
    pub manifest_version: ManifestVersion,
}

impl TargetData {
    pub fn new(browser: Browser, manifest_version: ManifestVersion) -> Self {
        Self {
            browser,
            manifest_version,
        }
    }
}

impl Default for TargetData {
    fn default() -> Self {
        Self::new(Browser::Chrome, ManifestVersion::Mv3)
    }
}

impl fmt::Display for TargetData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.browser, self.manifest_version)
    }
}

/// Parses `<browser>-<mv2|mv3>`, e.g. `firefox-mv2`.
impl FromStr for TargetData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (browser, version) = s.trim().rsplit_once('-').ok_or_else(|| Error::InvalidTarget {
            target: s.to_string(),
            reason: "expected <browser>-<mv2|mv3>".to_string(),
        })?;
        Ok(Self::new(browser.parse()?, version.parse()?))
    }
}
