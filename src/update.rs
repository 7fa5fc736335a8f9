//! Outdated-client detection built on top of the comparator.

use std::cmp::Ordering;
use std::fmt;

use crate::config::BehaviorConfig;
use crate::domain::Version;

/// Outcome of checking an advertised version against the local one.
/// None of these are errors; malformed input is reported as `Unknown`.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateStatus {
    /// Advertised version is not newer than the local one
    UpToDate { current: String },
    /// Advertised version is newer
    UpdateAvailable { current: String, advertised: String },
    /// Advertised version is newer but sits on a prerelease channel
    PrereleaseIgnored { advertised: String },
    /// One side is missing or cannot be parsed
    Unknown { reason: String },
}

impl UpdateStatus {
    pub fn is_outdated(&self) -> bool {
        matches!(self, UpdateStatus::UpdateAvailable { .. })
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatus::UpToDate { current } => {
                write!(f, "Client version {} is up to date", current)
            }
            UpdateStatus::UpdateAvailable {
                current,
                advertised,
            } => write!(f, "Update available: {} -> {}", current, advertised),
            UpdateStatus::PrereleaseIgnored { advertised } => write!(
                f,
                "Newer prerelease {} ignored (prereleases disabled)",
                advertised
            ),
            UpdateStatus::Unknown { reason } => {
                write!(f, "Cannot determine update status: {}", reason)
            }
        }
    }
}

/// Decide whether the local client is outdated.
///
/// # Arguments
/// * `current` - Locally installed version
/// * `advertised` - Version announced by the remote side
/// * `behavior` - Whether prereleases count as updates
pub fn check_for_update(
    current: Option<&str>,
    advertised: Option<&str>,
    behavior: &BehaviorConfig,
) -> UpdateStatus {
    let current = match current.filter(|s| !s.is_empty()) {
        Some(c) => c,
        None => {
            return UpdateStatus::Unknown {
                reason: "no current version".to_string(),
            }
        }
    };
    let advertised = match advertised.filter(|s| !s.is_empty()) {
        Some(a) => a,
        None => {
            return UpdateStatus::Unknown {
                reason: "no advertised version".to_string(),
            }
        }
    };

    let (local, remote) = match (Version::parse(current), Version::parse(advertised)) {
        (Ok(local), Ok(remote)) => (local, remote),
        (Err(e), _) | (_, Err(e)) => {
            return UpdateStatus::Unknown {
                reason: e.to_string(),
            }
        }
    };

    if remote.cmp(&local) != Ordering::Greater {
        return UpdateStatus::UpToDate {
            current: local.to_string(),
        };
    }

    if remote.is_prerelease() && !behavior.include_prereleases {
        return UpdateStatus::PrereleaseIgnored {
            advertised: remote.to_string(),
        };
    }

    UpdateStatus::UpdateAvailable {
        current: local.to_string(),
        advertised: remote.to_string(),
    }
}
