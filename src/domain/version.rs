use crate::domain::prerelease::{
    split_prerelease, PrereleaseTag, NO_ITERATION, RELEASE_ITERATION,
};
use crate::error::{Result, VersionError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Parsed client version
///
/// Ordered by `(major, minor, patch, tag priority, iteration)`. Two unrecognized tags
/// of different spelling compare equal since they share a priority.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease_tag: PrereleaseTag,
    /// `-1` for a tag without digits, `0` for a formal release
    pub prerelease_iteration: i64,
}

impl Version {
    /// Create a formal release version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease_tag: PrereleaseTag::Release,
            prerelease_iteration: RELEASE_ITERATION,
        }
    }

    /// Create a version on a prerelease channel
    pub fn with_prerelease(
        major: u32,
        minor: u32,
        patch: u32,
        prerelease_tag: PrereleaseTag,
        prerelease_iteration: i64,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease_tag,
            prerelease_iteration,
        }
    }

    /// Parse a raw version string (e.g., "v1.2.3", "1.2.3-rc2", "1.2.3.beta")
    ///
    /// The first hyphen is treated as a dot, the string is lower-cased and one leading
    /// `v` is dropped. The first three dot-separated tokens must be plain decimal
    /// numbers; an optional fourth token names the prerelease channel. Any further
    /// tokens are ignored.
    ///
    /// # Returns
    /// * `Ok(Version)` - Successfully parsed version
    /// * `Err(VersionError::Malformed)` - Fewer than three tokens or a non-numeric component
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.replacen('-', ".", 1).to_lowercase();
        let normalized = normalized.strip_prefix('v').unwrap_or(&normalized);

        let tokens: Vec<&str> = normalized.split('.').collect();
        if tokens.len() < 3 {
            return Err(VersionError::malformed(
                input,
                "expected at least major.minor.patch",
            ));
        }

        let major = parse_component(input, "major", tokens[0])?;
        let minor = parse_component(input, "minor", tokens[1])?;
        let patch = parse_component(input, "patch", tokens[2])?;

        let (prerelease_tag, prerelease_iteration) = match tokens.get(3) {
            Some(token) => split_prerelease(input, token)?,
            None => (PrereleaseTag::Release, RELEASE_ITERATION),
        };

        Ok(Version {
            major,
            minor,
            patch,
            prerelease_tag,
            prerelease_iteration,
        })
    }

    /// True when the version sits on a known prerelease channel
    pub fn is_prerelease(&self) -> bool {
        self.prerelease_tag.is_prerelease()
    }

    fn sort_key(&self) -> (u32, u32, u32, u8, i64) {
        (
            self.major,
            self.minor,
            self.patch,
            self.prerelease_tag.priority(),
            self.prerelease_iteration,
        )
    }
}

fn parse_component(input: &str, name: &str, token: &str) -> Result<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::malformed(
            input,
            format!("invalid {} component '{}'", name, token),
        ));
    }
    token.parse::<u32>().map_err(|_| {
        VersionError::malformed(input, format!("{} component '{}' out of range", name, token))
    })
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| {
                self.prerelease_tag
                    .priority()
                    .cmp(&other.prerelease_tag.priority())
            })
            .then_with(|| self.prerelease_iteration.cmp(&other.prerelease_iteration))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.prerelease_tag != PrereleaseTag::Release {
            write!(f, "-{}", self.prerelease_tag)?;
            if self.prerelease_iteration != NO_ITERATION {
                write!(f, "{}", self.prerelease_iteration)?;
            }
        }
        Ok(())
    }
}
