//! Prerelease channel handling
//!
//! A version may carry a fourth token naming its maturity channel, optionally followed
//! by an iteration number (`rc2`, `beta10`, `dev`). Channels are ranked
//! `dev < alpha < beta < rc < release < unrecognized`.

use crate::error::{Result, VersionError};
use regex::Regex;
use std::fmt;

/// Iteration used when a prerelease tag carries no trailing number.
pub const NO_ITERATION: i64 = -1;

/// Iteration used for formal releases (no fourth token at all).
pub const RELEASE_ITERATION: i64 = 0;

/// Maturity channel of a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrereleaseTag {
    Dev,
    Alpha,
    Beta,
    ReleaseCandidate,
    /// Formal release (empty tag)
    Release,
    /// Any other tag; ranks above a formal release
    Unrecognized(String),
}

impl PrereleaseTag {
    /// Map a lower-cased tag string to its channel.
    ///
    /// The empty string is a formal release. Anything not in the known set is kept
    /// verbatim as [`PrereleaseTag::Unrecognized`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "dev" => PrereleaseTag::Dev,
            "alpha" => PrereleaseTag::Alpha,
            "beta" => PrereleaseTag::Beta,
            "rc" => PrereleaseTag::ReleaseCandidate,
            "" => PrereleaseTag::Release,
            other => PrereleaseTag::Unrecognized(other.to_string()),
        }
    }

    /// Rank used for ordering; higher is more mature.
    pub fn priority(&self) -> u8 {
        match self {
            PrereleaseTag::Dev => 0,
            PrereleaseTag::Alpha => 1,
            PrereleaseTag::Beta => 2,
            PrereleaseTag::ReleaseCandidate => 3,
            PrereleaseTag::Release => 4,
            PrereleaseTag::Unrecognized(_) => 5,
        }
    }

    /// True for the known prerelease channels (dev, alpha, beta, rc).
    pub fn is_prerelease(&self) -> bool {
        self.priority() < PrereleaseTag::Release.priority()
    }
}

impl fmt::Display for PrereleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrereleaseTag::Dev => write!(f, "dev"),
            PrereleaseTag::Alpha => write!(f, "alpha"),
            PrereleaseTag::Beta => write!(f, "beta"),
            PrereleaseTag::ReleaseCandidate => write!(f, "rc"),
            PrereleaseTag::Release => Ok(()),
            PrereleaseTag::Unrecognized(s) => write!(f, "{}", s),
        }
    }
}

/// Split a prerelease token into its tag and iteration.
///
/// The token is cut around every `<letters><digits>` run. When the token is exactly one
/// such run (`rc2`), the letters are the tag and the digits the iteration. Otherwise the
/// first non-empty piece is the tag and the iteration is [`NO_ITERATION`]:
/// - `"rc2"` -> `(ReleaseCandidate, 2)`
/// - `"dev"` -> `(Dev, -1)`
/// - `"rc2x"` -> `(ReleaseCandidate, -1)`
/// - `"7"` -> `(Unrecognized("7"), -1)`
///
/// # Arguments
/// * `input` - The full raw version, used for error context
/// * `token` - The normalized fourth token
///
/// # Returns
/// * `Err` - If the iteration digits do not fit in an `i64`
pub fn split_prerelease(input: &str, token: &str) -> Result<(PrereleaseTag, i64)> {
    let pieces = split_pieces(token);

    let tag = pieces.first().copied().unwrap_or("");
    if tag.is_empty() {
        // Nothing but a separator; treated as a channel nobody recognizes.
        return Ok((PrereleaseTag::Unrecognized(String::new()), NO_ITERATION));
    }

    let iteration = if pieces.len() == 2 {
        pieces[1].parse::<i64>().map_err(|_| {
            VersionError::malformed(input, format!("invalid prerelease iteration '{}'", pieces[1]))
        })?
    } else {
        NO_ITERATION
    };

    Ok((PrereleaseTag::from_tag(tag), iteration))
}

fn split_pieces(token: &str) -> Vec<&str> {
    let mut pieces = Vec::new();

    if let Ok(re) = Regex::new(r"([a-z]+)([0-9]+)") {
        let mut last = 0;
        for captures in re.captures_iter(token) {
            let (Some(whole), Some(letters), Some(digits)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                continue;
            };
            pieces.push(&token[last..whole.start()]);
            pieces.push(letters.as_str());
            pieces.push(digits.as_str());
            last = whole.end();
        }
        pieces.push(&token[last..]);
    } else {
        pieces.push(token);
    }

    pieces.retain(|p| !p.is_empty());
    pieces
}
