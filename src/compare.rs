//! Version comparison entry points.
//!
//! [`compare_versions`] is the boundary used by callers deciding whether an advertised
//! version supersedes a local one. It never fails: missing or malformed input is
//! reported as "not newer".

use std::cmp::Ordering;

use crate::domain::Version;
use crate::error::Result;

/// Compare two parsed versions field by field.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Parse both strings and compare them, surfacing parse failures.
///
/// # Arguments
/// * `v1` - Candidate (remote) version
/// * `v2` - Baseline (local) version
pub fn try_compare_versions(v1: &str, v2: &str) -> Result<Ordering> {
    let version1 = Version::parse(v1)?;
    let version2 = Version::parse(v2)?;
    Ok(compare(&version1, &version2))
}

/// Returns true iff `v1` is newer than or equal to `v2`.
///
/// Missing, empty or malformed input on either side yields `false`.
///
/// # Example
/// ```
/// use client_version::compare_versions;
///
/// assert!(compare_versions(Some("1.0.0"), Some("1.0.0-rc1")));
/// assert!(!compare_versions(Some("1.0.0-alpha"), Some("1.0.0")));
/// assert!(!compare_versions(None, Some("1.0.0")));
/// ```
pub fn compare_versions(v1: Option<&str>, v2: Option<&str>) -> bool {
    let (Some(v1), Some(v2)) = (v1, v2) else {
        return false;
    };
    if v1.is_empty() || v2.is_empty() {
        return false;
    }

    matches!(
        try_compare_versions(v1, v2),
        Ok(Ordering::Greater | Ordering::Equal)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersionError;

    #[test]
    fn test_compare_orders() {
        let a = Version::new(1, 2, 3);
        let b = Version::new(1, 2, 4);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_try_compare_propagates_malformed() {
        let result = try_compare_versions("1.2", "1.2.3");
        assert!(matches!(result, Err(VersionError::Malformed { .. })));
    }

    #[test]
    fn test_try_compare_equivalent_spellings() {
        assert_eq!(
            try_compare_versions("V1.2.3-Beta1", "1.2.3.beta1").unwrap(),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_versions_missing() {
        assert!(!compare_versions(None, Some("1.0.0")));
        assert!(!compare_versions(Some("1.0.0"), None));
        assert!(!compare_versions(None, None));
    }

    #[test]
    fn test_compare_versions_empty() {
        assert!(!compare_versions(Some(""), Some("1.0.0")));
        assert!(!compare_versions(Some("1.0.0"), Some("")));
    }

    #[test]
    fn test_compare_versions_malformed_is_false() {
        assert!(!compare_versions(Some("not-a-version"), Some("1.0.0")));
        assert!(!compare_versions(Some("1.0.0"), Some("1.x.0")));
    }
}
