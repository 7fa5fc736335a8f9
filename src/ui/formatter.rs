//! Pure formatting functions for UI output.
//!
//! `format_*` functions return plain strings and are testable; `display_*` functions
//! add styling and print.

use console::style;

use crate::domain::Version;
use crate::update::UpdateStatus;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Describe the outcome of a candidate/baseline comparison.
pub fn format_comparison(candidate: &str, baseline: &str, newer_or_equal: bool) -> String {
    if newer_or_equal {
        format!("'{}' is newer than or equal to '{}'", candidate, baseline)
    } else {
        format!("'{}' is not newer than '{}'", candidate, baseline)
    }
}

/// Print the comparison outcome, green when the candidate wins.
pub fn display_comparison(candidate: &str, baseline: &str, newer_or_equal: bool) {
    let message = format_comparison(candidate, baseline, newer_or_equal);
    if newer_or_equal {
        display_success(&message);
    } else {
        display_status(&message);
    }
}

/// List the parsed fields of a version, one per line.
pub fn format_parsed_version(version: &Version) -> Vec<String> {
    let tag = version.prerelease_tag.to_string();
    vec![
        format!("major:     {}", version.major),
        format!("minor:     {}", version.minor),
        format!("patch:     {}", version.patch),
        format!(
            "tag:       {}",
            if tag.is_empty() { "(release)" } else { tag.as_str() }
        ),
        format!("priority:  {}", version.prerelease_tag.priority()),
        format!("iteration: {}", version.prerelease_iteration),
    ]
}

/// Print a parsed version under a bold heading.
pub fn display_parsed_version(version: &Version) {
    println!("\n{}", style(version.to_string()).bold());
    for line in format_parsed_version(version) {
        println!("  {}", line);
    }
}

/// Print an update check result with a colour matching its severity.
pub fn display_update_status(status: &UpdateStatus) {
    let message = status.to_string();
    match status {
        UpdateStatus::UpToDate { .. } => display_success(&message),
        UpdateStatus::UpdateAvailable { .. } => {
            println!("{} {}", style("⚠").yellow().bold(), style(message).bold())
        }
        UpdateStatus::PrereleaseIgnored { .. } => display_status(&message),
        UpdateStatus::Unknown { .. } => display_error(&message),
    }
}
