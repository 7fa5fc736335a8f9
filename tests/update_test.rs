use client_version::config::{load_config, BehaviorConfig};
use client_version::update::{check_for_update, UpdateStatus};

#[test]
fn test_check_using_fixture_config() {
    let config = load_config(Some("tests/fixtures/config_with_behavior.toml"))
        .expect("Failed to load test config");

    let status = check_for_update(
        config.client.current_version.as_deref(),
        Some("2.2.0-rc1"),
        &config.behavior,
    );
    assert_eq!(
        status,
        UpdateStatus::UpdateAvailable {
            current: "2.1.0".to_string(),
            advertised: "2.2.0-rc1".to_string(),
        }
    );
}

#[test]
fn test_current_prerelease_superseded_by_release() {
    let status = check_for_update(
        Some("2.0.0-rc3"),
        Some("2.0.0"),
        &BehaviorConfig::default(),
    );
    assert!(status.is_outdated());
}

#[test]
fn test_status_messages() {
    let cases = vec![
        (
            UpdateStatus::UpToDate {
                current: "1.0.0".to_string(),
            },
            "up to date",
        ),
        (
            UpdateStatus::PrereleaseIgnored {
                advertised: "1.1.0-beta".to_string(),
            },
            "ignored",
        ),
        (
            UpdateStatus::Unknown {
                reason: "no current version".to_string(),
            },
            "Cannot determine",
        ),
    ];

    for (status, expected) in cases {
        let msg = status.to_string();
        assert!(
            msg.contains(expected),
            "Message should contain '{}', got: {}",
            expected,
            msg
        );
    }
}

#[test]
fn test_malformed_current_never_panics() {
    for bad in ["", "x", "1.2", "1.2.3.rc99999999999999999999"] {
        let status = check_for_update(Some(bad), Some("1.0.0"), &BehaviorConfig::default());
        assert!(matches!(status, UpdateStatus::Unknown { .. }), "{}", bad);
    }
}
