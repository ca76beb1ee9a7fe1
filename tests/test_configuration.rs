mod common;
use common::{assert_no_reports, stderr, TestWorkspace};

// Configuration is validated before any request, so an unreachable server
// proves no network traffic happened.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn assert_config_error(env_vars: &[(&str, &str)], expected: &str) {
    let workspace = TestWorkspace::new();
    let output = workspace.run_contributors(env_vars);

    assert!(!output.status.success(), "expected failure");
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("Error:"), "missing error prefix: {err}");
    assert!(err.contains(expected), "expected `{expected}` in: {err}");
    assert_no_reports(&workspace.path);
}

#[test]
fn test_missing_organization_and_repository() {
    assert_config_error(
        &[("GH_TOKEN", "token"), ("GH_ENTERPRISE_URL", UNREACHABLE)],
        "ORGANIZATION and REPOSITORY environment variables were not set",
    );
}

#[test]
fn test_empty_selectors_count_as_missing() {
    assert_config_error(
        &[
            ("ORGANIZATION", ""),
            ("REPOSITORY", " "),
            ("GH_TOKEN", "token"),
            ("GH_ENTERPRISE_URL", UNREACHABLE),
        ],
        "ORGANIZATION and REPOSITORY environment variables were not set",
    );
}

#[test]
fn test_missing_token() {
    assert_config_error(
        &[("ORGANIZATION", "github"), ("GH_ENTERPRISE_URL", UNREACHABLE)],
        "GH_TOKEN environment variable not set",
    );
}

#[test]
fn test_invalid_start_date() {
    assert_config_error(
        &[
            ("ORGANIZATION", "github"),
            ("GH_TOKEN", "token"),
            ("GH_ENTERPRISE_URL", UNREACHABLE),
            ("START_DATE", "2024-13-01"),
            ("END_DATE", "2024-12-31"),
        ],
        "START_DATE environment variable not in the format YYYY-MM-DD",
    );
}

#[test]
fn test_only_end_date() {
    assert_config_error(
        &[
            ("ORGANIZATION", "github"),
            ("GH_TOKEN", "token"),
            ("GH_ENTERPRISE_URL", UNREACHABLE),
            ("END_DATE", "2024-12-31"),
        ],
        "START_DATE and END_DATE must be set together",
    );
}

#[test]
fn test_start_after_end() {
    assert_config_error(
        &[
            ("ORGANIZATION", "github"),
            ("GH_TOKEN", "token"),
            ("GH_ENTERPRISE_URL", UNREACHABLE),
            ("START_DATE", "2024-12-31"),
            ("END_DATE", "2024-01-01"),
        ],
        "is after END_DATE",
    );
}

#[test]
fn test_malformed_repository() {
    assert_config_error(
        &[
            ("REPOSITORY", "contributors"),
            ("GH_TOKEN", "token"),
            ("GH_ENTERPRISE_URL", UNREACHABLE),
        ],
        "repository `contributors` is not in the format owner/name",
    );
}

#[test]
fn test_invalid_boolean_flag() {
    let workspace = TestWorkspace::new();
    let output = workspace.run_contributors(&[
        ("ORGANIZATION", "github"),
        ("GH_TOKEN", "token"),
        ("GH_ENTERPRISE_URL", UNREACHABLE),
        ("SPONSOR_INFO", "maybe"),
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("SPONSOR_INFO") || stderr(&output).contains("sponsor"));
    assert_no_reports(&workspace.path);
}

#[test]
fn test_help_lists_environment_variables() {
    let workspace = TestWorkspace::new();
    let output = workspace.run_contributors_with_args(&["--help"], &[]);

    assert!(output.status.success());
    let help = common::stdout(&output);
    for var in [
        "ORGANIZATION",
        "REPOSITORY",
        "GH_TOKEN",
        "GH_ENTERPRISE_URL",
        "START_DATE",
        "END_DATE",
        "SPONSOR_INFO",
        "LINK_TO_PROFILE",
        "SHOW_ORGANISATIONS",
        "ACKNOWLEDGE_COAUTHORS",
        "RESOLVE_COAUTHOR_EMAILS",
        "OUTPUT_FILENAME",
    ] {
        assert!(help.contains(var), "{var} missing from --help");
    }
}
