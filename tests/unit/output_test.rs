//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use repodeps::core::models::Verdict;
use repodeps::core::services::FieldAssistant;
use repodeps::output::{CheckResult, OutputMode, RepositoryInfo, RepositoryListResult};

use crate::common::{catalog_host, repo};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn repository_info_serialization() {
    let info = RepositoryInfo::from(&repo("vision", "upstream", None, true, false));
    let json = serde_json::to_value(&info).unwrap();

    assert_eq!(json["name"], "vision");
    assert_eq!(json["fork"], "upstream");
    assert!(json["branch"].is_null());
    assert_eq!(json["vcs"], "git");
    assert_eq!(json["url"], "git@github.com:upstream/vision.git");
    assert_eq!(json["poll"], true);
    assert_eq!(json["test"], false);
}

#[test]
fn list_result_serialization() {
    let result = RepositoryListResult {
        repositories: vec![RepositoryInfo::from(&repo("a", "o", None, false, false))],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"repositories\""));
    assert!(json.contains("\"name\":\"a\""));
}

#[test]
fn check_result_serialization() {
    let host = catalog_host();
    let report =
        FieldAssistant::new(&host).check_repository(&repo("ghost", "upstream", None, false, false));
    assert_eq!(report.branch, Verdict::warning("No branch given, the default branch will be used"));

    let result = CheckResult {
        passed: !report.has_errors(),
        reports: vec![report],
    };
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["passed"], false);
    assert_eq!(json["reports"][0]["repository"], "ghost");
    assert_eq!(json["reports"][0]["name"]["kind"], "error");
    assert_eq!(json["reports"][0]["fork"]["kind"], "ok");
}
