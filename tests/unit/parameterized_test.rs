//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use std::cmp::Ordering;

use repodeps::core::models::{Repository, VcsKind};
use test_case::test_case;

use crate::common::repo;

// =============================================================================
// Clone URL Tests
// =============================================================================

#[test_case("robot_controller", "acme-robotics" ; "underscored name")]
#[test_case("vision", "upstream" ; "plain name")]
#[test_case("cob.driver", "ipa-320" ; "dotted name")]
#[test_case("x", "o" ; "single characters")]
fn test_clone_url(name: &str, fork: &str) {
    let r = Repository::new(name, Some(fork.to_string()), None, false, false).unwrap();
    assert_eq!(r.url(), format!("git@github.com:{fork}/{name}.git"));
}

// =============================================================================
// VCS Kind Tests
// =============================================================================

#[test_case("git", true ; "git is supported")]
#[test_case("svn", false ; "svn is not supported")]
#[test_case("hg", false ; "mercurial is not supported")]
#[test_case("GIT", false ; "kind is case sensitive")]
fn test_vcs_kind(kind: &str, supported: bool) {
    assert_eq!(kind.parse::<VcsKind>().is_ok(), supported);
    assert_eq!(Repository::with_vcs(kind, "a", None, None, false, false).is_ok(), supported);
}

// =============================================================================
// Ordering Tests
// =============================================================================

#[test_case("alpha", "beta", Ordering::Less ; "alphabetical")]
#[test_case("beta", "alpha", Ordering::Greater ; "reverse alphabetical")]
#[test_case("foo", "foo", Ordering::Equal ; "same name")]
#[test_case("Zeta", "alpha", Ordering::Less ; "uppercase sorts first")]
#[test_case("ab", "abc", Ordering::Less ; "prefix sorts first")]
fn test_ordering(a: &str, b: &str, expected: Ordering) {
    let left = repo(a, "fork-one", Some("main"), true, false);
    let right = repo(b, "fork-two", None, false, true);
    assert_eq!(left.cmp(&right), expected);
}
