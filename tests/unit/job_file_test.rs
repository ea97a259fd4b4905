//! Tests for .repodeps.toml job files

use repodeps::adapters::toml::{JobFile, JobFileError, parse_job_file};
use repodeps::core::models::Repository;

use crate::common::{TestJob, repo};

fn names(job: &JobFile) -> Vec<&str> {
    job.repositories().iter().map(Repository::name).collect()
}

#[test]
fn test_open_missing_file_is_empty() {
    let env = TestJob::new();
    let job = JobFile::open(env.job_file()).unwrap();
    assert!(job.is_empty());
    assert!(!env.job_file().exists());
}

#[test]
fn test_save_and_reload() {
    let env = TestJob::new();
    let mut job = JobFile::open(env.job_file()).unwrap();
    job.insert(repo("vision", "upstream", None, false, true)).unwrap();
    job.insert(repo("robot_controller", "acme-robotics", Some("develop"), true, false))
        .unwrap();
    job.save().unwrap();

    let loaded = JobFile::open(env.job_file()).unwrap();
    assert_eq!(names(&loaded), vec!["robot_controller", "vision"]);

    let rc = loaded.get("robot_controller").unwrap();
    assert_eq!(rc.fork(), Some("acme-robotics"));
    assert_eq!(rc.branch(), Some("develop"));
    assert_eq!(rc.url(), "git@github.com:acme-robotics/robot_controller.git");
    assert!(rc.poll());
    assert!(!rc.test());
}

#[test]
fn test_saved_file_is_sorted() {
    let env = TestJob::new();
    env.write_job(
        r#"
[[repository]]
name = "zeta"
fork = "org"

[[repository]]
name = "alpha"
fork = "org"
"#,
    );

    let job = JobFile::open(env.job_file()).unwrap();
    job.save().unwrap();

    let content = env.read_job();
    let alpha = content.find("name = \"alpha\"").unwrap();
    let zeta = content.find("name = \"zeta\"").unwrap();
    assert!(alpha < zeta);

    let data = parse_job_file(&content).unwrap();
    assert_eq!(data.repositories[0].vcs, "git");
    assert_eq!(
        data.repositories[0].url.as_deref(),
        Some("git@github.com:org/alpha.git")
    );
}

#[test]
fn test_duplicate_entries_rejected_on_load() {
    let env = TestJob::new();
    env.write_job(
        r#"
[[repository]]
name = "a"

[[repository]]
name = "a"
fork = "other"
"#,
    );

    let err = JobFile::open(env.job_file()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<JobFileError>(),
        Some(&JobFileError::Duplicate("a".to_string()))
    );
    assert!(format!("{err:#}").contains("entry a"));
}

#[test]
fn test_unsupported_vcs_rejected_on_load() {
    let env = TestJob::new();
    env.write_job(
        r#"
[[repository]]
name = "a"
vcs = "svn"
"#,
    );

    let err = JobFile::open(env.job_file()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains(".repodeps.toml"));
    assert!(message.contains("Given VCS type 'svn' is not supported"));
}

#[test]
fn test_malformed_file_reports_path() {
    let env = TestJob::new();
    env.write_job("[[repository]]\nname = \n");

    let err = JobFile::open(env.job_file()).unwrap_err();
    assert!(format!("{err:#}").contains(".repodeps.toml"));
}

#[test]
fn test_polled_and_tested_filters() {
    let mut job = JobFile::new("unused.toml");
    job.insert(repo("a", "org", None, true, false)).unwrap();
    job.insert(repo("b", "org", None, false, true)).unwrap();
    job.insert(repo("c", "org", None, true, true)).unwrap();

    let polled: Vec<_> = job.polled().map(Repository::name).collect();
    let tested: Vec<_> = job.tested().map(Repository::name).collect();
    assert_eq!(polled, vec!["a", "c"]);
    assert_eq!(tested, vec!["b", "c"]);
}

#[test]
fn test_remove() {
    let mut job = JobFile::new("unused.toml");
    job.insert(repo("a", "org", None, false, false)).unwrap();

    let removed = job.remove("a").unwrap();
    assert_eq!(removed.name(), "a");
    assert!(job.is_empty());
    assert_eq!(job.remove("a").unwrap_err(), JobFileError::NotFound("a".to_string()));
}
