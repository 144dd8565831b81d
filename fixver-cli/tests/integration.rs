use std::str;

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn help_lists_all_subcommands() -> Result<()> {
  let assert = cargo_bin_cmd!("fixver").env("NO_COLOR", "1").arg("--help").assert().success();

  let stdout = str::from_utf8(&assert.get_output().stdout)?;
  assert!(stdout.contains("createRelease"), "createRelease not found in help output");
  assert!(stdout.contains("assignRelease"), "assignRelease not found in help output");
  assert!(
    stdout.contains("createAndAssign"),
    "createAndAssign not found in help output"
  );

  Ok(())
}

#[test]
fn create_release_requires_connection_flags() -> Result<()> {
  cargo_bin_cmd!("fixver")
    .env("NO_COLOR", "1")
    .args(["createRelease", "-v", "1.2.3", "-p", "MB"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--user"));

  Ok(())
}

#[test]
fn assign_release_requires_issue_sources() -> Result<()> {
  cargo_bin_cmd!("fixver")
    .env("NO_COLOR", "1")
    .args([
      "assignRelease",
      "-u",
      "bot@example.com",
      "-s",
      "https://example.atlassian.net",
      "-t",
      "secret",
      "-v",
      "1.2.3",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("no issues provided"));

  Ok(())
}

#[test]
fn create_release_creates_version() -> Result<()> {
  // The runtime stays alive for the whole test so the mock server keeps
  // serving while the subprocess runs.
  let rt = Runtime::new()?;
  let server = rt.block_on(async {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/latest/version"))
      .and(basic_auth("bot@example.com", "secret"))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
        "self": "https://example.atlassian.net/rest/api/latest/version/10000",
        "id": "10000",
        "name": "1.2.3",
        "archived": false,
        "released": true,
        "projectId": 12345
      })))
      .mount(&server)
      .await;

    server
  });

  cargo_bin_cmd!("fixver")
    .env("NO_COLOR", "1")
    .args([
      "createRelease",
      "-u",
      "bot@example.com",
      "-s",
      &server.uri(),
      "-t",
      "secret",
      "-v",
      "1.2.3",
      "-p",
      "MB",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Created release 1.2.3 with id 10000"));

  let requests = rt
    .block_on(server.received_requests())
    .ok_or_else(|| anyhow::anyhow!("request recording disabled"))?;
  assert_eq!(requests.len(), 1);

  Ok(())
}

#[test]
fn create_and_assign_runs_end_to_end() -> Result<()> {
  let rt = Runtime::new()?;
  let server = rt.block_on(async {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/latest/version"))
      .and(basic_auth("bot@example.com", "secret"))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
        "self": "https://example.atlassian.net/rest/api/latest/version/10000",
        "id": "10000",
        "name": "1.2.3",
        "released": true
      })))
      .mount(&server)
      .await;

    for issue_key in ["MB-1337", "MB-1338"] {
      Mock::given(method("PUT"))
        .and(path(format!("/rest/api/latest/issue/{issue_key}")))
        .and(basic_auth("bot@example.com", "secret"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    }

    server
  });

  cargo_bin_cmd!("fixver")
    .env("NO_COLOR", "1")
    .args([
      "createAndAssign",
      "-u",
      "bot@example.com",
      "-s",
      &server.uri(),
      "-t",
      "secret",
      "-v",
      "1.2.3",
      "-p",
      "MB",
      "-b",
      "Fixes MB-1337 and also MB-1338",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Created release 1.2.3 with id 10000"))
    .stdout(predicate::str::contains("Assigned version 1.2.3 to 2 issue(s)"));

  let requests = rt
    .block_on(server.received_requests())
    .ok_or_else(|| anyhow::anyhow!("request recording disabled"))?;
  assert_eq!(requests.len(), 3);
  assert_eq!(requests[0].method.as_str(), "POST");
  assert_eq!(requests[1].url.path(), "/rest/api/latest/issue/MB-1337");
  assert_eq!(requests[2].url.path(), "/rest/api/latest/issue/MB-1338");

  Ok(())
}

#[test]
fn create_release_reports_remote_failure() -> Result<()> {
  let rt = Runtime::new()?;
  let server = rt.block_on(async {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/rest/api/latest/version"))
      .respond_with(ResponseTemplate::new(400).set_body_json(json!({
        "errorMessages": [],
        "errors": {
          "name": "A version with this name already exists in this project."
        }
      })))
      .mount(&server)
      .await;

    server
  });

  cargo_bin_cmd!("fixver")
    .env("NO_COLOR", "1")
    .args([
      "createRelease",
      "-u",
      "bot@example.com",
      "-s",
      &server.uri(),
      "-t",
      "secret",
      "-v",
      "1.2.3",
      "-p",
      "MB",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains(
      "request unsuccessful (400 Bad Request): A version with this name already exists in this project.",
    ));

  Ok(())
}
