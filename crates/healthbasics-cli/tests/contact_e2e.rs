//! End-to-end contact submission through the binary against a mock endpoint.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn contact_cmd(dir: &TempDir, endpoint: &str) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("healthbasics").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("HEALTHBASICS_CONTACT_ENDPOINT")
        .arg("contact")
        .args(["--name", "A", "--email", "a@b.com", "--message", "hi"])
        .args(["--endpoint", endpoint]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn accepted_submission_prints_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(serde_json_body()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    contact_cmd(&dir, &format!("{}/api/contacts", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent"));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_submission_prints_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    contact_cmd(&dir, &format!("{}/api/contacts", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft saved locally"));
}

fn serde_json_body() -> serde_json::Value {
    serde_json::json!({"name": "A", "email": "a@b.com", "message": "hi"})
}
