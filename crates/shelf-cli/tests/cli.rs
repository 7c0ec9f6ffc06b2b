//! CLI tests against a mock bookstore API.

use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the CLI binary against the given store, isolated from any ambient config.
async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    let home = tempfile::tempdir().unwrap();
    let port = server.address().port().to_string();

    Command::new(env!("CARGO_BIN_EXE_shelf"))
        .current_dir(home.path())
        .env_remove("SHELF_API_HOST")
        .env_remove("SHELF_API_PORT")
        .env("NO_COLOR", "1")
        .args(["--host", "127.0.0.1", "--port", &port])
        .args(args)
        .output()
        .await
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

async fn mount_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn dune(inventory: u32) -> serde_json::Value {
    json!({
        "isbn": 9780441013593u64,
        "title": "Dune",
        "author_first": "Frank",
        "author_last": "Herbert",
        "inventory": inventory
    })
}

#[tokio::test]
async fn test_view_hides_authors() {
    let server = MockServer::start().await;
    mount_list(&server, json!([dune(3)])).await;

    let output = run_cli(&server, &["view"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("9780441013593"));
    assert!(out.contains("Dune"));
    assert!(!out.contains("Herbert"));
}

#[tokio::test]
async fn test_list_shows_authors() {
    let server = MockServer::start().await;
    mount_list(&server, json!([dune(3)])).await;

    let output = run_cli(&server, &["list"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Frank Herbert"));
}

#[tokio::test]
async fn test_update_commits_and_reports() {
    let server = MockServer::start().await;
    mount_list(&server, json!([dune(3)])).await;

    Mock::given(method("PUT"))
        .and(path("/books/update/9780441013593"))
        .and(body_json(json!({"inventory": 7})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["update", "9780441013593", "7"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Inventory updated successfully!"));
}

#[tokio::test]
async fn test_update_unknown_isbn_sends_nothing() {
    let server = MockServer::start().await;
    mount_list(&server, json!([dune(3)])).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_cli(&server, &["update", "123", "7"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No book with ISBN 123"));
}

#[tokio::test]
async fn test_delete_failure_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/books/delete/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Book not found"})))
        .mount(&server)
        .await;

    let output = run_cli(&server, &["delete", "42"]).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error deleting book. Check console for details."));
    assert!(err.contains("Book not found"));
    assert!(!err.contains("Error:"));
    assert_eq!(err.matches("✗").count(), 1);
}

#[tokio::test]
async fn test_store_address_falls_back_to_environment() {
    let server = MockServer::start().await;
    mount_list(&server, json!([dune(3)])).await;
    let home = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_shelf"))
        .current_dir(home.path())
        .env("SHELF_API_HOST", "127.0.0.1")
        .env("SHELF_API_PORT", server.address().port().to_string())
        .env("NO_COLOR", "1")
        .arg("view")
        .output()
        .await
        .expect("Failed to execute CLI");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Dune"));
}

#[tokio::test]
async fn test_missing_store_address_is_an_error() {
    let home = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_shelf"))
        .current_dir(home.path())
        .env_remove("SHELF_API_HOST")
        .env_remove("SHELF_API_PORT")
        .env("NO_COLOR", "1")
        .arg("view")
        .output()
        .await
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("SHELF_API_HOST is not set"));
}

#[tokio::test]
async fn test_add_posts_form_fields() {
    let server = MockServer::start().await;
    mount_list(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/books/add"))
        .and(body_json(json!({
            "isbn": "B2",
            "title": "New",
            "authorFirstName": "Ann",
            "authorLastName": "Lee",
            "inventory": 0
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli(
        &server,
        &[
            "add",
            "--isbn",
            "B2",
            "--title",
            "New",
            "--author-first",
            "Ann",
            "--author-last",
            "Lee",
        ],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Book added successfully!"));
}
