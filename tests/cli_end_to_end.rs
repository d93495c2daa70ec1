#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn postboard() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("postboard"));
    cmd.env_remove("POSTBOARD_CONFIG_FILE")
        .env_remove("POSTBOARD__API__BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn posts_list_works_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"posts":[{"_id":"65ab","title":"Hello","content":"World"}]}"#);
    });

    let assert = postboard()
        .arg("--api-url")
        .arg(server.base_url())
        .arg("posts")
        .arg("list")
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("\"id\": \"65ab\""));
    mock.assert();
}

#[test]
fn base_url_can_come_from_config_file() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/posts/7");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"message":"Post deleted successfully"}"#);
    });

    let config = config_file(&format!("[api]\nbase_url = \"{}\"\n", server.base_url()));
    postboard()
        .arg("--config-file")
        .arg(config.path())
        .args(["posts", "delete", "7"])
        .assert()
        .success()
        .stdout(contains("Post deleted successfully"));
    mock.assert();
}

#[test]
fn interactive_session_creates_and_lists() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method("POST")
            .path("/posts")
            .json_body(serde_json::json!({ "title": "Hello", "content": "World" }));
        then.status(201)
            .header("content-type", "application/json")
            .body(r#"{"message":"Post created successfully","post_id":"1"}"#);
    });
    let list = server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"posts":[]}"#);
    });

    postboard()
        .arg("--api-url")
        .arg(server.base_url())
        .write_stdin("set title Hello\nset content World\nsubmit\nquit\n")
        .assert()
        .success()
        .stdout(contains("Share Your Thoughts"))
        .stdout(contains("[Create Post]"));

    create.assert();
    list.assert_calls(2);
}

#[test]
fn unreachable_store_is_logged_not_fatal() {
    // Nothing listens on port 9 of the loopback address.
    postboard()
        .args(["--api-url", "http://127.0.0.1:9", "--log-level", "error"])
        .write_stdin("show\nquit\n")
        .assert()
        .success()
        .stdout(contains("(no posts yet)"))
        .stderr(contains("error fetching posts"));
}

#[test]
fn invalid_base_url_fails_fast() {
    postboard()
        .args(["--api-url", "ftp://example.com", "posts", "list"])
        .assert()
        .failure()
        .stderr(contains("api.base_url"));
}
