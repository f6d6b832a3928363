use assert_cmd::Command;

#[test]
fn rejects_non_youtube_url() {
    Command::cargo_bin("ytcap")
        .unwrap()
        .arg("https://example.com/watch?v=abc")
        .assert()
        .failure();
}

#[test]
fn rejects_unparsable_url() {
    Command::cargo_bin("ytcap")
        .unwrap()
        .arg("not a url")
        .assert()
        .failure();
}

#[test]
fn requires_a_url_argument() {
    Command::cargo_bin("ytcap").unwrap().assert().failure();
}

#[test]
fn prints_help() {
    Command::cargo_bin("ytcap")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}
