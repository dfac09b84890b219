use assert_cmd::Command;
use predicates::str::contains;
use rstest::rstest;
use std::fs;

const FIELDS: &str = r#"[
    {"id": 3, "systemName": "custom_env", "typeId": 12,
     "configs": [{"id": "g", "context": {"isGlobal": true}, "options": {"items": "1, Stage\n2, Prod"}}]},
    {"id": 4, "systemName": "custom_url", "typeId": 4,
     "configs": [{"id": "g", "context": {"isGlobal": true}, "options": {"defaultValue": "https://a.b", "hint": 1}}]}
]"#;

fn fields_file() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fields.json");
    fs::write(&path, FIELDS).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

fn command() -> Command {
    let mut cmd = Command::cargo_bin("testrail-fields").unwrap();
    cmd.env("TESTRAIL_FIELDS_CONFIG", "non/existent/config.json");
    cmd
}

#[test]
fn test_list_output() {
    let (_dir, path) = fields_file();
    command()
        .args(["list", "-f", &path])
        .assert()
        .success()
        .stdout(contains("3\tcustom_env\tMULTI_SELECT\t1\n4\tcustom_url\tURL\t1"));
}

#[test]
fn test_list_from_stdin() {
    command()
        .args(["list", "-f", "-"])
        .write_stdin(FIELDS)
        .assert()
        .success()
        .stdout(contains("custom_env"));
}

#[test]
fn test_show_compact_keeps_unknown_members() {
    let (_dir, path) = fields_file();
    command()
        .args(["show", "-f", &path, "-i", "4", "--compact"])
        .assert()
        .success()
        .stdout(contains(r#""options":{"isRequired":false,"defaultValue":"https://a.b","hint":1}"#));
}

#[test]
fn test_show_uses_config_file() {
    let (dir, path) = fields_file();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{"pretty": false}"#).unwrap();
    Command::cargo_bin("testrail-fields")
        .unwrap()
        .env("TESTRAIL_FIELDS_CONFIG", &config_path)
        .args(["show", "-f", &path, "-i", "3"])
        .assert()
        .success()
        .stdout(contains(r#"{"id":3,"#));
}

#[test]
fn test_items_output() {
    let (_dir, path) = fields_file();
    command()
        .args(["items", "-f", &path, "-i", "3"])
        .assert()
        .success()
        .stdout(contains("# config g\n1\tStage\n2\tProd"));
}

#[test]
fn test_items_of_field_without_items_fails() {
    let (_dir, path) = fields_file();
    command()
        .args(["items", "-f", &path, "-i", "4"])
        .assert()
        .failure()
        .stderr(contains("Field with ID == 4 has no item list"));
}

#[test]
fn test_unknown_field_fails() {
    let (_dir, path) = fields_file();
    command()
        .args(["show", "-f", &path, "-i", "99"])
        .assert()
        .failure()
        .stderr(contains("Field with ID == 99 not found"));
}

#[test]
fn test_invalid_payload_fails() {
    command()
        .args(["list", "-f", "-"])
        .write_stdin(r#"[{"id": 1, "typeId": 5, "configs": [{"options": {"defaultValue": "1"}}]}]"#)
        .assert()
        .failure()
        .stderr(contains("Expected a JSON integer"));
}

#[test]
fn test_broken_config_fails() {
    let (dir, path) = fields_file();
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, "not json").unwrap();
    Command::cargo_bin("testrail-fields")
        .unwrap()
        .env("TESTRAIL_FIELDS_CONFIG", &config_path)
        .args(["list", "-f", &path])
        .assert()
        .failure()
        .stderr(contains("Couldn't parse the config"));
}

#[rstest]
#[case("list")]
#[case("show")]
#[case("items")]
fn test_missing_required_args(#[case] subcommand: String) {
    command()
        .arg(subcommand)
        .assert()
        .failure()
        .stderr(contains("required"));
}
