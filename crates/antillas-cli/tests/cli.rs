use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn antillas(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("antillas").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("antillas").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: antillas"))
        .stdout(predicate::str::contains("location"))
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("chat"));
}

#[test]
fn test_location_defaults_to_unconfirmed() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cayman Islands"))
        .stdout(predicate::str::contains("not confirmed"));
}

#[test]
fn test_select_persists_across_runs() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["location", "select", "jamaica"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Location set to"));

    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jamaica"))
        .stdout(predicate::str::contains("confirmed"))
        .stdout(predicate::str::contains("not confirmed").not());

    assert!(data_dir.path().join("preferences.json").exists());
}

#[test]
fn test_reset_clears_confirmation() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["location", "select", "jamaica"])
        .assert()
        .success();
    antillas(&data_dir)
        .args(["location", "reset"])
        .assert()
        .success();

    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not confirmed"));
}

#[test]
fn test_select_unknown_region_fails() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["location", "select", "bahamas"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported region: 'bahamas'"));
}

#[test]
fn test_ask_uses_selected_region() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["location", "select", "jamaica"])
        .assert()
        .success();

    antillas(&data_dir)
        .args(["ask", "need", "a", "cleaner", "for", "my", "house"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep House Cleaning"))
        .stdout(predicate::str::contains("J$5,500"));
}

#[test]
fn test_ask_with_explicit_region() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["ask", "--region", "cayman", "My pipe is leaking, help!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plumbers in Cayman Islands"))
        .stdout(predicate::str::contains("CI$120/hr"))
        .stdout(predicate::str::contains("[Book emergency service]"));
}

#[test]
fn test_ask_fallback() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["ask", "xyzzy unrelated text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"xyzzy unrelated text\""))
        .stdout(predicate::str::contains("[More details]"));
}

#[test]
fn test_location_list() {
    let data_dir = TempDir::new().unwrap();
    antillas(&data_dir)
        .args(["location", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cayman"))
        .stdout(predicate::str::contains("Montego Bay"));
}

fn chat_data_dir() -> TempDir {
    let data_dir = TempDir::new().unwrap();
    std::fs::write(data_dir.path().join("config.toml"), "typing_delay_ms = 0\n").unwrap();
    data_dir
}

#[test]
fn test_chat_prompts_for_region_and_switches() {
    let data_dir = chat_data_dir();
    antillas(&data_dir)
        .arg("chat")
        .write_stdin("2\nleaky pipe\n/region cayman\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Where are you located?"))
        .stdout(predicate::str::contains("perfect service provider in Jamaica"))
        .stdout(predicate::str::is_match(r"(?s)J\$8,500/hr.*perfect service provider in Cayman Islands").unwrap())
        .stdout(predicate::str::contains("Goodbye!"));

    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cayman Islands"))
        .stdout(predicate::str::contains("not confirmed").not());
}

#[test]
fn test_chat_region_prompt_choice_is_persisted() {
    let data_dir = chat_data_dir();
    antillas(&data_dir)
        .arg("chat")
        .write_stdin("jamaica\n/quit\n")
        .assert()
        .success();

    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jamaica"))
        .stdout(predicate::str::contains("not confirmed").not());
}

#[test]
fn test_chat_switch_keeps_saved_location() {
    let data_dir = chat_data_dir();
    antillas(&data_dir)
        .args(["location", "select", "jamaica"])
        .assert()
        .success();

    antillas(&data_dir)
        .arg("chat")
        .write_stdin("/switch\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("perfect service provider in Jamaica"))
        .stdout(predicate::str::contains("Where are you located?"))
        .stdout(predicate::str::contains("Goodbye!"));

    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jamaica"))
        .stdout(predicate::str::contains("not confirmed").not());
}

#[test]
fn test_chat_eof_at_region_prompt_exits() {
    let data_dir = chat_data_dir();
    antillas(&data_dir)
        .arg("chat")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Where are you located?"));

    antillas(&data_dir)
        .args(["location", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not confirmed"));
}

#[test]
fn test_chat_unknown_command_shows_help() {
    let data_dir = chat_data_dir();
    antillas(&data_dir)
        .args(["chat", "--region", "cayman"])
        .write_stdin("/foo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: /foo"))
        .stdout(predicate::str::contains("/region <name>"))
        .stdout(predicate::str::contains("looking for \"/foo\"").not());
}
