use assert_cmd::Command;
use predicates::prelude::*;

fn cheatbank(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cheatbank").unwrap();
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn add_list_delete_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["add", "midterm quiz", "--tag", "cs2103t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New cheatsheet added"))
        .stdout(predicate::str::contains("midterm quiz"));

    cheatbank(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("midterm quiz"))
        .stdout(predicate::str::contains("cs2103t"));

    cheatbank(&data_file)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Cheatsheet"));

    cheatbank(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cheatsheets to show"));
}

#[test]
fn duplicate_add_fails_with_user_message() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["add", "midterm quiz", "--tag", "cs2103t"])
        .assert()
        .success();

    cheatbank(&data_file)
        .args(["add", "midterm quiz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("This cheatsheet already exists"));

    // The original entry survived the failed add.
    cheatbank(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("cs2103t"));
}

#[test]
fn delete_out_of_bounds_reports_invalid_index() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The cheatsheet index provided is invalid",
        ));
}

#[test]
fn exec_runs_free_text_commands() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["exec", "add", "t/midterm", "quiz", "tag/cs2103t"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New cheatsheet added"));

    cheatbank(&data_file)
        .args(["exec", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted Cheatsheet"));
}

#[test]
fn find_narrows_the_listing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["add", "midterm quiz"])
        .assert()
        .success();
    cheatbank(&data_file)
        .args(["add", "final exam"])
        .assert()
        .success();

    cheatbank(&data_file)
        .args(["find", "quiz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 cheatsheets listed"))
        .stdout(predicate::str::contains("midterm quiz"))
        .stdout(predicate::str::contains("final exam").not());
}

#[test]
fn clear_empties_the_bank() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["add", "midterm quiz"])
        .assert()
        .success();

    cheatbank(&data_file)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared"));

    cheatbank(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No cheatsheets to show"));
}

#[test]
fn invalid_tag_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("bank.json");

    cheatbank(&data_file)
        .args(["add", "quiz", "--tag", "two words"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alphanumeric"));
}
