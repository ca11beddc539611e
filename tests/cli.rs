use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "roomsplit";

fn roomsplit(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("ROOMSPLIT_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add_participants(data_dir: &TempDir, names: &[&str]) {
    for name in names {
        roomsplit(data_dir)
            .args(["participant", "add", name])
            .assert()
            .success()
            .stdout(contains(format!("Added participant: {}", name)));
    }
}

#[test]
fn three_way_split_scenario() {
    let data_dir = TempDir::new().unwrap();
    add_participants(&data_dir, &["A", "B", "C"]);

    roomsplit(&data_dir)
        .args(["expense", "add", "Groceries", "30", "--payer", "A"])
        .assert()
        .success()
        .stdout(contains("B owes $10.00").and(contains("C owes $10.00")));

    roomsplit(&data_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("$20.00").and(contains("-$10.00")))
        .stdout(contains("is owed $20.00"));

    roomsplit(&data_dir)
        .args(["balance", "--participant", "B"])
        .assert()
        .success()
        .stdout(contains("B owes $10.00"));
}

#[test]
fn duplicate_participant_fails() {
    let data_dir = TempDir::new().unwrap();
    add_participants(&data_dir, &["Alice"]);

    roomsplit(&data_dir)
        .args(["participant", "add", "Alice"])
        .assert()
        .failure()
        .stderr(contains("Participant already exists: Alice"));
}

#[test]
fn invalid_expenses_are_rejected() {
    let data_dir = TempDir::new().unwrap();

    roomsplit(&data_dir)
        .args(["expense", "add", "Rent", "1200", "--payer", "A"])
        .assert()
        .failure()
        .stderr(contains("No participants"));

    add_participants(&data_dir, &["A", "B"]);

    roomsplit(&data_dir)
        .args(["expense", "add", "Rent", "abc", "--payer", "A"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    roomsplit(&data_dir)
        .args(["expense", "add", "Rent", "1200", "--payer", "Zed"])
        .assert()
        .failure()
        .stderr(contains("Payer is not a participant: Zed"));

    roomsplit(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn removed_participant_keeps_balance() {
    let data_dir = TempDir::new().unwrap();
    add_participants(&data_dir, &["A", "B", "C"]);

    roomsplit(&data_dir)
        .args(["expense", "add", "Dinner", "30", "--payer", "A"])
        .assert()
        .success();

    roomsplit(&data_dir)
        .args(["participant", "remove", "C"])
        .assert()
        .success();

    roomsplit(&data_dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("C (former)"));
}

#[test]
fn export_json_to_stdout() {
    let data_dir = TempDir::new().unwrap();
    add_participants(&data_dir, &["A", "B"]);

    roomsplit(&data_dir)
        .args(["expense", "add", "Internet", "45.99", "--payer", "B"])
        .assert()
        .success();

    roomsplit(&data_dir)
        .args(["export", "json", "--pretty"])
        .assert()
        .success()
        .stdout(contains("\"schema_version\"").and(contains("\"Internet\"")));
}

#[test]
fn audit_records_changes() {
    let data_dir = TempDir::new().unwrap();
    add_participants(&data_dir, &["A"]);

    roomsplit(&data_dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("added participant A"));
}
