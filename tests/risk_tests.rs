use predicates::prelude::*;

#[test]
fn risk_command_prints_the_full_report() {
    let mut cmd = assert_cmd::Command::cargo_bin("airrisk").unwrap();
    cmd.args(["risk", "-c", "120", "-n", "0.12", "-t", "130"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Overbooking Risk Report"))
        .stdout(predicate::str::contains("Capacity: 120"))
        .stdout(predicate::str::contains("Tickets sold: 130"))
        .stdout(predicate::str::contains("Overbooking probability:"))
        .stdout(predicate::str::contains("Max tickets within 7.00% risk:"))
        .stdout(predicate::str::contains("Financial analysis:"))
        .stdout(predicate::str::contains("Additional revenue: 5000.00"));
}

#[test]
fn risk_command_rejects_tickets_below_capacity() {
    let mut cmd = assert_cmd::Command::cargo_bin("airrisk").unwrap();
    cmd.args(["risk", "-c", "120", "-n", "0.12", "-t", "100"]);

    cmd.assert().stderr(predicate::str::contains(
        "Tickets sold (100) must be at least the capacity (120)",
    ));
}

#[test]
fn risk_command_rejects_an_invalid_no_show_rate() {
    let mut cmd = assert_cmd::Command::cargo_bin("airrisk").unwrap();
    cmd.args(["risk", "-c", "120", "-n", "1.5", "-t", "130"]);

    cmd.assert()
        .stderr(predicate::str::contains("Failed to build overbooking model"));
}
