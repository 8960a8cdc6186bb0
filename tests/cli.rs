use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn summary_lists_governing_reactions() {
    Command::cargo_bin("movingload")
        .unwrap()
        .args(["--vehicle", "LM1", "--span", "30", "--interval", "0.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moving load analysis: LM1"))
        .stdout(predicate::str::contains("588.00 kN"));
}

#[test]
fn json_output_contains_the_matrices() {
    Command::cargo_bin("movingload")
        .unwrap()
        .args(["-t", "sv80", "-c", "5.0", "-s", "20", "--load-set", "NL", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shear_ordinates\""))
        .stdout(predicate::str::contains("\"LM3_SV80\""));
}

#[test]
fn unknown_vehicle_is_reported() {
    Command::cargo_bin("movingload")
        .unwrap()
        .args(["--vehicle", "xyz", "--span", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'xyz' is not a valid vehicle type"));
}

#[test]
fn zero_span_is_reported() {
    Command::cargo_bin("movingload")
        .unwrap()
        .args(["--vehicle", "lm1", "--span", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("beam length must be a positive"));
}

#[test]
fn excessive_precision_is_reported() {
    Command::cargo_bin("movingload")
        .unwrap()
        .args(["--vehicle", "lm1", "--span", "30", "--decimal-places", "400"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimal places must be at most 15"));
}

#[test]
fn oversized_sample_grid_is_reported() {
    Command::cargo_bin("movingload")
        .unwrap()
        .args(["--vehicle", "lm1", "--span", "1e300", "--interval", "1e-300"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 1000000 samples"));
}
