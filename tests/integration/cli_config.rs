use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn config_show_defaults() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base URL"))
        .stdout(predicate::str::contains("http://localhost:8081"))
        .stdout(predicate::str::contains("coreui_Datastore.readTypes"))
        .stdout(predicate::str::contains("30"));
}

#[test]
fn config_set_read_api_strips_namespace() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "read_api", "NX.direct.coreui_Datastore.readTypes"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "get", "read_api"])
        .assert()
        .success()
        .stdout(predicate::str::diff("coreui_Datastore.readTypes\n"));
}

#[test]
fn config_set_timeout() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "timeout_secs", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set timeout_secs = 5"));

    env.cmd()
        .args(["config", "get", "timeout_secs"])
        .assert()
        .success()
        .stdout(predicate::str::diff("5\n"));
}

#[test]
fn config_unset_username() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "username", "admin"])
        .assert()
        .success();
    env.cmd()
        .args(["config", "set", "username", "none"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "get", "username"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_set_invalid_key() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "set", "nonexistent_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown config key"));
}

#[test]
fn config_set_invalid_values() {
    let env = TestEnv::new();

    for (key, value, message) in [
        ("timeout_secs", "0", "invalid timeout_secs"),
        ("read_api", "readTypes", "invalid read_api"),
        ("base_url", "not a url", "invalid base_url"),
        ("endpoint_path", "service/extdirect", "invalid endpoint_path"),
    ] {
        env.cmd()
            .args(["config", "set", key, value])
            .assert()
            .failure()
            .stderr(predicate::str::contains(message));
    }
}
