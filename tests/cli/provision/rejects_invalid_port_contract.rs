use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn out_of_range_port_exits_with_validation_code() {
    let ctx = TestContext::new();

    ctx.provision()
        .args(["--port", "70000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid port"))
        .stderr(predicate::str::contains("Try: hostprov provision --help"));

    assert!(!ctx.host_path("/opt/dashboard").exists());
}

#[test]
fn invalid_domain_exits_with_validation_code() {
    let ctx = TestContext::new();

    ctx.provision().args(["--domain", "shop example.com"]).assert().code(2);
}

#[test]
fn unknown_profile_is_rejected_by_the_parser() {
    let ctx = TestContext::new();

    ctx.provision()
        .args(["--profile", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("standard, constrained"));
}
