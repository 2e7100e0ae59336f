use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_without_root_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["provision", "--dry-run", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--root"));
}

#[test]
fn dry_run_against_slash_is_refused() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["provision", "--root", "/", "--dry-run", "--non-interactive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("staging directory"));
}
