use crate::harness::TestContext;

#[test]
fn short_aliases_execute_commands() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("p")
        .arg("--root")
        .arg(ctx.host_root())
        .args(["--dry-run", "--non-interactive"])
        .assert()
        .success();
    ctx.cli().args(["r", "service"]).assert().success();
}
