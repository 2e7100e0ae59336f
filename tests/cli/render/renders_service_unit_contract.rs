use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_unit_for_given_values() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "service", "--port", "8600", "--user", "pi", "--service-name", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User=pi\n"))
        .stdout(predicate::str::contains("WorkingDirectory=/opt/shop\n"))
        .stdout(predicate::str::contains(
            "ExecStart=/opt/shop/venv/bin/streamlit run /opt/shop/woocommerce_dashboard.py \
             --server.port 8600 --server.address 127.0.0.1 --server.headless true\n",
        ))
        .stdout(predicate::str::contains("SyslogIdentifier=shop\n"));
}

#[test]
fn render_never_touches_the_filesystem() {
    let ctx = TestContext::new();

    ctx.cli().args(["render", "service"]).assert().success();

    assert_eq!(std::fs::read_dir(ctx.work_dir()).unwrap().count(), 0);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let ctx = TestContext::new();

    let first = ctx.cli().args(["render", "service"]).output().unwrap();
    let second = ctx.cli().args(["render", "service"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
