use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rerun_with_same_inputs_is_idempotent() {
    let ctx = TestContext::new();
    let args = ["--domain", "shop.example.com", "--profile", "constrained"];

    ctx.provision().args(args).assert().success();
    let unit = ctx.read_host("/etc/systemd/system/dashboard.service");
    let vhost = ctx.read_host("/etc/nginx/sites-available/dashboard");

    ctx.provision()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("already up to date"))
        .stdout(predicate::str::contains("created").not())
        .stdout(predicate::str::contains("updated").not());

    assert_eq!(ctx.read_host("/etc/systemd/system/dashboard.service"), unit);
    assert_eq!(ctx.read_host("/etc/nginx/sites-available/dashboard"), vhost);
}

#[test]
fn filled_in_credentials_survive_rerun() {
    let ctx = TestContext::new();
    ctx.provision().assert().success();

    let env_file = ctx.host_path("/opt/dashboard/.env");
    std::fs::write(&env_file, "WOOCOMMERCE_KEY=ck_live_0123456789\n").unwrap();

    ctx.provision().assert().success().stdout(predicate::str::contains("preserved"));

    assert_eq!(std::fs::read_to_string(env_file).unwrap(), "WOOCOMMERCE_KEY=ck_live_0123456789\n");
}
