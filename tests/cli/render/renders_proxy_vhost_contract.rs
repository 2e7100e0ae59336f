use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_vhost_for_domain() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "proxy", "--domain", "https://Shop.Example.com/wp-admin", "--port", "8700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server_name shop.example.com www.shop.example.com;"))
        .stdout(predicate::str::contains("proxy_pass http://127.0.0.1:8700;"))
        .stdout(predicate::str::contains("proxy_set_header Connection \"upgrade\";"));
}

#[test]
fn prints_default_server_without_domain() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["render", "proxy", "--profile", "constrained"])
        .assert()
        .success()
        .stdout(predicate::str::contains("listen 80 default_server;"))
        .stdout(predicate::str::contains("proxy_pass http://127.0.0.1:3000;"));
}
