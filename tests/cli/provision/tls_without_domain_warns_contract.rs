use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn tls_without_domain_serves_http_with_warning() {
    let ctx = TestContext::new();

    ctx.provision()
        .args(["--tls", "yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TLS requested without a domain"))
        .stdout(predicate::str::contains("certbot").not());

    assert!(ctx.read_host("/etc/nginx/sites-available/dashboard").contains("server_name _;"));
}
