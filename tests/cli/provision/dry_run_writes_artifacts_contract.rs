use crate::harness::TestContext;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn dry_run_writes_every_artifact_under_root() {
    let ctx = TestContext::new();

    ctx.provision()
        .args(["--domain", "shop.example.com", "--tls", "yes", "--port", "8502"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Host provisioned"))
        .stdout(predicate::str::contains("systemctl enable --now dashboard"));

    let unit = ctx.read_host("/etc/systemd/system/dashboard.service");
    assert!(unit.contains("--server.port 8502"));
    assert!(unit.contains("User=dashboard"));

    let vhost = ctx.read_host("/etc/nginx/sites-available/dashboard");
    assert!(vhost.contains("server_name shop.example.com www.shop.example.com;"));
    assert!(vhost.contains("proxy_pass http://127.0.0.1:8502;"));
    ChildPath::new(ctx.host_path("/etc/nginx/sites-enabled/dashboard"))
        .assert(predicate::path::is_symlink());
    assert_eq!(ctx.read_host("/etc/nginx/sites-enabled/dashboard"), vhost);

    assert!(ctx.read_host("/opt/dashboard/.env.example").contains("WOOCOMMERCE_SECRET="));
    ChildPath::new(ctx.host_path("/opt/dashboard/.env")).assert(predicate::path::is_file());
    assert!(ctx.read_host("/opt/dashboard/load_env.sh").starts_with("#!/usr/bin/env bash"));
    assert!(ctx.read_host("/opt/dashboard/requirements.txt").contains("streamlit"));
    assert!(ctx.read_host("/opt/dashboard/NEXT_STEPS.md").contains("# Next steps for dashboard"));
}
