use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn flags_override_config_file_values() {
    let ctx = TestContext::new();
    let config = ctx.write_work_file(
        "provision.toml",
        "domain = \"shop.example.com\"\nport = 7000\nuser = \"pi\"\ncreate_user = \"no\"\n",
    );

    ctx.provision()
        .arg("--config")
        .arg(&config)
        .args(["--port", "7100"])
        .assert()
        .success();

    let vhost = ctx.read_host("/etc/nginx/sites-available/dashboard");
    assert!(vhost.contains("server_name shop.example.com www.shop.example.com;"));
    assert!(vhost.contains("127.0.0.1:7100"));
    assert!(ctx.read_host("/etc/systemd/system/dashboard.service").contains("User=pi"));
}

#[test]
fn yaml_config_is_accepted() {
    let ctx = TestContext::new();
    let config = ctx.write_work_file("provision.yaml", "profile: constrained\nservice_name: shop\n");

    ctx.provision().arg("--config").arg(&config).assert().success();

    assert!(ctx.read_host("/etc/nginx/sites-available/shop").contains("127.0.0.1:3000"));
    assert!(ctx.host_path("/opt/shop/.env.example").exists());
}

#[test]
fn unknown_config_key_exits_with_error() {
    let ctx = TestContext::new();
    let config = ctx.write_work_file("provision.toml", "domian = \"shop.example.com\"\n");

    ctx.provision()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));
}
