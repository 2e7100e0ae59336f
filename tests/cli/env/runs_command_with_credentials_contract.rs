use crate::harness::TestContext;

#[cfg(unix)]
#[test]
fn command_sees_credentials_and_its_exit_code_is_returned() {
    let ctx = TestContext::new();
    ctx.write_work_file(".env", "WOOCOMMERCE_KEY=ck_0123456789abcdef\n");

    ctx.cli()
        .args(["env", "--", "sh", "-c", "test \"$WOOCOMMERCE_KEY\" = ck_0123456789abcdef || exit 9; exit 4"])
        .assert()
        .code(4);
}
