use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn prints_redacted_confirmations_and_missing_keys() {
    let ctx = TestContext::new();
    ctx.write_work_file(
        ".env",
        "# store\nWOOCOMMERCE_URL=https://shop.example.com\nexport WOOCOMMERCE_KEY=\"ck_0123456789abcdef\"\nSHORT=abc\n",
    );

    ctx.cli()
        .arg("env")
        .assert()
        .success()
        .stdout(predicate::str::contains("WOOCOMMERCE_URL=htt…com\n"))
        .stdout(predicate::str::contains("WOOCOMMERCE_KEY=ck_…def\n"))
        .stdout(predicate::str::contains("SHORT=••••••••\n"))
        .stdout(predicate::str::contains("0123456789").not())
        .stderr(predicate::str::contains("Missing required credential: WOOCOMMERCE_SECRET"));
}

#[test]
fn missing_file_fails() {
    let ctx = TestContext::new();

    ctx.cli().args(["env", "--file", "absent.env"]).assert().code(1);
}

#[test]
fn malformed_file_names_the_line() {
    let ctx = TestContext::new();
    ctx.write_work_file("bad.env", "A=1\nnot a pair\n");

    ctx.cli()
        .args(["env", "--file", "bad.env"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}
