use crate::harness::TestContext;
use serde_json::Value;

#[test]
fn json_report_lists_states_and_artifacts() {
    let ctx = TestContext::new();

    let output = ctx.provision().arg("--json").output().unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"]["result"], "done");

    let completed: Vec<&str> =
        report["completed"].as_array().unwrap().iter().filter_map(Value::as_str).collect();
    assert_eq!(completed.first(), Some(&"CollectingInput"));
    assert_eq!(completed.last(), Some(&"Done"));
    assert!(!completed.contains(&"IssuingCertificate"));

    let artifacts = report["artifacts"].as_array().unwrap();
    assert!(artifacts.iter().any(|a| a["path"] == "/etc/systemd/system/dashboard.service"
        && a["status"] == "created"));
    assert!(report["started_at"].is_string());
}
