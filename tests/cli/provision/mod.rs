mod config_file_precedence_contract;
mod dry_run_requires_root_contract;
mod dry_run_writes_artifacts_contract;
mod json_report_contract;
mod rejects_invalid_port_contract;
mod rerun_reports_unchanged_contract;
mod short_alias_contract;
mod tls_without_domain_warns_contract;
