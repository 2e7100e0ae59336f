mod confirms_with_redacted_values_contract;
mod runs_command_with_credentials_contract;
