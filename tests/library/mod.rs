mod provision_public_api_contract;
