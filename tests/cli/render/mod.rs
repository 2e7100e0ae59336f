mod renders_proxy_vhost_contract;
mod renders_service_unit_contract;
