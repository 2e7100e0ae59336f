//! Reverse-proxy route for the deployed application.

use serde::Serialize;

use crate::domain::{DomainName, ServiceDefinition};

/// Wildcard server name used when no domain was given.
pub const WILDCARD_SERVER_NAME: &str = "_";

/// Read timeout long enough for idle websocket sessions.
pub const READ_TIMEOUT_SECS: u32 = 86400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TlsMode {
    None,
    ManagedCertificate,
}

/// A forwarded request header and the nginx value it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardedHeader {
    pub name: &'static str,
    pub value: &'static str,
}

const FORWARDED_HEADERS: &[ForwardedHeader] = &[
    ForwardedHeader { name: "Host", value: "$host" },
    ForwardedHeader { name: "X-Real-IP", value: "$remote_addr" },
    ForwardedHeader { name: "X-Forwarded-For", value: "$proxy_add_x_forwarded_for" },
    ForwardedHeader { name: "X-Forwarded-Proto", value: "$scheme" },
    ForwardedHeader { name: "Upgrade", value: "$http_upgrade" },
    ForwardedHeader { name: "Connection", value: "\"upgrade\"" },
];

/// A certificate already issued for the route's domain.
///
/// When present the virtual host terminates TLS itself, so a rerun renders
/// the same HTTPS server certbot installed instead of dropping it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledCertificate {
    pub fullchain: String,
    pub private_key: String,
    pub options_include: Option<String>,
    pub dhparam: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyRoute {
    pub name: String,
    pub server_names: Vec<String>,
    pub upstream_host: &'static str,
    pub upstream_port: u16,
    pub headers: Vec<ForwardedHeader>,
    pub read_timeout_secs: u32,
    pub tls: TlsMode,
}

impl ProxyRoute {
    /// Route public traffic to `service`.
    ///
    /// The upstream port is read from the service definition so the two
    /// generated files always agree.
    pub fn for_service(
        service: &ServiceDefinition,
        domain: Option<&DomainName>,
        tls_requested: bool,
    ) -> Self {
        let (server_names, tls) = match domain {
            Some(domain) => (
                domain.server_names(),
                if tls_requested { TlsMode::ManagedCertificate } else { TlsMode::None },
            ),
            None => (vec![WILDCARD_SERVER_NAME.to_string()], TlsMode::None),
        };

        Self {
            name: service.name.clone(),
            server_names,
            upstream_host: service.listen_host,
            upstream_port: service.listen_port().get(),
            headers: FORWARDED_HEADERS.to_vec(),
            read_timeout_secs: READ_TIMEOUT_SECS,
            tls,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.server_names.iter().any(|n| n == WILDCARD_SERVER_NAME)
    }
}
