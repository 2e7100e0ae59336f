pub mod credentials;
pub mod error;
pub mod profile;
pub mod proxy_route;
pub mod report;
pub mod request;
pub mod service_unit;
pub mod state;
pub mod target;
pub mod validation;

pub use credentials::{CredentialSpec, CredentialsFile, redact};
pub use error::AppError;
pub use profile::DeploymentProfile;
pub use proxy_route::{InstalledCertificate, ProxyRoute, TlsMode};
pub use report::{ArtifactRecord, ArtifactStatus, ProvisionReport, Warning};
pub use request::{DomainName, Port, ProvisioningRequest, RequestDraft, ServiceAccount};
pub use service_unit::{RestartPolicy, ServiceDefinition};
pub use state::{ProvisionState, RunOutcome};
pub use target::InstallationTarget;
