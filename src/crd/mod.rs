//! Custom Resource Definitions read or decoded by the console operator

mod authentication;
mod console;
mod managed_proxy_service_resolver;

pub use authentication::*;
pub use console::*;
pub use managed_proxy_service_resolver::*;

use kube::CustomResourceExt;

use crate::{Error, Result};

/// Generate CRD YAML manifests for all custom resources
pub fn generate_crds() -> Result<Vec<String>> {
    [
        Console::crd(),
        Authentication::crd(),
        ManagedProxyServiceResolver::crd(),
    ]
    .iter()
    .map(|crd| {
        serde_yaml::to_string(crd)
            .map_err(|e| Error::SerializationError(format!("Failed to render CRD: {}", e)))
    })
    .collect()
}
