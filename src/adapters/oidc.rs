//! Lookup of the console's OIDC client in the cluster authentication config

use tracing::debug;

use crate::constants::{OPENSHIFT_CONSOLE_NAME, TARGET_NAMESPACE};
use crate::crd::{Authentication, OidcClientConfig, OidcProvider};

/// An OIDC client together with the provider it is registered under
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OwnedOidcClient<'a> {
    /// Provider holding the client
    pub provider: &'a OidcProvider,
    /// Client entry owned by the component
    pub client: &'a OidcClientConfig,
}

/// Find the OIDC client owned by the component `want_namespace/want_name`
///
/// Providers are searched in order, then clients within each provider. At most
/// one entry is expected to match; if several do, the first one wins.
pub fn find_owned_oidc_client<'a>(
    auth: &'a Authentication,
    want_namespace: &str,
    want_name: &str,
) -> Option<OwnedOidcClient<'a>> {
    let providers = &auth.spec.oidc_providers;
    if providers.is_empty() {
        return None;
    }

    let found = providers.iter().find_map(|provider| {
        provider
            .oidc_clients
            .iter()
            .find(|client| {
                client.component_namespace == want_namespace && client.component_name == want_name
            })
            .map(|client| OwnedOidcClient { provider, client })
    });

    if found.is_none() {
        debug!(
            namespace = want_namespace,
            name = want_name,
            providers = providers.len(),
            "No OIDC client configured for component"
        );
    }
    found
}

/// Find the OIDC client owned by the console
pub fn get_oidc_client_config(auth: &Authentication) -> Option<OwnedOidcClient<'_>> {
    find_owned_oidc_client(auth, TARGET_NAMESPACE, OPENSHIFT_CONSOLE_NAME)
}
