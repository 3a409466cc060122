//! Cluster authentication configuration
//!
//! Read-only input owned by the cluster's authentication subsystem. The
//! operator only inspects the OIDC providers to find the client entry that
//! belongs to the console.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cluster-wide authentication configuration
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "config.openshift.io",
    version = "v1",
    kind = "Authentication",
    plural = "authentications",
    singular = "authentication",
    status = "AuthenticationStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSpec {
    /// Authentication mode of the cluster
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<AuthenticationType>,

    /// External OIDC identity providers, in priority order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oidc_providers: Vec<OidcProvider>,

    /// Issuer written into bound service account tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_account_issuer: Option<String>,

    /// Webhook used to verify bearer tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_token_authenticator: Option<WebhookTokenAuthenticator>,

    /// ConfigMap holding OAuth server metadata
    #[serde(rename = "oauthMetadata", skip_serializing_if = "Option::is_none")]
    pub oauth_metadata: Option<ConfigMapNameReference>,
}

impl AuthenticationSpec {
    /// Whether the cluster delegates login to external OIDC providers
    pub fn is_oidc(&self) -> bool {
        self.type_ == Some(AuthenticationType::Oidc)
    }
}

/// Authentication mode of the cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum AuthenticationType {
    /// Built-in OAuth server
    IntegratedOAuth,
    /// No authentication
    #[serde(rename = "None")]
    Disabled,
    /// External OIDC providers
    #[serde(rename = "OIDC")]
    Oidc,
}

/// An external OIDC identity provider
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OidcProvider {
    /// Provider name
    pub name: String,

    /// Token issuer
    #[serde(default)]
    pub issuer: TokenIssuer,

    /// Clients registered with this provider, one per consuming component
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oidc_clients: Vec<OidcClientConfig>,

    /// Mapping of token claims to cluster identities
    #[serde(default)]
    pub claim_mappings: TokenClaimMappings,

    /// Extra validation applied to token claims
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub claim_validation_rules: Vec<TokenClaimValidationRule>,
}

/// Token issuer of an OIDC provider
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssuer {
    /// Issuer URL, must use https
    #[serde(rename = "issuerURL")]
    pub issuer_url: String,

    /// Accepted token audiences
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audiences: Vec<String>,

    /// ConfigMap holding the CA bundle used to verify the issuer
    #[serde(default)]
    pub issuer_certificate_authority: ConfigMapNameReference,
}

/// OIDC client entry owned by a single cluster component
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientConfig {
    /// Namespace of the component that uses this client
    pub component_namespace: String,

    /// Name of the component that uses this client
    pub component_name: String,

    /// Client identifier registered with the provider
    #[serde(rename = "clientID")]
    pub client_id: String,

    /// Secret holding the client secret under the `clientSecret` key
    #[serde(default)]
    pub client_secret: SecretNameReference,

    /// Scopes requested in addition to the standard ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_scopes: Vec<String>,
}

/// Mapping of token claims to cluster identities
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaimMappings {
    /// Username mapping
    #[serde(default)]
    pub username: UsernameClaimMapping,

    /// Groups mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<PrefixedClaimMapping>,
}

/// Username claim mapping
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsernameClaimMapping {
    /// Claim holding the username
    pub claim: String,

    /// Prefix policy (NoOpinion, NoPrefix, Prefix)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_policy: Option<String>,

    /// Prefix applied when the policy is Prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<UsernamePrefix>,
}

/// Username prefix
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UsernamePrefix {
    /// Literal prefix
    pub prefix_string: String,
}

/// Claim mapping with an optional prefix
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrefixedClaimMapping {
    /// Claim name
    pub claim: String,

    /// Prefix prepended to every value
    #[serde(default)]
    pub prefix: String,
}

/// Validation rule applied to token claims
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaimValidationRule {
    /// Rule type (RequiredClaim)
    #[serde(rename = "type")]
    pub type_: String,

    /// Claim that must carry a given value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_claim: Option<TokenRequiredClaim>,
}

/// Claim that must be present with a given value
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequiredClaim {
    /// Claim name
    pub claim: String,

    /// Required value
    pub required_value: String,
}

/// Webhook token authenticator
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookTokenAuthenticator {
    /// Secret holding the webhook kubeconfig
    pub kube_config: SecretNameReference,
}

/// Reference to a ConfigMap by name
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct ConfigMapNameReference {
    /// ConfigMap name
    pub name: String,
}

/// Reference to a Secret by name
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
pub struct SecretNameReference {
    /// Secret name
    pub name: String,
}

/// Authentication status
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationStatus {
    /// OAuth metadata published by the integrated OAuth server
    #[serde(
        rename = "integratedOAuthMetadata",
        skip_serializing_if = "Option::is_none"
    )]
    pub integrated_oauth_metadata: Option<ConfigMapNameReference>,

    /// Per-component view of the OIDC clients in use
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oidc_clients: Vec<OidcClientStatus>,
}

/// OIDC client state reported by a component
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientStatus {
    /// Namespace of the reporting component
    pub component_namespace: String,

    /// Name of the reporting component
    pub component_name: String,

    /// Clients the component is currently configured with
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_oidc_clients: Vec<OidcClientReference>,

    /// Users allowed to modify the component's client entry
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consuming_users: Vec<String>,
}

/// A client the component currently uses
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OidcClientReference {
    /// Provider the client is registered with
    #[serde(rename = "oidcProviderName")]
    pub oidc_provider_name: String,

    /// Issuer URL of that provider
    #[serde(rename = "issuerURL")]
    pub issuer_url: String,

    /// Client identifier
    #[serde(rename = "clientID")]
    pub client_id: String,
}
