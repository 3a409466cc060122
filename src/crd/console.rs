//! Console operator Custom Resource Definition
//!
//! The `Console` resource is the controller handle that owns every object the
//! operator manages for the web console.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Console operator configuration
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "operator.openshift.io",
    version = "v1",
    kind = "Console",
    plural = "consoles",
    singular = "console",
    status = "ConsoleStatus",
    printcolumn = r#"{"name": "State", "type": "string", "jsonPath": ".spec.managementState"}"#,
    printcolumn = r#"{"name": "Age", "type": "date", "jsonPath": ".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSpec {
    /// Whether the operator manages the console (Managed, Unmanaged, Removed)
    #[serde(default = "default_management_state")]
    pub management_state: String,

    /// Operand log level (Normal, Debug, Trace, TraceAll)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Operator log level (Normal, Debug, Trace, TraceAll)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_log_level: Option<String>,

    /// Branding and documentation overrides
    #[serde(default)]
    pub customization: ConsoleCustomization,

    /// Custom route for the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<ConsoleConfigRoute>,

    /// Names of enabled console plugins
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

fn default_management_state() -> String {
    "Managed".to_string()
}

/// Branding and documentation overrides
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleCustomization {
    /// Product brand shown in the masthead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Base URL for documentation links
    #[serde(
        rename = "documentationBaseURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub documentation_base_url: Option<String>,

    /// Product name shown in the masthead when brand is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_product_name: Option<String>,
}

/// Custom route for the console
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfigRoute {
    /// Custom hostname
    pub hostname: String,

    /// Name of the secret holding the serving certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Console operator status
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleStatus {
    /// Observed generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    /// Ready replicas of the console deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_replicas: Option<i32>,
}
