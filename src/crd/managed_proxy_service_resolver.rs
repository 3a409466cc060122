//! ManagedProxyServiceResolver Custom Resource Definition
//!
//! Embedded in the operator as a manifest and decoded at startup; it tells the
//! cluster proxy which managed clusters and service the console reaches.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolves a service on a set of managed clusters through the cluster proxy
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "proxy.open-cluster-management.io",
    version = "v1alpha1",
    kind = "ManagedProxyServiceResolver",
    plural = "managedproxyserviceresolvers",
    singular = "managedproxyserviceresolver",
    status = "ManagedProxyServiceResolverStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedProxyServiceResolverSpec {
    /// Managed clusters the service is resolved on
    pub managed_cluster_selector: ManagedClusterSelector,

    /// Service to resolve on each selected cluster
    pub service_selector: ServiceSelector,
}

/// Selects managed clusters
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterSelector {
    /// Selector type (ManagedClusterSet)
    #[serde(rename = "type", default = "default_cluster_selector_type")]
    pub type_: String,

    /// Cluster set to select
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_cluster_set: Option<ManagedClusterSet>,
}

fn default_cluster_selector_type() -> String {
    "ManagedClusterSet".to_string()
}

/// Reference to a managed cluster set
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct ManagedClusterSet {
    /// Cluster set name
    pub name: String,
}

/// Selects a service
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSelector {
    /// Selector type (ServiceRef)
    #[serde(rename = "type", default = "default_service_selector_type")]
    pub type_: String,

    /// Service to resolve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
}

fn default_service_selector_type() -> String {
    "ServiceRef".to_string()
}

/// Namespaced service reference
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct ServiceRef {
    /// Service namespace
    pub namespace: String,
    /// Service name
    pub name: String,
}

/// ManagedProxyServiceResolver status
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct ManagedProxyServiceResolverStatus {
    /// Status conditions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<ResolverCondition>,
}

/// Status condition
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolverCondition {
    /// Condition type
    #[serde(rename = "type")]
    pub type_: String,

    /// Status (True, False, Unknown)
    pub status: String,

    /// Reason for the condition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
