//! Integration tests for decoding embedded manifests

use console_operator::adapters::decode::{
    decode_typed_or_die, decode_unstructured_or_die, read_managed_proxy_service_resolver_or_die,
    read_unstructured_or_die, Decoder, ManifestDecoder,
};
use console_operator::crd::ManagedProxyServiceResolver;
use console_operator::{Error, Result};
use kube::core::{DynamicObject, GroupVersionKind};
use serde::de::DeserializeOwned;
use std::cell::Cell;

// ============================================================================
// Test Helpers
// ============================================================================

const CONFIG_MAP_YAML: &str = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: console-config
  namespace: openshift-console
data:
  console-config.yaml: "kind: ConsoleConfig"
"#;

const CONFIG_MAP_JSON: &str = r#"{
  "apiVersion": "v1",
  "kind": "ConfigMap",
  "metadata": {"name": "console-config", "namespace": "openshift-console"},
  "data": {"key": "value"}
}"#;

const RESOLVER_YAML: &str = r#"
apiVersion: proxy.open-cluster-management.io/v1alpha1
kind: ManagedProxyServiceResolver
metadata:
  name: console-resolver
spec:
  managedClusterSelector:
    type: ManagedClusterSet
    managedClusterSet:
      name: global
  serviceSelector:
    type: ServiceRef
    serviceRef:
      namespace: openshift-console
      name: console
"#;

/// Decoder that records the hint it receives and defers to the manifest decoder
#[derive(Default)]
struct RecordingDecoder {
    calls: Cell<usize>,
    last_kind: Cell<Option<&'static str>>,
}

impl Decoder for RecordingDecoder {
    fn decode<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
        hint: Option<&GroupVersionKind>,
    ) -> Result<T> {
        self.calls.set(self.calls.get() + 1);
        if let Some(gvk) = hint {
            if gvk.kind == "ManagedProxyServiceResolver" {
                self.last_kind.set(Some("ManagedProxyServiceResolver"));
            }
        }
        ManifestDecoder.decode(bytes, hint)
    }
}

/// Decoder that always fails
struct FailingDecoder;

impl Decoder for FailingDecoder {
    fn decode<T: DeserializeOwned>(
        &self,
        _bytes: &[u8],
        _hint: Option<&GroupVersionKind>,
    ) -> Result<T> {
        Err(Error::DecodeError("decoder unavailable".to_string()))
    }
}

// ============================================================================
// Unstructured Decoding Tests
// ============================================================================

#[test]
fn unstructured_yaml_decodes_type_and_metadata() {
    let obj = read_unstructured_or_die(CONFIG_MAP_YAML.as_bytes());

    let types = obj.types.as_ref().expect("type meta");
    assert_eq!(types.api_version, "v1");
    assert_eq!(types.kind, "ConfigMap");
    assert_eq!(obj.metadata.name.as_deref(), Some("console-config"));
    assert_eq!(obj.metadata.namespace.as_deref(), Some("openshift-console"));
    assert_eq!(
        obj.data["data"]["console-config.yaml"],
        serde_json::json!("kind: ConsoleConfig")
    );
}

#[test]
fn unstructured_json_decodes() {
    let obj = read_unstructured_or_die(CONFIG_MAP_JSON.as_bytes());

    assert_eq!(obj.types.expect("type meta").kind, "ConfigMap");
    assert_eq!(obj.data["data"]["key"], serde_json::json!("value"));
}

#[test]
fn unstructured_accepts_document_separators() {
    let trailing = read_unstructured_or_die(
        b"apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: a\n---\n",
    );
    let leading = read_unstructured_or_die(
        b"---\napiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: a\n",
    );

    assert_eq!(trailing.metadata.name.as_deref(), Some("a"));
    assert_eq!(leading.metadata.name.as_deref(), Some("a"));
}

#[test]
fn unstructured_reads_only_first_document() {
    let obj = read_unstructured_or_die(
        b"apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: first\n---\napiVersion: v1\nkind: Secret\nmetadata:\n  name: second\n",
    );

    assert_eq!(obj.types.expect("type meta").kind, "ConfigMap");
    assert_eq!(obj.metadata.name.as_deref(), Some("first"));
}

#[test]
fn unstructured_resolves_merge_keys() {
    let yaml = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: merged
base: &b
  x: "1"
data:
  <<: *b
  y: "2"
"#;

    let obj = read_unstructured_or_die(yaml.as_bytes());

    assert_eq!(obj.data["data"], serde_json::json!({"x": "1", "y": "2"}));
    assert!(obj.data["data"].get("<<").is_none());
}

#[test]
fn typed_resource_resolves_merge_keys() {
    let yaml = r#"
apiVersion: proxy.open-cluster-management.io/v1alpha1
kind: ManagedProxyServiceResolver
metadata:
  name: console-resolver
spec:
  managedClusterSelector:
    type: ManagedClusterSet
    managedClusterSet:
      name: global
  serviceSelector:
    type: ServiceRef
    serviceRef:
      <<: &svc
        namespace: openshift-console
      name: console
"#;

    let resolver = read_managed_proxy_service_resolver_or_die(yaml.as_bytes());
    let service = resolver.spec.service_selector.service_ref.expect("service ref");

    assert_eq!(service.namespace, "openshift-console");
    assert_eq!(service.name, "console");
}

#[test]
#[should_panic(expected = "Failed to decode embedded manifest")]
fn unstructured_only_separators_is_fatal() {
    read_unstructured_or_die(b"---\n---\n");
}

#[test]
fn unstructured_uses_injected_decoder() {
    let decoder = RecordingDecoder::default();

    let obj = decode_unstructured_or_die(&decoder, CONFIG_MAP_YAML.as_bytes());

    assert_eq!(decoder.calls.get(), 1);
    assert_eq!(decoder.last_kind.get(), None);
    assert_eq!(obj.metadata.name.as_deref(), Some("console-config"));
}

#[test]
fn fallible_decode_reports_missing_kind() {
    let result: Result<DynamicObject> =
        ManifestDecoder.decode(b"apiVersion: v1\nmetadata:\n  name: x\n", None);

    let err = result.expect_err("kind is required");
    assert!(err.to_string().contains("kind"));
}

#[test]
#[should_panic(expected = "Failed to decode embedded manifest")]
fn unstructured_truncated_json_is_fatal() {
    read_unstructured_or_die(br#"{"apiVersion": "v1", "kind": "ConfigMap", "metadata": {"#);
}

#[test]
#[should_panic(expected = "Failed to decode embedded manifest")]
fn unstructured_non_mapping_is_fatal() {
    read_unstructured_or_die(b"- just\n- a\n- list\n");
}

#[test]
#[should_panic(expected = "Failed to decode embedded manifest")]
fn unstructured_missing_api_version_is_fatal() {
    read_unstructured_or_die(b"kind: ConfigMap\nmetadata:\n  name: x\n");
}

#[test]
#[should_panic(expected = "Failed to decode embedded manifest")]
fn unstructured_empty_payload_is_fatal() {
    read_unstructured_or_die(b"");
}

#[test]
#[should_panic(expected = "decoder unavailable")]
fn unstructured_decoder_error_is_fatal() {
    decode_unstructured_or_die(&FailingDecoder, CONFIG_MAP_YAML.as_bytes());
}

// ============================================================================
// Typed Decoding Tests
// ============================================================================

#[test]
fn resolver_decodes_into_typed_resource() {
    let resolver = read_managed_proxy_service_resolver_or_die(RESOLVER_YAML.as_bytes());

    assert_eq!(resolver.metadata.name.as_deref(), Some("console-resolver"));
    let spec = &resolver.spec;
    assert_eq!(spec.managed_cluster_selector.type_, "ManagedClusterSet");
    assert_eq!(
        spec.managed_cluster_selector
            .managed_cluster_set
            .as_ref()
            .map(|s| s.name.as_str()),
        Some("global")
    );
    let service = spec.service_selector.service_ref.as_ref().expect("service ref");
    assert_eq!(service.namespace, "openshift-console");
    assert_eq!(service.name, "console");
}

#[test]
fn resolver_without_type_meta_uses_kind_hint() {
    let without_type_meta = RESOLVER_YAML
        .lines()
        .filter(|line| !line.starts_with("apiVersion") && !line.starts_with("kind"))
        .collect::<Vec<_>>()
        .join("\n");
    let decoder = RecordingDecoder::default();

    let resolver: ManagedProxyServiceResolver =
        decode_typed_or_die(&decoder, without_type_meta.as_bytes());

    assert_eq!(decoder.last_kind.get(), Some("ManagedProxyServiceResolver"));
    assert_eq!(resolver.metadata.name.as_deref(), Some("console-resolver"));
}

#[test]
fn fallible_decode_rejects_conflicting_kind() {
    let gvk = GroupVersionKind::gvk(
        "proxy.open-cluster-management.io",
        "v1alpha1",
        "ManagedProxyServiceResolver",
    );
    let result: Result<ManagedProxyServiceResolver> =
        ManifestDecoder.decode(CONFIG_MAP_YAML.as_bytes(), Some(&gvk));

    assert!(matches!(result, Err(Error::DecodeError(_))));
}

#[test]
#[should_panic(expected = "Failed to decode embedded ManagedProxyServiceResolver")]
fn resolver_of_wrong_kind_is_fatal() {
    read_managed_proxy_service_resolver_or_die(CONFIG_MAP_YAML.as_bytes());
}

#[test]
#[should_panic(expected = "Failed to decode embedded ManagedProxyServiceResolver")]
fn resolver_missing_spec_is_fatal() {
    read_managed_proxy_service_resolver_or_die(
        b"apiVersion: proxy.open-cluster-management.io/v1alpha1\nkind: ManagedProxyServiceResolver\nmetadata:\n  name: x\n",
    );
}

#[test]
#[should_panic(expected = "Failed to decode embedded ManagedProxyServiceResolver")]
fn resolver_truncated_payload_is_fatal() {
    let truncated = &RESOLVER_YAML.as_bytes()[..RESOLVER_YAML.len() / 2];
    read_managed_proxy_service_resolver_or_die(truncated);
}
