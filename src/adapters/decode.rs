//! Decoding of embedded manifests into typed or dynamic resources
//!
//! The `*_or_die` functions are meant for payloads compiled into the operator.
//! A payload that fails to decode is a build defect, so they panic instead of
//! returning an error.

use kube::core::{DynamicObject, GroupVersionKind};
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::crd::ManagedProxyServiceResolver;
use crate::{Error, Result};

const API_VERSION_KEY: &str = "apiVersion";
const KIND_KEY: &str = "kind";

/// Turns a serialized resource into an in-memory object
pub trait Decoder {
    /// Decode `bytes` into `T`
    ///
    /// `hint` supplies the expected group/version/kind: missing type fields
    /// are defaulted from it and conflicting ones are rejected.
    fn decode<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
        hint: Option<&GroupVersionKind>,
    ) -> Result<T>;
}

/// Decoder for YAML or JSON manifests
#[derive(Clone, Copy, Debug, Default)]
pub struct ManifestDecoder;

impl Decoder for ManifestDecoder {
    fn decode<T: DeserializeOwned>(
        &self,
        bytes: &[u8],
        hint: Option<&GroupVersionKind>,
    ) -> Result<T> {
        let mut value = first_document(bytes)?;

        let object = value
            .as_object_mut()
            .ok_or_else(|| Error::DecodeError("Manifest is not a mapping".to_string()))?;

        match hint {
            Some(gvk) => default_type_meta(object, gvk)?,
            None => require_type_meta(object)?,
        }

        serde_json::from_value(value)
            .map_err(|e| Error::DecodeError(format!("Manifest does not match schema: {}", e)))
    }
}

/// Parse the first non-empty YAML document, with merge keys resolved
///
/// Later documents are ignored, so a trailing `---` separator is accepted.
fn first_document(bytes: &[u8]) -> Result<Value> {
    for document in serde_yaml::Deserializer::from_slice(bytes) {
        let mut yaml = serde_yaml::Value::deserialize(document)
            .map_err(|e| Error::DecodeError(format!("Invalid manifest: {}", e)))?;
        if yaml.is_null() {
            continue;
        }
        yaml.apply_merge()
            .map_err(|e| Error::DecodeError(format!("Invalid merge key: {}", e)))?;
        return serde_yaml::from_value(yaml)
            .map_err(|e| Error::DecodeError(format!("Invalid manifest: {}", e)));
    }
    Err(Error::DecodeError("Invalid manifest: no document found".to_string()))
}

fn default_type_meta(object: &mut Map<String, Value>, gvk: &GroupVersionKind) -> Result<()> {
    for (key, expected) in [
        (API_VERSION_KEY, api_version(gvk)),
        (KIND_KEY, gvk.kind.clone()),
    ] {
        match object.get(key).cloned() {
            None | Some(Value::Null) => {
                object.insert(key.to_string(), Value::String(expected));
            }
            Some(Value::String(found)) if found == expected => {}
            Some(found) => {
                return Err(Error::DecodeError(format!(
                    "{} {} does not match expected {}",
                    key, found, expected
                )));
            }
        }
    }
    Ok(())
}

fn api_version(gvk: &GroupVersionKind) -> String {
    if gvk.group.is_empty() {
        gvk.version.clone()
    } else {
        format!("{}/{}", gvk.group, gvk.version)
    }
}

fn require_type_meta(object: &Map<String, Value>) -> Result<()> {
    for key in [API_VERSION_KEY, KIND_KEY] {
        match object.get(key) {
            Some(Value::String(s)) if !s.is_empty() => {}
            _ => return Err(Error::DecodeError(format!("Object '{}' is missing", key))),
        }
    }
    Ok(())
}

/// Decode an arbitrary resource into a dynamic object, panicking on failure
pub fn decode_unstructured_or_die<D: Decoder>(decoder: &D, bytes: &[u8]) -> DynamicObject {
    decoder
        .decode(bytes, None)
        .unwrap_or_else(|e| panic!("Failed to decode embedded manifest: {}", e))
}

/// Decode a resource of a known kind, panicking on failure
pub fn decode_typed_or_die<K, D>(decoder: &D, bytes: &[u8]) -> K
where
    K: Resource<DynamicType = ()> + DeserializeOwned,
    D: Decoder,
{
    let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()));
    decoder
        .decode(bytes, Some(&gvk))
        .unwrap_or_else(|e| panic!("Failed to decode embedded {}: {}", gvk.kind, e))
}

/// Read an embedded manifest into a dynamic object
pub fn read_unstructured_or_die(bytes: &[u8]) -> DynamicObject {
    decode_unstructured_or_die(&ManifestDecoder, bytes)
}

/// Read an embedded ManagedProxyServiceResolver manifest
pub fn read_managed_proxy_service_resolver_or_die(bytes: &[u8]) -> ManagedProxyServiceResolver {
    decode_typed_or_die(&ManifestDecoder, bytes)
}
