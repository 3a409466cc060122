//! Canonical labels and object metadata for managed console resources
//!
//! Every builder returns a freshly allocated map so callers can extend the
//! result without affecting other callers.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

use crate::constants::{
    APP_LABEL, COMPONENT_LABEL, CONSOLE_COMPONENT, DOWNLOADS_RESOURCE_NAME,
    OPENSHIFT_CONSOLE_NAME, OPENSHIFT_CONSOLE_NAMESPACE,
};

/// Labels shared by every resource belonging to the console application
pub fn shared_labels() -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(APP_LABEL.to_string(), OPENSHIFT_CONSOLE_NAME.to_string());
    labels
}

/// Labels selecting the console UI pods
pub fn labels_for_console() -> BTreeMap<String, String> {
    let mut extra = BTreeMap::new();
    extra.insert(COMPONENT_LABEL.to_string(), CONSOLE_COMPONENT.to_string());

    merge_labels(shared_labels(), &extra)
}

/// Labels selecting the downloads pods
pub fn labels_for_downloads() -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(APP_LABEL.to_string(), OPENSHIFT_CONSOLE_NAME.to_string());
    labels.insert(
        COMPONENT_LABEL.to_string(),
        DOWNLOADS_RESOURCE_NAME.to_string(),
    );
    labels
}

/// Metadata for the primary console objects
///
/// Annotations are always present so callers can insert into them directly.
pub fn shared_meta() -> ObjectMeta {
    ObjectMeta {
        name: Some(OPENSHIFT_CONSOLE_NAME.to_string()),
        namespace: Some(OPENSHIFT_CONSOLE_NAMESPACE.to_string()),
        labels: Some(shared_labels()),
        annotations: Some(BTreeMap::new()),
        ..Default::default()
    }
}

/// Overlay `overlay` onto `base`; overlay values win on key collision
pub fn merge_labels(
    mut base: BTreeMap<String, String>,
    overlay: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    for (k, v) in overlay {
        base.insert(k.clone(), v.clone());
    }
    base
}
