//! Owner references pointing at the controlling resource

use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::Resource;
use tracing::trace;

/// Build a controller owner reference from the controlling resource
///
/// Returns `None` when there is no controller. Name and uid are copied as the
/// controller carries them, so a controller that has not been persisted yet
/// yields empty values rather than no reference. apiVersion and kind come from
/// the resource type `K`, since kube objects do not keep their type meta.
pub fn owner_ref_from<K>(controller: Option<&K>) -> Option<OwnerReference>
where
    K: Resource<DynamicType = ()>,
{
    let controller = controller?;
    let meta = controller.meta();

    Some(OwnerReference {
        api_version: K::api_version(&()).to_string(),
        kind: K::kind(&()).to_string(),
        name: meta.name.clone().unwrap_or_default(),
        uid: meta.uid.clone().unwrap_or_default(),
        controller: Some(true),
        ..Default::default()
    })
}

/// Attach an owner reference to a managed object
///
/// Currently a no-op. The API server rejects owner references with an empty
/// apiVersion or kind, and not every call site can guarantee both are set.
// TODO: append to the target's owner references once callers pass references
// built by `owner_ref_from` only.
pub fn add_owner_ref<T>(target: &mut T, owner_ref: Option<&OwnerReference>)
where
    T: Resource,
{
    trace!(
        target_name = target.meta().name.as_deref().unwrap_or_default(),
        owner = owner_ref.map(|r| r.name.as_str()).unwrap_or_default(),
        "Skipping owner reference attachment"
    );
}
