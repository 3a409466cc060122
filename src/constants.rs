//! Identity of the console workload managed by the operator

/// Name of the console application and of its primary managed objects
pub const OPENSHIFT_CONSOLE_NAME: &str = "console";

/// Namespace holding the primary console objects
pub const OPENSHIFT_CONSOLE_NAMESPACE: &str = "openshift-console";

/// Namespace the operator reconciles the console into
pub const TARGET_NAMESPACE: &str = "openshift-console";

/// Name of the downloads deployment, service and route
pub const DOWNLOADS_RESOURCE_NAME: &str = "downloads";

/// Name of the operator itself
pub const OPENSHIFT_CONSOLE_OPERATOR: &str = "console-operator";

/// Label key naming the application
pub const APP_LABEL: &str = "app";

/// Label key naming the component within the application
pub const COMPONENT_LABEL: &str = "component";

/// Component label value for the console UI pods
pub const CONSOLE_COMPONENT: &str = "ui";
