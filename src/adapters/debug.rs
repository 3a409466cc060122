//! Debug dumps of resources

use serde::Serialize;
use tracing::{debug, enabled, Level};

/// Log a resource as YAML at debug level
///
/// Very noisy; meant for chasing down what the operator is about to write.
pub fn log_yaml<T: Serialize + ?Sized>(obj: &T) {
    if !enabled!(Level::DEBUG) {
        return;
    }
    match serde_yaml::to_string(obj) {
        Ok(yaml) => debug!("{}", yaml),
        Err(e) => debug!(error = %e, "Failed to show yaml in log"),
    }
}
