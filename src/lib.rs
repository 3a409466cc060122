//! Console Operator utilities
//!
//! Metadata derivation, manifest decoding and OIDC client resolution used by
//! the console operator when it reconciles the web console workload.

pub mod adapters;
pub mod constants;
pub mod crd;
pub mod error;
pub mod telemetry;

pub use error::{Error, Result};
