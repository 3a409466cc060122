//! Adapters deriving metadata, decoding manifests and reading cluster configuration

pub mod debug;
pub mod decode;
pub mod env;
pub mod labels;
pub mod oidc;
pub mod owner_ref;
pub mod strings;
