//! Environment lookups for operand images

/// Read an image reference from the environment
///
/// Unset or non-unicode variables read as an empty string.
pub fn image_env(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
