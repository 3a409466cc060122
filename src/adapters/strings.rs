//! String helpers used when assembling console configuration

use std::collections::HashSet;
use tracing::debug;

const HTTPS_PREFIX: &str = "https://";

/// Drop repeated values, keeping the first occurrence of each in input order
pub fn remove_duplicate_str<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut list = Vec::with_capacity(items.len());

    for item in items {
        let item = item.as_ref();
        if seen.insert(item) {
            list.push(item.to_string());
        }
    }
    list
}

/// Prefix a host with `https://` unless it already carries the scheme
///
/// An empty host yields an empty string.
pub fn https(host: &str) -> String {
    if host.is_empty() {
        debug!("https() cannot accept an empty string");
        return String::new();
    }
    if host.starts_with(HTTPS_PREFIX) {
        return host.to_string();
    }
    format!("{}{}", HTTPS_PREFIX, host)
}
