//! CRD YAML Generator
//!
//! Prints the manifests of the custom resources the console operator reads or
//! decodes, for installing them into test clusters.
//!
//! Usage: cargo run --bin crdgen > deploy/crds/all.yaml

use console_operator::{crd::generate_crds, telemetry};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let crds = generate_crds()?;
    debug!(count = crds.len(), "Generated CRD manifests");

    for crd in crds {
        println!("---");
        print!("{}", crd);
    }
    Ok(())
}
