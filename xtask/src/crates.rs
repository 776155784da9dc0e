use std::process::Command;

use anyhow::{Context, Result};

/// Library crates in dependency order.
const WORKSPACE_CRATES: &[&str] = &["deskclock-domain", "deskclock-core", "deskclock-infra"];

/// Check each crate on its own so a missing dependency cannot hide behind
/// workspace feature unification.
pub fn check_each_crate() -> Result<()> {
    println!("Checking {} crates in isolation...", WORKSPACE_CRATES.len());

    for (index, name) in WORKSPACE_CRATES.iter().enumerate() {
        println!(
            "\n[{}/{}] cargo check -p {name} --all-targets",
            index + 1,
            WORKSPACE_CRATES.len()
        );

        let status = Command::new("cargo")
            .args(["check", "-p", name, "--all-targets"])
            .status()
            .with_context(|| format!("Failed to run cargo check for '{name}'"))?;

        if !status.success() {
            anyhow::bail!("Crate '{name}' failed to compile on its own");
        }

        println!("✅ {name} compiled successfully");
    }

    println!("\n✅ All {} crates compile on their own!", WORKSPACE_CRATES.len());

    Ok(())
}
