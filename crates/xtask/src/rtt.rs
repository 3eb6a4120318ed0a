use anyhow::{Context, Result};
use std::process::Command;

use crate::ProbeTarget;

/// Attach to the running target and stream its defmt/RTT log.
pub fn run(target: &ProbeTarget, elf_path: &str) -> Result<()> {
    let status = Command::new("probe-rs")
        .arg("attach")
        .args(target.args())
        .arg(elf_path)
        .status()
        .context("Failed to attach probe-rs")?;

    if !status.success() {
        anyhow::bail!("probe-rs attach failed");
    }

    Ok(())
}
