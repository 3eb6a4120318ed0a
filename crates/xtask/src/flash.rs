use anyhow::{Context, Result};
use std::process::Command;

use crate::constants::app_elf;
use crate::{ProbeTarget, Profile};

fn probe_rs(target: &ProbeTarget, verb: &str, extra: &[&str]) -> Result<()> {
    let status = Command::new("probe-rs")
        .arg(verb)
        .args(target.args())
        .args(extra)
        .status()
        .with_context(|| format!("Failed to run probe-rs {verb}"))?;
    if !status.success() {
        anyhow::bail!("probe-rs {verb} failed on {}", target.chip);
    }
    Ok(())
}

pub fn flash_firmware(
    target: &ProbeTarget,
    profile: Profile,
    erase: bool,
) -> Result<()> {
    crate::build::build_firmware(profile)?;

    if erase {
        println!("Erasing {}...", target.chip);
        probe_rs(target, "erase", &["--allow-erase-all"])?;
    }

    // Unchanged sectors are skipped by --preverify.
    println!("Flashing firmware...");
    let elf = app_elf(profile.release);
    probe_rs(target, "download", &[&elf, "--preverify"])?;
    probe_rs(target, "reset", &[])
}
