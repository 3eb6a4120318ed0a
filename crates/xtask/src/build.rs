use crate::constants::{APP_MANIFEST, TARGET};
use crate::Profile;
use anyhow::{Context, Result};
use std::process::Command;

/// Cross-compile the firmware binary for the board.
pub fn build_firmware(profile: Profile) -> Result<()> {
    let mut cargo_build = Command::new("cargo");
    cargo_build
        .args(["build", "--manifest-path", APP_MANIFEST, "--target", TARGET]);

    if profile.release {
        cargo_build.arg("--release");
    }
    if profile.defmt {
        cargo_build.args(["--features", "defmt"]);
    }

    let status = cargo_build
        .status()
        .with_context(|| format!("Failed to build {}", APP_MANIFEST))?;
    if !status.success() {
        anyhow::bail!("Build failed for {}", APP_MANIFEST);
    }

    Ok(())
}
