mod build;
mod constants;
mod flash;
mod rtt;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use constants::{app_elf, DEFAULT_CHIP};

/// Build, flash and monitor the Embedded Sentry firmware.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    probe: ProbeTarget,

    #[command(subcommand)]
    command: Commands,
}

/// Which debug probe and MCU probe-rs talks to.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct ProbeTarget {
    /// probe-rs chip name
    #[arg(long, global = true, default_value = DEFAULT_CHIP)]
    pub chip: String,

    /// Probe selector (`VID:PID[:SERIAL]`) when several are attached
    #[arg(long, global = true)]
    pub probe: Option<String>,
}

impl ProbeTarget {
    /// `--chip` and, if set, `--probe`, for a probe-rs command line.
    pub fn args(&self) -> Vec<&str> {
        let mut args = vec!["--chip", self.chip.as_str()];
        if let Some(probe) = &self.probe {
            args.extend(["--probe", probe.as_str()]);
        }
        args
    }
}

/// Firmware build flavour.
#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Build with the release profile
    #[arg(long)]
    pub release: bool,

    /// Log over RTT with defmt instead of resetting on panic
    #[arg(long)]
    pub defmt: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Cross-compile the firmware
    Build(Profile),
    /// Build and download the firmware, then reset the board
    Flash {
        #[command(flatten)]
        profile: Profile,

        /// Mass-erase the chip first
        #[arg(long)]
        erase: bool,
    },
    /// Flash, then stream the defmt log
    Run(Profile),
    /// Stream the defmt log of the firmware already on the board
    Attach {
        #[arg(long)]
        release: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(profile) => {
            println!("Building firmware...");
            build::build_firmware(profile)?;
            println!("Build complete!");
        }
        Commands::Flash { profile, erase } => {
            flash::flash_firmware(&cli.probe, profile, erase)?;
        }
        Commands::Run(profile) => {
            // Logging needs defmt regardless of the flag.
            let profile = Profile { defmt: true, ..profile };
            flash::flash_firmware(&cli.probe, profile, false)?;
            println!("Attaching RTT...");
            rtt::run(&cli.probe, &app_elf(profile.release))?;
        }
        Commands::Attach { release } => {
            rtt::run(&cli.probe, &app_elf(release))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_defaults_to_disc1_and_is_global() {
        let cli = Cli::try_parse_from(["xtask", "attach"]).unwrap();
        assert_eq!(cli.probe.chip, DEFAULT_CHIP);
        assert_eq!(cli.probe.args(), ["--chip", DEFAULT_CHIP]);

        let cli = Cli::try_parse_from([
            "xtask",
            "flash",
            "--erase",
            "--chip",
            "STM32F429ZIYx",
            "--probe",
            "0483:374b",
        ])
        .unwrap();
        assert_eq!(
            cli.probe.args(),
            ["--chip", "STM32F429ZIYx", "--probe", "0483:374b"]
        );
        assert_eq!(
            cli.command,
            Commands::Flash {
                profile: Profile { release: false, defmt: false },
                erase: true,
            }
        );
    }

    #[test]
    fn build_flags_map_to_profile() {
        let cli =
            Cli::try_parse_from(["xtask", "build", "--release", "--defmt"])
                .unwrap();
        assert_eq!(
            cli.command,
            Commands::Build(Profile { release: true, defmt: true })
        );
        assert_eq!(app_elf(true), "target/thumbv7em-none-eabihf/release/sentry-app");
    }

    #[test]
    fn features_argument_is_gone() {
        assert!(Cli::try_parse_from(["xtask", "build", "--features", "x"]).is_err());
    }
}
