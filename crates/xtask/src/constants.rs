/// probe-rs target name of the STM32F429I-DISC1 MCU.
pub const DEFAULT_CHIP: &str = "STM32F429ZITx";
pub const TARGET: &str = "thumbv7em-none-eabihf";
pub const APP_MANIFEST: &str = "crates/sentry-app/Cargo.toml";
pub const APP_BIN: &str = "sentry-app";

/// Path of the firmware ELF for the chosen profile.
pub fn app_elf(release: bool) -> String {
    let profile = if release { "release" } else { "debug" };
    format!("target/{TARGET}/{profile}/{APP_BIN}")
}
