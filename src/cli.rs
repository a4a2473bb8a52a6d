//! Command-line interface
//!
//! Flags mirror the install configuration one-to-one; every value can also
//! arrive through an environment variable, and `--config` swaps the whole
//! flag set for a TOML manifest.

use std::path::PathBuf;

use clap::Parser;
use sdk_provision_core::config::InstallConfig;

/// Install the Android SDK and a fixed set of components on this host.
#[derive(Debug, Parser)]
#[command(name = "sdk-provision", version, about)]
pub struct Cli {
    /// Target platform API level.
    #[arg(long, env = "ANDROID_API_LEVEL", required_unless_present = "config")]
    pub api_level: Option<u32>,

    /// System-image target flavor (e.g. default, google_apis, playstore).
    #[arg(long, env = "ANDROID_TARGET", required_unless_present = "config")]
    pub target: Option<String>,

    /// System-image CPU architecture (e.g. x86, x86_64, arm64-v8a).
    #[arg(long, env = "ANDROID_ARCH", required_unless_present = "config")]
    pub arch: Option<String>,

    /// Pin a specific emulator build instead of the latest release.
    #[arg(long, env = "ANDROID_EMULATOR_BUILD")]
    pub emulator_build: Option<String>,

    /// Also install `ndk;<version>`.
    #[arg(long, env = "ANDROID_NDK_VERSION")]
    pub ndk_version: Option<String>,

    /// Also install `cmake;<version>`.
    #[arg(long, env = "ANDROID_CMAKE_VERSION")]
    pub cmake_version: Option<String>,

    /// SDK home override; defaults to ANDROID_HOME.
    #[arg(long)]
    pub sdk_home: Option<PathBuf>,

    /// Read the whole configuration from a TOML manifest instead of flags.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the install configuration from flags; `None` when one of the
    /// required flags is missing (i.e. `--config` was used instead).
    pub fn install_config(&self) -> Option<InstallConfig> {
        let (api_level, target, arch) = match (self.api_level, &self.target, &self.arch) {
            (Some(api_level), Some(target), Some(arch)) => (api_level, target.clone(), arch.clone()),
            _ => return None,
        };

        let mut config = InstallConfig::new(api_level, target, arch);
        config.emulator_build = self.emulator_build.clone();
        config.ndk_version = self.ndk_version.clone();
        config.cmake_version = self.cmake_version.clone();
        Some(config)
    }
}
