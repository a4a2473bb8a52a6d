//! Android SDK Provisioning
//!
//! Installs the SDK command-line tooling and a fixed set of components:
//! - cmdline-tools bootstrap (only when missing)
//! - build tools, platform tools, and the target platform
//! - emulator (latest release, or a pinned build)
//! - system image for the requested API level, target, and architecture
//! - optional NDK and CMake
//!
//! Downloads, extraction, and privileged filesystem operations are all
//! delegated to external commands through [`CommandRunner`]; success or
//! failure is observed only through exit status and captured stderr.

pub mod component;
pub mod detector;
pub mod installer;
pub mod licenses;
pub mod paths;

#[cfg(test)]
pub(crate) mod testutil;

pub use component::SdkComponent;
pub use installer::{ProvisionError, Provisioner, StepError};
pub use sdk_provision_core::exec::CommandRunner;

/// Build-tools release installed by the core-package step.
pub const BUILD_TOOLS_VERSION: &str = "30.0.0";

/// Pinned command-line tools archive for macOS hosts.
pub const CMDLINE_TOOLS_URL_MAC: &str =
    "https://dl.google.com/android/repository/commandlinetools-mac-6514223_latest.zip";

/// Pinned command-line tools archive for Linux hosts.
pub const CMDLINE_TOOLS_URL_LINUX: &str =
    "https://dl.google.com/android/repository/commandlinetools-linux-6514223_latest.zip";
