//! sdk-provision
//!
//! Provisions the Android SDK on a build host: bootstraps the command-line
//! tooling when it is missing, registers the tool directories on the search
//! path, accepts the required licenses, and installs build tools, platform
//! tools, the target platform, an emulator, a system image, and optional
//! NDK and CMake through `sdkmanager`.
//!
//! The workspace is organized into focused crates:
//!
//! - `sdk-provision-core`: configuration, host context, command execution
//! - `sdk-provision-toolchain`: the detection and installation pipeline

#![warn(clippy::all)]

pub mod cli;

pub use sdk_provision_core as core;
pub use sdk_provision_toolchain as toolchain;

/// Prelude module for convenient imports
pub mod prelude {
    pub use sdk_provision_core::config::InstallConfig;
    pub use sdk_provision_core::exec::{CommandRunner, SystemRunner};
    pub use sdk_provision_core::host::{HostContext, Platform};
    pub use sdk_provision_toolchain::{ProvisionError, Provisioner};
}
