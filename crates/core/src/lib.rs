//! Shared foundation for sdk-provision
//!
//! Provides:
//! - Command execution behind an injectable runner trait
//! - The install configuration (CLI flags or a TOML manifest)
//! - The host context (SDK home, platform, invoking user)

pub mod config;
pub mod exec;
pub mod host;

pub use config::{ConfigError, InstallConfig};
pub use exec::{CommandLine, CommandRunner, ExecError, ExecOutput, SystemRunner};
pub use host::{HostContext, HostError, Platform};
