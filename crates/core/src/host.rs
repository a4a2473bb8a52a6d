//! Host Context
//!
//! Ambient facts about the machine being provisioned: where the SDK lives,
//! which platform this is, and which user is running the install. Read once
//! and passed around as a value so the pipeline stays deterministic.

use std::env;
use std::path::PathBuf;

/// Host operating system, as far as provisioning cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Mac,
    Linux,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else {
            Platform::Linux
        }
    }

    /// Token used in emulator archive names.
    pub fn emulator_token(self) -> &'static str {
        match self {
            Platform::Mac => "darwin",
            Platform::Linux => "linux",
        }
    }
}

/// Facts for one provisioning run.
#[derive(Debug, Clone)]
pub struct HostContext {
    /// SDK installation directory (`ANDROID_HOME`).
    pub sdk_home: PathBuf,
    pub platform: Platform,
    /// Invoking user, for the ownership step on Linux.
    pub user: String,
    /// Path-registration file provided by the invoking automation platform
    /// (`GITHUB_PATH`), when any.
    pub path_file: Option<PathBuf>,
}

impl HostContext {
    pub fn new(sdk_home: impl Into<PathBuf>, platform: Platform, user: impl Into<String>) -> Self {
        Self {
            sdk_home: sdk_home.into(),
            platform,
            user: user.into(),
            path_file: None,
        }
    }

    /// Detect the context from the environment.
    ///
    /// The SDK home comes from `ANDROID_HOME`, then `ANDROID_SDK_ROOT`,
    /// then `~/Android/Sdk`.
    pub fn detect() -> Result<Self, HostError> {
        let sdk_home = env::var_os("ANDROID_HOME")
            .or_else(|| env::var_os("ANDROID_SDK_ROOT"))
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join("Android").join("Sdk")))
            .ok_or(HostError::NoSdkHome)?;

        let user = env::var("USER").unwrap_or_else(|_| "root".to_string());

        Ok(Self {
            sdk_home,
            platform: Platform::current(),
            user,
            path_file: env::var_os("GITHUB_PATH").map(PathBuf::from),
        })
    }
}

/// Host detection errors
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("cannot determine the SDK home; set ANDROID_HOME or ANDROID_SDK_ROOT")]
    NoSdkHome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emulator_tokens_match_the_archive_names() {
        assert_eq!(Platform::Mac.emulator_token(), "darwin");
        assert_eq!(Platform::Linux.emulator_token(), "linux");
    }

    #[test]
    fn context_keeps_the_given_facts() {
        let host = HostContext::new("/opt/android", Platform::Linux, "runner");
        assert_eq!(host.sdk_home, PathBuf::from("/opt/android"));
        assert_eq!(host.platform, Platform::Linux);
        assert_eq!(host.user, "runner");
        assert!(host.path_file.is_none());
    }
}
