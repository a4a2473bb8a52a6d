//! Provisioning Pipeline
//!
//! The ordered sequence of external commands that turns a bare host into a
//! working SDK installation. Steps run strictly one after another; the
//! first failure aborts the run with the failing step's name attached.
//! Nothing is retried and nothing is rolled back.

use std::future::Future;
use std::sync::Arc;

use sdk_provision_core::config::InstallConfig;
use sdk_provision_core::exec::{CommandLine, CommandRunner, ExecError, ExecOutput};
use sdk_provision_core::host::{HostContext, Platform};
use tracing::info;

use crate::component::SdkComponent;
use crate::{
    detector, licenses, paths, BUILD_TOOLS_VERSION, CMDLINE_TOOLS_URL_LINUX, CMDLINE_TOOLS_URL_MAC,
};

/// Errors produced by a single pipeline step.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Exec(#[from] ExecError),
    #[error("`{command}` exited with status {code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A pipeline failure, attributed to the step that produced it.
#[derive(Debug, thiserror::Error)]
#[error("provisioning failed at step `{step}`: {source}")]
pub struct ProvisionError {
    pub step: &'static str,
    #[source]
    pub source: StepError,
}

/// Runs the provisioning pipeline against one host.
pub struct Provisioner {
    runner: Arc<dyn CommandRunner>,
    host: HostContext,
}

impl Provisioner {
    pub fn new(runner: Arc<dyn CommandRunner>, host: HostContext) -> Self {
        Self { runner, host }
    }

    /// Install the SDK tooling and every component the configuration names.
    pub async fn provision(&self, config: &InstallConfig) -> Result<(), ProvisionError> {
        let missing = step("detect-cmdline-tools", async {
            Ok(detector::cmdline_tools_missing(self.runner.as_ref(), &self.host.sdk_home).await?)
        })
        .await?;

        if missing {
            info!("Installing new cmdline-tools.");
            step("install-cmdline-tools", self.install_cmdline_tools()).await?;
        }

        step("register-paths", async {
            Ok(paths::register(
                &self.host.sdk_home,
                self.host.path_file.as_deref(),
            )?)
        })
        .await?;

        if self.host.platform != Platform::Mac {
            step("sdk-permissions", self.claim_sdk_ownership()).await?;
        }

        // API 30 system images ship under the arm-dbt license.
        if config.api_level == 30 {
            step("arm-dbt-license", async {
                Ok(licenses::write_arm_dbt_license(&self.host.sdk_home).await?)
            })
            .await?;
        }

        info!("Installing latest build tools, platform tools, and platform.");
        step("core-packages", self.install_core_packages(config)).await?;

        match &config.emulator_build {
            Some(build) => {
                info!("Installing emulator build {}.", build);
                step("emulator", self.install_pinned_emulator(build)).await?;
            }
            None => {
                info!("Installing latest emulator.");
                step("emulator", self.install_component(SdkComponent::Emulator)).await?;
            }
        }

        info!("Installing system images.");
        step(
            "system-image",
            self.install_component(SdkComponent::SystemImage {
                api_level: config.api_level,
                target: config.target.clone(),
                arch: config.arch.clone(),
            }),
        )
        .await?;

        if let Some(version) = &config.ndk_version {
            info!("Installing NDK {}.", version);
            step("ndk", self.install_component(SdkComponent::Ndk(version.clone()))).await?;
        }

        if let Some(version) = &config.cmake_version {
            info!("Installing CMake {}.", version);
            step(
                "cmake",
                self.install_component(SdkComponent::Cmake(version.clone())),
            )
            .await?;
        }

        Ok(())
    }

    /// Bootstrap the cmdline-tools distribution from the pinned archive.
    async fn install_cmdline_tools(&self) -> Result<(), StepError> {
        let tools_dir = self.host.sdk_home.join("cmdline-tools").display().to_string();
        let url = match self.host.platform {
            Platform::Mac => CMDLINE_TOOLS_URL_MAC,
            Platform::Linux => CMDLINE_TOOLS_URL_LINUX,
        };

        self.run_checked(CommandLine::new("sudo").arg("mkdir").arg(tools_dir.clone()))
            .await?;
        self.run_checked(
            CommandLine::new("curl")
                .args(["-fo", "commandlinetools.zip"])
                .arg(url),
        )
        .await?;
        self.run_checked(
            CommandLine::new("sudo")
                .args(["unzip", "-q", "commandlinetools.zip", "-d"])
                .arg(tools_dir),
        )
        .await?;
        self.run_checked(CommandLine::new("sudo").args(["rm", "-f", "commandlinetools.zip"]))
            .await?;
        Ok(())
    }

    /// Take ownership of the SDK home and accept the preview license.
    async fn claim_sdk_ownership(&self) -> Result<(), StepError> {
        let owner = format!("{}:{}", self.host.user, self.host.user);
        self.run_checked(
            CommandLine::new("sudo")
                .arg("chown")
                .arg(owner)
                .arg(self.host.sdk_home.display().to_string())
                .arg("-R"),
        )
        .await?;

        licenses::write_preview_license(&self.host.sdk_home).await?;
        Ok(())
    }

    /// One call installing build tools, platform tools, and the platform.
    async fn install_core_packages(&self, config: &InstallConfig) -> Result<(), StepError> {
        let command = CommandLine::new("sdkmanager")
            .arg("--install")
            .arg(SdkComponent::BuildTools(BUILD_TOOLS_VERSION.to_string()).coordinate())
            .arg(SdkComponent::PlatformTools.coordinate())
            .arg(SdkComponent::Platform(config.api_level).coordinate());
        self.run_checked(command.discard_stdout()).await?;
        Ok(())
    }

    /// Replace the emulator directory with a pinned build's archive.
    async fn install_pinned_emulator(&self, build: &str) -> Result<(), StepError> {
        let home = self.host.sdk_home.display().to_string();
        let url = emulator_archive_url(self.host.platform, build);

        self.run_checked(
            CommandLine::new("sudo")
                .args(["rm", "-rf"])
                .arg(self.host.sdk_home.join("emulator").display().to_string()),
        )
        .await?;
        self.run_checked(CommandLine::new("curl").args(["-fo", "emulator.zip"]).arg(url))
            .await?;
        self.run_checked(
            CommandLine::new("sudo")
                .args(["unzip", "-q", "emulator.zip", "-d"])
                .arg(home),
        )
        .await?;
        self.run_checked(CommandLine::new("sudo").args(["rm", "-f", "emulator.zip"]))
            .await?;
        Ok(())
    }

    /// One `sdkmanager --install` call with its console output discarded.
    async fn install_component(&self, component: SdkComponent) -> Result<(), StepError> {
        self.run_checked(
            CommandLine::new("sdkmanager")
                .arg("--install")
                .arg(component.coordinate())
                .discard_stdout(),
        )
        .await?;
        Ok(())
    }

    async fn run_checked(&self, command: CommandLine) -> Result<ExecOutput, StepError> {
        let rendered = command.to_string();
        let output = self.runner.run(&command).await?;
        if output.success() {
            Ok(output)
        } else {
            Err(StepError::CommandFailed {
                command: rendered,
                code: output.code,
                stderr: output.stderr,
            })
        }
    }
}

/// Archive URL for a pinned emulator build.
pub fn emulator_archive_url(platform: Platform, build: &str) -> String {
    format!(
        "https://dl.google.com/android/repository/emulator-{}-{}.zip",
        platform.emulator_token(),
        build
    )
}

async fn step<T, F>(name: &'static str, work: F) -> Result<T, ProvisionError>
where
    F: Future<Output = Result<T, StepError>>,
{
    work.await
        .map_err(|source| ProvisionError { step: name, source })
}
