//! Tooling Presence Detection
//!
//! Decides whether the cmdline-tools bootstrap is needed.

use std::path::Path;

use sdk_provision_core::exec::{CommandLine, CommandRunner, ExecError};
use tracing::debug;

/// Probe for the SDK command-line tools.
///
/// Issues a privileged listing of `{sdk_home}/cmdline-tools` and treats any
/// diagnostic output as "missing". The probe's exit status is ignored; the
/// stderr text is the whole signal, so a stray warning from the listing
/// also reads as missing and triggers a re-bootstrap.
pub async fn cmdline_tools_missing(
    runner: &dyn CommandRunner,
    sdk_home: &Path,
) -> Result<bool, ExecError> {
    let listing = CommandLine::new("sudo")
        .arg("ls")
        .arg(sdk_home.join("cmdline-tools").display().to_string());

    let output = runner.run(&listing).await?;
    debug!("cmdline-tools probe stderr: {:?}", output.stderr);

    Ok(!output.stderr.is_empty())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sdk_provision_core::exec::ExecOutput;

    use super::*;
    use crate::testutil::ScriptedRunner;

    #[tokio::test]
    async fn silent_probe_means_present() {
        // A non-zero exit without diagnostics still counts as present.
        let runner = ScriptedRunner::new().on("sudo ls", ExecOutput::with_code(2));
        let missing = cmdline_tools_missing(&runner, &PathBuf::from("/sdk"))
            .await
            .unwrap();
        assert!(!missing);
    }

    #[tokio::test]
    async fn any_diagnostic_output_means_missing() {
        // A zero exit with diagnostics still counts as missing.
        let runner = ScriptedRunner::new().on(
            "sudo ls",
            ExecOutput::with_stderr(0, "ls: cannot access '/sdk/cmdline-tools'"),
        );
        let missing = cmdline_tools_missing(&runner, &PathBuf::from("/sdk"))
            .await
            .unwrap();
        assert!(missing);
    }

    #[tokio::test]
    async fn probe_targets_the_cmdline_tools_directory() {
        let runner = ScriptedRunner::new();
        cmdline_tools_missing(&runner, &PathBuf::from("/opt/android"))
            .await
            .unwrap();
        assert_eq!(runner.calls(), vec!["sudo ls /opt/android/cmdline-tools"]);
    }
}
