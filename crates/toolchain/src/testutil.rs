//! Test doubles for the command runner.

use std::sync::Mutex;

use async_trait::async_trait;
use sdk_provision_core::exec::{CommandLine, CommandRunner, ExecError, ExecOutput};

/// Runner that records every rendered command line and answers from a
/// script of substring-matched outputs. The first matching entry wins;
/// unmatched commands succeed with empty output.
pub struct ScriptedRunner {
    calls: Mutex<Vec<String>>,
    script: Vec<(String, ExecOutput)>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Vec::new(),
        }
    }

    pub fn on(mut self, needle: &str, output: ExecOutput) -> Self {
        self.script.push((needle.to_string(), output));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, command: &CommandLine) -> Result<ExecOutput, ExecError> {
        let rendered = command.to_string();
        self.calls.lock().unwrap().push(rendered.clone());

        let output = self
            .script
            .iter()
            .find(|(needle, _)| rendered.contains(needle))
            .map(|(_, output)| output.clone())
            .unwrap_or_else(ExecOutput::ok);
        Ok(output)
    }
}
