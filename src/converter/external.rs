use std::ffi::OsString;
use std::process::{Command, Output, Stdio};
use std::time::Instant;

use crate::converter::{ConversionOutcome, Converter};
use crate::paths::ConversionTask;

/// Runs `<program> -y -i <input> <output>` and waits for it to exit.
pub struct ExternalTool {
    program: String,
}

impl ExternalTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn args(task: &ConversionTask) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-i".into(),
            task.input_path.clone().into_os_string(),
            task.output_path.clone().into_os_string(),
        ]
    }

    fn command_line(&self, task: &ConversionTask) -> String {
        let args = Self::args(task);
        let words = std::iter::once(self.program.clone())
            .chain(args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>();
        shell_words::join(words)
    }

    fn outcome(&self, output: Output) -> ConversionOutcome {
        if output.status.success() {
            return ConversionOutcome::Succeeded;
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim_end();
        let diagnostic = if !stderr.is_empty() {
            stderr.to_string()
        } else {
            match output.status.code() {
                Some(code) => format!("{} exited with status {code}", self.program),
                None => format!("{} was terminated by a signal", self.program),
            }
        };
        ConversionOutcome::Failed { diagnostic }
    }
}

impl Converter for ExternalTool {
    fn convert(&mut self, task: &ConversionTask) -> ConversionOutcome {
        tracing::debug!(command = %self.command_line(task), "running converter");
        let start = Instant::now();

        let result = Command::new(&self.program)
            .args(Self::args(task))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let outcome = match result {
            Ok(output) => self.outcome(output),
            Err(err) => ConversionOutcome::Failed {
                diagnostic: format!("failed to run {}: {err}", self.program),
            },
        };

        tracing::debug!(
            file = %task.display_name(),
            elapsed = %humantime::format_duration(start.elapsed()),
            success = outcome.is_success(),
            "converter finished"
        );
        outcome
    }
}
