use std::path::PathBuf;

use crate::converter::{ConversionOutcome, Converter};
use crate::paths::ConversionTask;

/// Records every task and fails those whose file name contains a marker.
#[derive(Default)]
pub struct MockConverter {
    pub fail_marker: Option<String>,
    pub calls: Vec<(PathBuf, PathBuf)>,
}

impl MockConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.to_string()),
            calls: Vec::new(),
        }
    }
}

impl Converter for MockConverter {
    fn convert(&mut self, task: &ConversionTask) -> ConversionOutcome {
        self.calls
            .push((task.input_path.clone(), task.output_path.clone()));

        match &self.fail_marker {
            Some(marker) if task.display_name().contains(marker.as_str()) => {
                ConversionOutcome::Failed {
                    diagnostic: format!("{}: Invalid data found", task.display_name()),
                }
            }
            _ => ConversionOutcome::Succeeded,
        }
    }
}
