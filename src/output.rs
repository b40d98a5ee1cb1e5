use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::converter::ConversionOutcome;
use crate::error::Result;
use crate::paths::ConversionTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Streams per-file progress as it happens. Nothing is buffered for a
/// summary.
pub struct Reporter<O, E> {
    format: Format,
    out: O,
    err: E,
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    file: &'a str,
    input: Cow<'a, str>,
    output: Cow<'a, str>,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(format: Format, out: O, err: E) -> Self {
        Self { format, out, err }
    }

    pub fn no_candidates(&mut self, from_ext: &str, source: &Path) -> Result<()> {
        let line = format!("No *.{from_ext} files found in {}", source.display());
        match self.format {
            Format::Text => writeln!(self.out, "{line}")?,
            Format::Json => writeln!(self.err, "{line}")?,
        }
        Ok(())
    }

    pub fn started(&mut self, task: &ConversionTask) -> Result<()> {
        if self.format == Format::Text {
            writeln!(
                self.out,
                "{} --> {}",
                task.display_name(),
                task.display_output()
            )?;
        }
        Ok(())
    }

    pub fn finished(&mut self, task: &ConversionTask, outcome: &ConversionOutcome) -> Result<()> {
        match self.format {
            Format::Text => match outcome {
                ConversionOutcome::Succeeded => {
                    writeln!(self.out, "Done: {}", task.display_output())?;
                }
                ConversionOutcome::Failed { diagnostic } => {
                    writeln!(self.err, "Failed: {}\n{diagnostic}", task.display_name())?;
                }
            },
            Format::Json => {
                let name = task.display_name();
                let record = JsonOutcome {
                    file: &name,
                    input: task.input_path.to_string_lossy(),
                    output: task.output_path.to_string_lossy(),
                    success: outcome.is_success(),
                    error: outcome.diagnostic(),
                };
                let line = serde_json::to_string(&record)?;
                writeln!(self.out, "{line}")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::ffi::OsString;

    fn task(name: &str) -> ConversionTask {
        ConversionTask::new(
            Path::new("src"),
            Path::new("dst"),
            &OsString::from(name),
            "png",
        )
    }

    fn failed() -> ConversionOutcome {
        ConversionOutcome::Failed {
            diagnostic: "moov atom not found".to_string(),
        }
    }

    fn text(reporter: Reporter<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = reporter.into_parts();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn text_progress_and_result_lines() {
        let mut r = Reporter::new(Format::Text, Vec::new(), Vec::new());
        let a = task("a.JPG");
        let c = task("c.jpg");
        r.started(&a).unwrap();
        r.finished(&a, &failed()).unwrap();
        r.started(&c).unwrap();
        r.finished(&c, &ConversionOutcome::Succeeded).unwrap();

        let (out, err) = text(r);
        assert_eq!(out, "a.JPG --> a.png\nc.jpg --> c.png\nDone: c.png\n");
        assert_eq!(err, "Failed: a.JPG\nmoov atom not found\n");
    }

    #[test]
    fn text_no_candidates_message() {
        let mut r = Reporter::new(Format::Text, Vec::new(), Vec::new());
        r.no_candidates("jpg", Path::new("photos")).unwrap();
        let (out, err) = text(r);
        assert_eq!(out, "No *.jpg files found in photos\n");
        assert!(err.is_empty());
    }

    #[test]
    fn json_writes_one_object_per_outcome() {
        let mut r = Reporter::new(Format::Json, Vec::new(), Vec::new());
        let a = task("a.JPG");
        let c = task("c.jpg");
        r.started(&a).unwrap();
        r.finished(&a, &failed()).unwrap();
        r.finished(&c, &ConversionOutcome::Succeeded).unwrap();

        let (out, err) = text(r);
        assert!(err.is_empty());
        let lines: Vec<Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["file"], "a.JPG");
        assert_eq!(lines[0]["success"], false);
        assert_eq!(lines[0]["error"], "moov atom not found");
        assert_eq!(lines[1]["success"], true);
        assert!(lines[1].get("error").is_none());
        assert!(lines[1]["output"].as_str().unwrap().ends_with("c.png"));
    }

    #[test]
    fn json_no_candidates_goes_to_stderr() {
        let mut r = Reporter::new(Format::Json, Vec::new(), Vec::new());
        r.no_candidates("wav", Path::new("in")).unwrap();
        let (out, err) = text(r);
        assert!(out.is_empty());
        assert_eq!(err, "No *.wav files found in in\n");
    }
}
