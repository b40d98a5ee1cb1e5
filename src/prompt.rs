use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{ConvertError, Result};
use crate::paths::strip_quotes;

pub const SOURCE_PROMPT: &str = "Source folder: ";
pub const DEST_PROMPT: &str = "Destination folder: ";
pub const FROM_PROMPT: &str = "Convert from: ";
pub const TO_PROMPT: &str = "Convert to: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    pub from_ext: String,
    pub to_ext: String,
}

/// Owns the interactive input for the duration of the prompts.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, question: &'static str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConvertError::UnexpectedEof(question.trim_end()));
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Reads the four answers and releases the input handle.
    pub fn collect(mut self) -> Result<ConversionRequest> {
        let source = self.ask(SOURCE_PROMPT)?;
        let dest = self.ask(DEST_PROMPT)?;
        let from_ext = self.ask(FROM_PROMPT)?.to_lowercase();
        let to_ext = self.ask(TO_PROMPT)?.to_lowercase();

        Ok(ConversionRequest {
            source_dir: PathBuf::from(strip_quotes(&source)),
            dest_dir: PathBuf::from(strip_quotes(&dest)),
            from_ext,
            to_ext,
        })
    }
}
