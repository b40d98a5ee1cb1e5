use clap::Parser;

use crate::output::Format;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Parser, Debug)]
#[command(
    name = "batch-convert",
    version,
    about = "Convert every file of one format in a folder with ffmpeg"
)]
pub struct Cli {
    /// Converter binary, looked up on PATH unless it is a path.
    #[arg(long, env = "BATCH_CONVERT_TOOL", default_value = "ffmpeg")]
    pub tool: String,

    #[arg(long, default_value = "text")]
    pub output: String,
}

impl Cli {
    pub fn validate(&self) -> Result<(), String> {
        if self.tool.trim().is_empty() {
            return Err("tool must not be empty".to_string());
        }

        if !OUTPUT_FORMATS.contains(&self.output.as_str()) {
            return Err(format!("Unknown output format: {}", self.output));
        }

        Ok(())
    }

    pub fn format(&self) -> Format {
        match self.output.as_str() {
            "json" => Format::Json,
            _ => Format::Text,
        }
    }
}
