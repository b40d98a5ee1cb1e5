use std::ffi::OsString;
use std::io::{BufRead, Write};

use crate::converter::Converter;
use crate::error::Result;
use crate::output::Reporter;
use crate::paths::{ConversionTask, prepare_destination};
use crate::prompt::{ConversionRequest, Prompter};
use crate::select::select_candidates;

/// Prompts, prepares the destination, selects candidates and converts them.
pub fn run<R, P, C, O, E>(
    prompter: Prompter<R, P>,
    converter: &mut C,
    reporter: &mut Reporter<O, E>,
) -> Result<()>
where
    R: BufRead,
    P: Write,
    C: Converter + ?Sized,
    O: Write,
    E: Write,
{
    let request = prompter.collect()?;
    tracing::debug!(?request, "collected request");

    prepare_destination(&request.dest_dir)?;

    let candidates = select_candidates(&request.source_dir, &request.from_ext)?;
    if candidates.is_empty() {
        return reporter.no_candidates(&request.from_ext, &request.source_dir);
    }

    convert_all(&request, &candidates, converter, reporter)
}

/// Converts each candidate in order, one at a time. A failed file is
/// reported and the loop moves on.
pub fn convert_all<C, O, E>(
    request: &ConversionRequest,
    candidates: &[OsString],
    converter: &mut C,
    reporter: &mut Reporter<O, E>,
) -> Result<()>
where
    C: Converter + ?Sized,
    O: Write,
    E: Write,
{
    for file_name in candidates {
        let task = ConversionTask::new(
            &request.source_dir,
            &request.dest_dir,
            file_name,
            &request.to_ext,
        );
        reporter.started(&task)?;

        let outcome = converter.convert(&task);
        if let Some(diagnostic) = outcome.diagnostic() {
            tracing::warn!(file = %task.display_name(), %diagnostic, "conversion failed");
        }
        reporter.finished(&task, &outcome)?;
    }
    Ok(())
}
