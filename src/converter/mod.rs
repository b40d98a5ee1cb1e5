use crate::paths::ConversionTask;

pub mod external;
#[cfg(test)]
pub mod mock;

pub use external::ExternalTool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    Succeeded,
    Failed { diagnostic: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Succeeded)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Succeeded => None,
            ConversionOutcome::Failed { diagnostic } => Some(diagnostic),
        }
    }
}

/// Turns one input file into one output file. Implementations block until
/// the conversion has finished and never fail the batch: every problem is
/// reported through the outcome.
pub trait Converter {
    fn convert(&mut self, task: &ConversionTask) -> ConversionOutcome;
}
