use std::process::ExitCode;

/// How a menu run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The chosen action was carried out
    Done,
    /// The picker was dismissed or returned nothing
    Cancelled,
    /// A default config was written; the user has to edit it first
    ConfigCreated,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Cancelled | Outcome::ConfigCreated => ExitCode::FAILURE,
        }
    }
}
