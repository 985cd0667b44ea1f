use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): extraction finished without errors
/// - `Failure` (1): extraction finished but some files could not be parsed
/// - `Error` (2): the command itself failed (bad config, I/O, malformed inventory)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
