use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ratepulse_core::ValidationError),

    /// The mandatory fetching capability could not be constructed at
    /// startup. Fatal before any output is produced.
    #[error("http transport unavailable: {0}")]
    Startup(String),

    #[error(transparent)]
    Output(#[from] ratepulse_core::OutputError),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Startup(_) => 3,
            Self::Output(_) => 10,
        }
    }
}
