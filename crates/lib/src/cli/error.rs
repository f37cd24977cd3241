use core::num::ParseIntError;

use thiserror::Error;

/// Errors raised while setting up the command line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    #[error("non-utf8 argument")]
    NonUtf8Argument,
    #[error("unsupported argument: {0}")]
    UnsupportedArgument(String),
    #[error("duplicate `--bench` arguments")]
    DuplicateBench,
    #[error("missing argument to `{0}`")]
    MissingValue(&'static str),
    #[error("bad argument to `{flag}`")]
    BadValue {
        flag: &'static str,
        #[source]
        error: ParseIntError,
    },
    #[error("failed to set log: {0}")]
    Logger(log::SetLoggerError),
}
