use std::{fmt, io};

use rustyline::error::ReadlineError;
use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error("Input closed before the session was exited")]
    InputClosed,

    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),

    #[error("Cannot read init file: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot write output")]
    Output(#[from] fmt::Error),
}
