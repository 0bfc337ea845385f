use std::io;

use thiserror::Error;

use crate::cli::ParseError;
use crate::exits;
use crate::pass::GenerateError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Parse(_) => exits::USAGE,
            Error::Generate(_) | Error::Io(_) => exits::FAILURE,
        }
    }
}
