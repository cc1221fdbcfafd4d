use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HaliteError {
    #[error("line ended while reading {0}")]
    UnexpectedEnd(&'static str),
    #[error("could not read {kind} from token {token:?}")]
    InvalidToken { kind: &'static str, token: String },
    #[error("not a valid docking status: {0}")]
    InvalidDockingStatus(i32),
    #[error("the game engine closed the connection")]
    Disconnected,
    #[error("could not set up logging: {0}")]
    Logging(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HaliteError>;
