use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read source folder {}: {source}", path.display())]
    SourceDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{} is not a folder", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot create destination folder {}: {source}", path.display())]
    CreateDest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input ended before an answer to {0:?} was given")]
    UnexpectedEof(&'static str),

    #[error("{0} folder is empty")]
    EmptyPath(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArg(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
