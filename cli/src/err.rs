use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    ConfError(#[from] toml::de::Error),
    #[error("cannot read `{}`: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{count} unrecognized character(s) in {files} file(s)")]
    LexErrors { count: usize, files: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;
