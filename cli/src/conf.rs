use crate::err::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONF: &str = "blog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// print whitespace and comment tokens in `lex`
    pub show_trivia: bool,
    /// color token kinds and diagnostics
    pub color: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf { show_trivia: true, color: true }
    }
}

impl Conf {
    pub fn parse(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
    /// Load `path` if given; otherwise `./blog.toml` if it exists; otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            | Some(path) => path.to_path_buf(),
            | None => {
                let path = PathBuf::from(DEFAULT_CONF);
                if !path.exists() {
                    log::debug!("no `{}` found; using the default configuration", DEFAULT_CONF);
                    return Ok(Conf::default());
                }
                path
            }
        };
        log::info!("loading configuration from `{}`", path.display());
        let s = std::fs::read_to_string(&path)
            .map_err(|source| CliError::ReadError { path: path.clone(), source })?;
        Conf::parse(&s)
    }
}
