use std::{fs, io, path::{Path, PathBuf}};

use eyre::WrapErr;
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub server_url: String,
    pub rainbow_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: common::consts::DEFAULT_SERVER_URL.to_owned(),
            rainbow_file: None,
        }
    }
}

impl Config {
    /// Falls back to defaults when the file doesn't exist.
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
        };

        toml::from_str(&buf).wrap_err_with(|| format!("failed to parse {}", path.display()))
    }
}
