use std::path::Path;

use serde::Deserialize;

/// Contents of `filetree.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileTreeConfigToml {
    pub address: Option<String>,
    pub port: Option<u16>,
    pub exclude_hidden: Option<bool>,
    pub escape_names: Option<bool>,
}

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
    TomlError(toml::de::Error),
}

impl FileTreeConfigToml {
    pub fn parse(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(Error::TomlError)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let s = std::fs::read_to_string(path).map_err(Error::IOError)?;
        Self::parse(&s)
    }
}
