use std::path::PathBuf;

use clap::Parser;
use filetree_config_file::FileTreeConfigToml;

use crate::api::ServerConfig;

/// Serves directory listings for the jQuery File Tree widget
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML file with address, port, exclude_hidden and escape_names
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub port: Option<u16>,

    /// Skip entries whose name starts with `.` (default: true)
    #[arg(long)]
    pub exclude_hidden: Option<bool>,

    /// HTML-escape entry names in the listing (default: false)
    #[arg(long)]
    pub escape_names: Option<bool>,
}

impl Args {
    /// Command line beats the config file, which beats the defaults.
    pub fn server_config(&self, file: &FileTreeConfigToml) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig {
            address: self
                .address
                .clone()
                .or_else(|| file.address.clone())
                .unwrap_or(default.address),
            port: self.port.or(file.port).unwrap_or(default.port),
            exclude_hidden: self
                .exclude_hidden
                .or(file.exclude_hidden)
                .unwrap_or(default.exclude_hidden),
            escape_names: self
                .escape_names
                .or(file.escape_names)
                .unwrap_or(default.escape_names),
        }
    }
}
