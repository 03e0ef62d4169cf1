use std::process::ExitCode;

use clap::Parser;
use filetree_config_file::FileTreeConfigToml;
use filetree_server::{api::run_server, args::Args};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => match FileTreeConfigToml::load(path) {
            Ok(file_config) => file_config,
            Err(e) => {
                log::error!("failed to load config {}: {:?}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => FileTreeConfigToml::default(),
    };
    let config = args.server_config(&file_config);

    if let Err(e) = run_server(config).await {
        log::error!("server stopped: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
