use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::state::ApiState;

use self::jquery_file_tree::{jquery_file_tree_get, jquery_file_tree_post};

pub mod jquery_file_tree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub exclude_hidden: bool,
    pub escape_names: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8080,
            exclude_hidden: true,
            escape_names: false,
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(jquery_file_tree_get)
        .service(jquery_file_tree_post);
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let state = ApiState::new(&config);

    log::info!(
        "listening on {}:{} (exclude_hidden = {}, escape_names = {})",
        config.address,
        config.port,
        config.exclude_hidden,
        config.escape_names
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind((config.address.as_str(), config.port))?
    .run();
    server.await
}
