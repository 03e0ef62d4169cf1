use filetree_listing::{
    reader::DirectoryReader,
    renderer::{DirectoryListingRenderer, RendererConfig},
};

use crate::api::ServerConfig;

#[derive(Debug, Clone)]
pub struct ApiState {
    pub renderer: DirectoryListingRenderer,
}

impl ApiState {
    pub fn new(config: &ServerConfig) -> Self {
        let renderer_config = RendererConfig {
            exclude_hidden: config.exclude_hidden,
            escape_names: config.escape_names,
        };
        Self {
            renderer: DirectoryListingRenderer::new(DirectoryReader::default(), renderer_config),
        }
    }
}
