use filetree_api_client::FileTreeApiClient;
use filetree_server::api::{run_server, ServerConfig};
use tokio::runtime::{Builder, Runtime};

/// Starts a server on its own runtime. The server stops when the returned
/// runtime is dropped.
pub fn start_server(config: ServerConfig) -> (Runtime, FileTreeApiClient) {
    let runtime = Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .unwrap();

    let base_url = format!("http://127.0.0.1:{}", config.port);
    runtime.spawn(async {
        run_server(config).await.unwrap();
    });
    std::thread::sleep(std::time::Duration::from_secs(1));

    (runtime, FileTreeApiClient::new(base_url))
}
