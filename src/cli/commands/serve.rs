use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

/// Run the HTTP echo server
#[derive(Args)]
pub struct ServeCommand {
    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to run the HTTP server on (overrides config)
    #[arg(long)]
    port: Option<u16>,
}

impl ServeCommand {
    pub async fn run(&self, app_config: &AppConfig) -> AppResult<()> {
        let mut server_config = app_config.server.clone();
        if let Some(host) = &self.host {
            server_config.host = host.clone();
        }
        if let Some(port) = self.port {
            server_config.port = port;
        }

        info!("=== Ferret Finder - Echo Server ===");
        info!("  Max body size: {} bytes", server_config.max_body_bytes);

        crate::server::serve(&server_config).await
    }
}
