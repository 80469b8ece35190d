use anyhow::Result;
use std::net::SocketAddr;

use crate::app::setup::lazy_assistant;
use crate::cli::Cli;
use crate::web::server::{WebServer, WebServerConfig};

/// Run the web server
pub async fn run_web_server(cli: &Cli) -> Result<()> {
    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", cli.web_bind, cli.web_port).parse()?;

    println!("🌍 Starting nomadchat web server...");
    println!("   Address: {}", addr);
    println!("   Static files: {}", cli.static_dir.display());

    let config = WebServerConfig {
        bind_addr: addr,
        static_dir: cli.static_dir.clone(),
        environment: cli.deployment_environment(),
    };

    let server = WebServer::new(config, lazy_assistant(cli));
    server.start().await?;

    Ok(())
}
