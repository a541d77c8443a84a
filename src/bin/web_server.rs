use floyd_paths::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Usage: web_server [port]
    let mut config = ServerConfig::default();
    if let Some(arg) = env::args().nth(1) {
        config.port = arg.parse()?;
    }
    if let Ok(dir) = env::var("FLOYD_PATHS_STATIC_DIR") {
        config.static_dir = dir;
    }

    println!("Starting Floyd Paths web server...");
    println!("Configuration:");
    println!("   Port: {}", config.port);
    println!("   Static files: {}", config.static_dir);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!("   Session timeout: {} minutes", config.session_timeout_minutes);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
