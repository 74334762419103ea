use openverse_mcp_server::config::ServerConfig;

#[actix_web::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = openverse_mcp_server::run(config).await {
        log::error!("Server stopped: {:#}", e);
        std::process::exit(1);
    }
}
