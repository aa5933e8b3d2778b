mod logger;
mod messages;
mod server_config;
mod session;
mod web_server;

use clap::Parser;

use server_config::ServerConfig;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long, default_value = "tictactoe_server_config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let config = ServerConfig::load(&args.config)?;
    config.validate()?;

    web_server::run_web_server(config).await;

    Ok(())
}
