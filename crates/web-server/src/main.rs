use std::net::SocketAddr;
use std::path::Path;

// This main function is the entry point when running `cargo run -p web-server`.
// It loads `config.toml`, then hands off to the crate's library.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_settings(Path::new("config.toml"))?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let state = web_server::AppState::from_settings(&settings)?;
    web_server::run_server(addr, state).await
}
