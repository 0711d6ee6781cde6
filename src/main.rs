use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::{DashboardArgs, Settings};
use dashboard::{Dashboard, export_csv, export_file_name, render_text};
use std::net::SocketAddr;
use std::path::PathBuf;

/// The main entry point for the CAPM dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load CAPM__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_settings(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &settings).await,
        Commands::Export(args) => handle_export(args, &settings).await,
        Commands::Serve(args) => handle_serve(args, &settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Expected portfolio returns: CAPM against realized returns for a single ticker.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the settings file.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch prices, compute CAPM statistics and print the dashboard.
    Analyze(AnalyzeArgs),
    /// Write the CAPM summary for a ticker to a CSV file.
    Export(ExportArgs),
    /// Serve the dashboard over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    #[command(flatten)]
    dashboard: DashboardArgs,

    /// How many of the most recent daily returns to print.
    #[arg(long, default_value_t = 10)]
    rows: usize,

    /// Print the full render payload as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ExportArgs {
    #[command(flatten)]
    dashboard: DashboardArgs,

    /// Output file. Defaults to `<TICKER>_capm_summary.csv`.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides `[server].host`.
    #[arg(long)]
    host: Option<String>,

    /// Overrides `[server].port`.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn build_dashboard(settings: &Settings) -> anyhow::Result<Dashboard> {
    let provider = api_client::provider_from_settings(&settings.provider)?;
    Ok(Dashboard::new(provider, &settings.provider)?)
}

async fn handle_analyze(args: AnalyzeArgs, settings: &Settings) -> anyhow::Result<()> {
    let config = args.dashboard.apply(&settings.dashboard)?;
    let payload = build_dashboard(settings)?.recompute(&config).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_text(&payload, args.rows));
    }
    Ok(())
}

async fn handle_export(args: ExportArgs, settings: &Settings) -> anyhow::Result<()> {
    let config = args.dashboard.apply(&settings.dashboard)?;
    let payload = build_dashboard(settings)?.recompute(&config).await;

    let Some(result) = payload.result else {
        for warning in &payload.warnings {
            eprintln!("WARNING: {}", warning.message());
        }
        anyhow::bail!("No CAPM summary available for {}", config.ticker);
    };

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(export_file_name(&result.ticker)));
    std::fs::write(&out, export_csv(&result)?)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    tracing::info!(ticker = %result.ticker, path = %out.display(), "CAPM summary exported.");
    println!("Wrote {}", out.display());
    Ok(())
}

async fn handle_serve(args: ServeArgs, settings: &Settings) -> anyhow::Result<()> {
    let host = args.host.unwrap_or_else(|| settings.server.host.clone());
    let port = args.port.unwrap_or(settings.server.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let state = web_server::AppState::from_settings(settings)?;
    web_server::run_server(addr, state).await
}
