use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paysheet::application::session::{Session, SessionConfig};
use paysheet::infrastructure::in_memory::InMemoryCatalog;
use paysheet::interfaces::csv::catalog_reader::CatalogReader;
use paysheet::interfaces::terminal::driver::drive;
use paysheet::interfaces::terminal::view_writer::{OutputFormat, ViewWriter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Starting value of the countdown, in ticks
    #[arg(long, default_value_t = 60)]
    seconds: u32,

    /// Milliseconds between countdown ticks
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Simulated catalog latency in milliseconds
    #[arg(long, default_value_t = 2000)]
    latency_ms: u64,

    /// CSV file (`id,name`) replacing the built-in payment types
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print views as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let types = match cli.catalog {
        Some(path) => {
            let file = File::open(&path).into_diagnostic()?;
            let types = CatalogReader::new(file).read_all().into_diagnostic()?;
            info!(path = %path.display(), count = types.len(), "catalog loaded");
            types
        }
        None => InMemoryCatalog::default_types(),
    };
    let catalog = InMemoryCatalog::new(types, Duration::from_millis(cli.latency_ms));

    let config = SessionConfig {
        initial_seconds: cli.seconds,
        tick: Duration::from_millis(cli.tick_ms.max(1)),
    };
    let (session, handle) = Session::new(config, Arc::new(catalog));
    let session = tokio::spawn(session.run());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = io::stdout();
    let mut writer = ViewWriter::new(stdout.lock(), format);
    drive(handle, BufReader::new(tokio::io::stdin()), &mut writer)
        .await
        .into_diagnostic()?;

    session.await.into_diagnostic()?;
    Ok(())
}
