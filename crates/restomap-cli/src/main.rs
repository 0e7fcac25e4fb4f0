use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use restomap_import::{FilePayload, FormatHint};
use restomap_view::ViewSession;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "restomap")]
#[command(about = "Import a restaurant spreadsheet and print its list or map view as JSON")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the records matching the query, in sheet order.
    List {
        #[command(flatten)]
        source: Source,
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Print the geocoded records matching the query and the camera framing.
    Map {
        #[command(flatten)]
        source: Source,
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Print the import report only.
    Summary {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(Debug, Args)]
struct Source {
    /// Spreadsheet to import (.xlsx, .xls, .xlsb or .ods).
    file: PathBuf,
    /// Treat the file as base64 text, optionally a `data:` URL.
    #[arg(long)]
    base64: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = restomap_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        env = %config.env,
        center_zoom = config.map.center_zoom,
        fit_padding_px = config.map.fit_padding_px,
        max_import_bytes = config.max_import_bytes,
        "configuration loaded"
    );

    let session = ViewSession::from_config(&config);

    let output = match cli.command {
        Commands::List { source, query } => {
            import(&session, &source).await?;
            session.set_query(&query).await;
            let state = session.snapshot().await;
            serde_json::to_string_pretty(&state.list_view())?
        }
        Commands::Map { source, query } => {
            import(&session, &source).await?;
            session.set_query(&query).await;
            let state = session.snapshot().await;
            serde_json::to_string_pretty(&state.map_view(session.map_settings()))?
        }
        Commands::Summary { source } => {
            let report = import(&session, &source).await?;
            serde_json::to_string_pretty(&report)?
        }
    };
    println!("{output}");

    Ok(())
}

async fn import(
    session: &ViewSession,
    source: &Source,
) -> anyhow::Result<restomap_import::ImportReport> {
    let payload = read_payload(&source.file, source.base64).await?;
    session.import(payload).await.map_err(|e| {
        tracing::error!(file = %source.file.display(), error = %e, "import failed");
        anyhow::anyhow!(e.user_message())
    })
}

async fn read_payload(path: &Path, base64: bool) -> anyhow::Result<FilePayload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let hint = FormatHint::from_path(path);
    if base64 {
        let text = String::from_utf8(bytes)
            .with_context(|| format!("{} is not UTF-8 text", path.display()))?;
        return FilePayload::from_base64(&text, hint)
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()));
    }
    Ok(FilePayload::from_bytes(bytes, hint))
}

#[cfg(test)]
mod tests;
