//! folio_snapshot - export the current portfolio document to stdout or a file.
//!
//! ```text
//! FOLIO_DATA_PATH=data/portfolio.json folio_snapshot [OUTPUT]
//! ```
//!
//! With no argument the pretty-printed JSON snapshot goes to stdout, ready
//! to redirect into version control. This is the system's backup mechanism:
//! the snapshot re-loads byte-for-byte equivalent, `version` included.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_store::{DocumentStore, FilesystemBackend, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = StoreConfig::from_env();
    let backend = FilesystemBackend::new();
    if let Err(e) = backend.validate(&config.data_path).await {
        anyhow::bail!("storage not usable at {:?}: {e}", config.data_path);
    }

    let store = DocumentStore::open(&config).await;
    let read = store.current();
    let bytes = store.snapshot().context("encoding snapshot")?;

    match std::env::args().nth(1).map(PathBuf::from) {
        Some(output) => {
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("writing snapshot to {output:?}"))?;
            info!(
                subsystem = "store",
                op = "snapshot",
                doc_version = read.version,
                data_path = %output.display(),
                "snapshot written"
            );
        }
        None => {
            std::io::stdout()
                .write_all(&bytes)
                .context("writing snapshot to stdout")?;
        }
    }
    Ok(())
}
