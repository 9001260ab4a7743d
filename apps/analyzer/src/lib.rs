//! # Kasa Analyzer Application
//!
//! Orchestration layer between the presentation (scanner view, receipt
//! tables, statistics) and the normalization backend.
//!
//! ## Module Organization
//! ```text
//! kasa_analyzer/
//! ├── lib.rs          ◄─── You are here (wiring & run)
//! ├── state/
//! │   ├── store.rs    ◄─── DataStore (list, selection, statistics)
//! │   ├── scanner.rs  ◄─── Scanner lifecycle + decoder seam
//! │   ├── ingest.rs   ◄─── Ingestion orchestrator
//! │   └── reporter.rs ◄─── Error surfaces
//! ├── commands/       ◄─── Entry points for the presentation layer
//! ├── shell.rs        ◄─── Line-oriented dev shell
//! └── error.rs        ◄─── ApiError for command results
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Read backend config from the environment
//! 3. Wire backend client, store, scanner, orchestrator, reporter
//! 4. Run the initial list/statistics load
//! 5. Activate the scanner and hand control to the shell

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kasa_api::{ApiConfig, HttpBackend, ReceiptBackend};

use state::{
    DataStore, ErrorReporter, IngestionOrchestrator, NoopDecoder, ScanDecoder, ScannerController,
};

/// Shared application state: one owner per mutable value.
pub struct AppState {
    pub store: Arc<DataStore>,
    pub scanner: Arc<ScannerController>,
    pub ingest: Arc<IngestionOrchestrator>,
    pub reporter: Arc<ErrorReporter>,
}

impl AppState {
    /// Wires the controllers around the given backend and decoder.
    pub fn new(
        backend: Arc<dyn ReceiptBackend>,
        decoder: Arc<dyn ScanDecoder>,
        list_limit: u32,
    ) -> Self {
        let reporter = Arc::new(ErrorReporter::new());
        let store = Arc::new(DataStore::new(Arc::clone(&backend), list_limit));
        let scanner = Arc::new(ScannerController::new(decoder, Arc::clone(&reporter)));
        let ingest = Arc::new(IngestionOrchestrator::new(
            backend,
            Arc::clone(&store),
            Arc::clone(&scanner),
            Arc::clone(&reporter),
        ));
        AppState {
            store,
            scanner,
            ingest,
            reporter,
        }
    }

    /// App state over scripted fakes, pinned to a fixed period.
    #[cfg(test)]
    pub(crate) fn for_tests(backend: Arc<state::testing::FakeBackend>) -> Self {
        use kasa_core::Period;

        let backend = backend as Arc<dyn ReceiptBackend>;
        let decoder = Arc::new(state::testing::FakeDecoder::new()) as Arc<dyn ScanDecoder>;
        let reporter = Arc::new(ErrorReporter::new());
        let store = Arc::new(DataStore::with_period(
            Arc::clone(&backend),
            50,
            Period {
                year: 2024,
                month: 3,
            },
        ));
        let scanner = Arc::new(ScannerController::new(decoder, Arc::clone(&reporter)));
        let ingest = Arc::new(IngestionOrchestrator::new(
            backend,
            Arc::clone(&store),
            Arc::clone(&scanner),
            Arc::clone(&reporter),
        ));
        AppState {
            store,
            scanner,
            ingest,
            reporter,
        }
    }
}

/// Runs the analyzer with the HTTP backend and the dev shell.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ApiConfig::from_env();
    info!(base_url = %config.base_url, "Starting Kasa Analyzer");

    let backend: Arc<dyn ReceiptBackend> = Arc::new(HttpBackend::new(config.clone()));
    let state = AppState::new(backend, Arc::new(NoopDecoder), config.list_limit);

    // Initial load, the same fetch the UI performs on mount. A failure
    // lands on the banner; the shell shows it.
    if let Err(err) = commands::receipts::reload(&state).await {
        warn!(%err, "Initial load failed");
    }
    state.scanner.resume();

    shell::run(state).await?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages everywhere
/// - Default: INFO, with DEBUG for the analyzer crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kasa_api=debug,kasa_analyzer=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
