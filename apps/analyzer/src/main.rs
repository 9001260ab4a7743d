//! # Kasa Analyzer Entry Point
//!
//! Thin binary wrapper; the actual wiring lives in `lib.rs` so tests can
//! assemble the same state without a process.

#[tokio::main]
async fn main() {
    if let Err(err) = kasa_analyzer::run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
