//! # Dev Shell
//!
//! Line-oriented stand-in for the presentation layer. Every command maps
//! onto one of the entry points in [`crate::commands`]; there is no logic
//! here beyond parsing a line and printing the resulting snapshot.
//!
//! ```text
//! > scan V1?p=x&d=y        submit a decoded QR payload
//! > paste MP1234567890     submit a typed/pasted identifier
//! > upload export.json     submit an uploaded JSON export
//! > select MP1234567890    select a receipt from the list
//! > list | stats | resume | reload | help | quit
//! ```

use std::io::Write;

use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use crate::commands;
use crate::AppState;

/// Runs the shell until EOF or `quit`.
pub async fn run(state: AppState) -> std::io::Result<()> {
    println!("Kasa Analyzer dev shell. Type 'help' for commands.");
    print_summary(&state);
    prompt()?;

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "help" => print_help(),
            "scan" => {
                // Errors land on the banner; the summary shows them.
                let _ = commands::ingest::submit_scanned(&state, rest).await;
                print_summary(&state);
            }
            "paste" => {
                let _ = commands::ingest::submit_manual(&state, rest).await;
                print_summary(&state);
            }
            "upload" => {
                upload(&state, rest).await;
                print_summary(&state);
            }
            "select" => {
                let _ = commands::receipts::select_receipt(&state, rest).await;
                print_summary(&state);
            }
            "reload" => {
                let _ = commands::receipts::reload(&state).await;
                print_summary(&state);
            }
            "resume" => {
                commands::scanner::resume(&state);
                print_summary(&state);
            }
            "list" => print_list(&state),
            "stats" => print_stats(&state),
            "quit" | "exit" => break,
            other => println!("Unknown command: {other}"),
        }
        prompt()?;
    }
    Ok(())
}

async fn upload(state: &AppState, path: &str) {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            println!("Cannot read {path}: {err}");
            return;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => {
            let _ = commands::ingest::submit_upload(state, value).await;
        }
        Err(_) => println!("File is not valid JSON."),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn print_help() {
    println!("  scan <text>     submit a decoded QR payload");
    println!("  paste <text>    submit a typed/pasted identifier or QR text");
    println!("  upload <path>   submit a JSON export file");
    println!("  select <id>     select a receipt by its receipt id");
    println!("  list            show the cached receipt list");
    println!("  stats           show the cached period statistics");
    println!("  resume          re-activate the scanner");
    println!("  reload          refresh list, statistics and selection");
    println!("  quit            exit");
}

fn print_summary(state: &AppState) {
    let snap = commands::snapshot(state);
    if let Some(error) = &snap.error {
        println!("! {error}");
    }
    if let Some(scan_error) = &snap.scan_error {
        println!("! scanner: {scan_error}");
    }
    let scanner = if snap.scanner.active {
        "active".to_string()
    } else {
        match &snap.scanner.message {
            Some(message) => format!("paused ({message})"),
            None => "paused".to_string(),
        }
    };
    println!("scanner: {scanner}");
    match &snap.selected {
        Some(detail) => {
            let merchant = detail
                .summary
                .merchant_name
                .as_deref()
                .unwrap_or("Unknown merchant");
            println!(
                "selected: {} ({merchant}, {} items)",
                detail.receipt_id(),
                detail.items.len()
            );
        }
        None => println!("selected: none"),
    }
    println!("receipts cached: {}", snap.receipts.len());
}

fn print_list(state: &AppState) {
    let snap = commands::snapshot(state);
    if snap.receipts.is_empty() {
        println!("No receipts yet.");
        return;
    }
    for receipt in &snap.receipts {
        let merchant = receipt.merchant_name.as_deref().unwrap_or("Unknown merchant");
        let total = receipt
            .total_amount
            .map(|t| format!("{t:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!("  {}  {merchant}  {total}", receipt.receipt_id);
    }
}

fn print_stats(state: &AppState) {
    let snap = commands::snapshot(state);
    match &snap.statistics {
        Some(stats) => {
            println!("{}-{:02}:", stats.year, stats.month);
            for row in &stats.totals {
                println!("  {}  {:.2}", row.category, row.total);
            }
            println!("  total  {:.2}", stats.grand_total());
        }
        None => println!("No statistics loaded."),
    }
}
