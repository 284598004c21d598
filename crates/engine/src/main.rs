//! Sanitizer CLI: reads a raw parameter JSON file and prints the canonical
//! kernel request record. Used to debug the JS/wasm contract without a
//! browser in the loop.

use std::io::Read;

use fitting_engine::kernel::kernel_request_json;
use shared::{sanitize, RawAdapterParams};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitting_engine=info".into()),
        )
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: fitting-engine <params.json | ->");
            std::process::exit(1);
        }
    };

    let json = match read_input(&path) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to read {path}: {e}");
            std::process::exit(1);
        }
    };

    // Unknown labels and out-of-range numbers are corrected by sanitize;
    // only structurally broken JSON is an error here.
    let raw: RawAdapterParams = match serde_json::from_str(&json) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Failed to parse params JSON from {path}: {e}");
            std::process::exit(1);
        }
    };

    let config = sanitize(&raw);
    match kernel_request_json(&config) {
        Ok(record) => println!("{record}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}
