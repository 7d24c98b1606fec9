//! Simplifies the claims of an entity JSON file.
//!
//! ```text
//! cargo run --example simplify_file -- Q2112.json '{"keepQualifiers": true, "timeConverter": "simple-day"}'
//! RUST_LOG=wikibase_simplify=trace cargo run --example simplify_file -- Q2112.json
//! ```
//!
//! Accepts a single entity (`{"id": ..., "claims": {...}}`) or an API
//! response wrapping several (`{"entities": {"Q2112": {...}}}`).

use std::fs;
use std::process::ExitCode;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wikibase_simplify::{simplify_claims, ClaimsTable, SimplifyOptions};

#[derive(Deserialize)]
struct Entity {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    claims: ClaimsTable,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Entities { entities: FxHashMap<String, Entity> },
    Single(Entity),
}

fn run(path: &str, options: &SimplifyOptions) -> Result<serde_json::Value, String> {
    let data = fs::read_to_string(path).map_err(|e| format!("failed to read {path}: {e}"))?;
    let document: Document =
        serde_json::from_str(&data).map_err(|e| format!("failed to parse {path}: {e}"))?;

    let entities: Vec<(String, Entity)> = match document {
        Document::Entities { entities } => entities.into_iter().collect(),
        Document::Single(entity) => {
            vec![(entity.id.clone().unwrap_or_else(|| "entity".to_string()), entity)]
        }
    };

    let mut out = serde_json::Map::new();
    for (id, entity) in entities {
        let simplified = simplify_claims(&entity.claims, options).map_err(|e| format!("{id}: {e}"))?;
        info!(entity = %id, properties = simplified.len(), "simplified");
        let value = serde_json::to_value(simplified).map_err(|e| format!("{id}: {e}"))?;
        out.insert(id, value);
    }
    Ok(serde_json::Value::Object(out))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("simplify_file=info,wikibase_simplify=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: simplify_file <entity.json> [options-json]");
        return ExitCode::FAILURE;
    };

    let options = match args.next() {
        Some(raw) => match serde_json::from_str::<SimplifyOptions>(&raw) {
            Ok(options) => options,
            Err(e) => {
                error!(error = %e, "invalid options");
                return ExitCode::FAILURE;
            }
        },
        None => SimplifyOptions::default(),
    };

    match run(&path, &options) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => {
                println!("{pretty}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "failed to serialize output");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!(error = %e, "simplification failed");
            ExitCode::FAILURE
        }
    }
}
