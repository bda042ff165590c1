//! Client Data Compiler - command line entry point
//!
//! Validates and formats client records locally, and drives the remote API
//! for uploads, bulk re-validation, statistics and exports. Results are
//! printed as JSON on stdout; logs go to stderr.

use anyhow::{bail, Context, Result};
use client_data_compiler::client::{AsyncApiClient, AsyncApiClientImpl};
use client_data_compiler::report::{describe_errors, revalidate};
use client_data_compiler::upload::format_file_size;
use client_data_compiler::{ApiClient, ClientRecord, Config};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: client-data-compiler <command> [args]

Commands:
  validate [PATH]      Validate records from a JSON file (or stdin)
  format [PATH]        Normalize records from a JSON file (or stdin)
  upload PATH          Upload an Excel workbook and print the summary
  stats                Print stored statistics
  validate-all         Re-validate every stored client on the server
  export [FILENAME]    Export stored clients to an Excel file";

/// Input accepted by `validate` and `format`: one record or an array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordInput {
    Many(Vec<ClientRecord>),
    One(ClientRecord),
}

impl RecordInput {
    fn into_vec(self) -> Vec<ClientRecord> {
        match self {
            RecordInput::Many(records) => records,
            RecordInput::One(record) => vec![record],
        }
    }
}

fn read_records(path: Option<&str>) -> Result<Vec<ClientRecord>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    let input: RecordInput = serde_json::from_str(&raw).context("parsing client records")?;
    Ok(input.into_vec())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn api_client(config: &Config) -> Arc<dyn AsyncApiClient> {
    info!("Using API at {}", config.api_url);
    Arc::new(AsyncApiClientImpl::new(ApiClient::new(config)))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);
    let arg = args.get(1).map(String::as_str);

    match command {
        Some("validate") => {
            let report = revalidate(&read_records(arg)?);
            for row in report.invalid_rows() {
                error!(
                    "Row {}: {}",
                    row.row,
                    row.result.labeled_messages().join("; ")
                );
            }
            print_json(&report)?;
            if report.invalid > 0 {
                std::process::exit(1);
            }
        }
        Some("format") => {
            let records: Vec<ClientRecord> = read_records(arg)?
                .iter()
                .map(ClientRecord::normalized)
                .collect();
            print_json(&records)?;
        }
        Some("upload") => {
            let Some(path) = arg else {
                bail!("upload needs a file path\n\n{}", USAGE);
            };
            let bytes = std::fs::read(path).with_context(|| format!("reading {}", path))?;
            info!("Uploading {} ({})", path, format_file_size(bytes.len() as u64));

            let filename = std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(path);
            let summary = api_client(&config).upload_file(filename, bytes).await?;
            for client in summary.preview.iter().filter(|c| !c.is_valid) {
                error!(
                    "Client {}: {}",
                    client.record.key,
                    describe_errors(&client.errors).join("; ")
                );
            }
            print_json(&summary)?;
        }
        Some("stats") => {
            let stats = api_client(&config).get_stats().await?;
            print_json(&stats)?;
        }
        Some("validate-all") => {
            let clients = api_client(&config).validate_all().await?;
            let mismatched = clients.iter().filter(|c| !c.verdict_matches_local()).count();
            if mismatched > 0 {
                error!("{} client(s) judged differently by the server", mismatched);
            }
            print_json(&clients)?;
        }
        Some("export") => {
            let client = api_client(&config);
            let filename = arg.unwrap_or("clientes_export.xlsx");
            let export = client.export_to_excel(filename).await?;
            let url = export
                .file_url
                .clone()
                .unwrap_or_else(|| client.file_url(&export.file_path));
            print_json(&serde_json::json!({
                "file_path": export.file_path,
                "file_url": url,
            }))?;
        }
        _ => bail!("{}", USAGE),
    }

    Ok(())
}
