//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process;

use seo_audit::config::cli::{
    AnalyzeArgs, AuditArgs, Cli, ClientCommand, Command, ResultFormat, UrlCommand,
};
use seo_audit::initialization::{init_client, init_logger_with};
use seo_audit::{
    export_report, run_audit, AnalysisResult, ClientStore, Config, SchemaTaxonomy, SeoAnalyzer,
    TrackedUrl, RESULT_KEYS,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file (if it exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.global.to_config();

    if let Err(e) = init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")
    {
        eprintln!("seo_audit error: {e:#}");
        process::exit(1);
    }

    if let Err(e) = run(cli.command, config).await {
        eprintln!("seo_audit error: {e:#}");
        process::exit(1);
    }
}

async fn run(command: Command, config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;
    match command {
        Command::Analyze(args) => analyze(args, &config).await,
        Command::Client { action } => client(action, &config),
        Command::Url { action } => url(action, &config),
        Command::Import { file } => {
            let mut store = open_store(&config)?;
            let summary = seo_audit::store::import_csv_path(&mut store, &file)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            println!(
                "✅ Imported {} new clients and {} new URLs ({} rows skipped)",
                summary.new_clients, summary.new_urls, summary.skipped_rows
            );
            Ok(())
        }
        Command::Audit(args) => audit(args, &config).await,
    }
}

fn open_store(config: &Config) -> Result<ClientStore> {
    ClientStore::open(&config.data_file).with_context(|| {
        format!(
            "Failed to open data file: {}",
            config.data_file.display()
        )
    })
}

async fn analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let analyzer = SeoAnalyzer::new(client, SchemaTaxonomy::default());
    let result = analyzer
        .analyze(&args.url, &args.keyword, &args.secondary)
        .await;

    match args.format {
        ResultFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        ResultFormat::Plain => print_plain(&result)?,
    }
    Ok(())
}

fn print_plain(result: &AnalysisResult) -> Result<()> {
    let value = serde_json::to_value(result)?;
    for key in RESULT_KEYS {
        let rendered = match &value[*key] {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        };
        println!("{key}: {rendered}");
    }
    Ok(())
}

fn client(action: ClientCommand, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    match action {
        ClientCommand::Add { name } => {
            if name.trim().is_empty() {
                bail!("Client name must not be empty");
            }
            if store.add_client(&name)? {
                println!("✅ Added client {name}");
            } else {
                println!("Client {name} already exists");
            }
        }
        ClientCommand::Remove { name } => {
            if !store.remove_client(&name)? {
                bail!("Unknown client: {name}");
            }
            println!("Removed client {name}");
        }
        ClientCommand::List => {
            if store.clients().is_empty() {
                println!("No clients tracked in {}", store.path().display());
            }
            for (name, urls) in store.clients() {
                println!("{name} ({} URLs)", urls.len());
                for (index, tracked) in urls.iter().enumerate() {
                    println!(
                        "  [{index}] {} | {} | {} | last audit: {} | keyword: {}",
                        tracked.url,
                        tracked.status,
                        tracked.priority,
                        tracked.last_audit,
                        tracked.primary_keyword
                    );
                }
            }
            println!(
                "{} URLs tracked, {} audited",
                store.total_urls(),
                store.audited_urls()
            );
        }
    }
    Ok(())
}

fn url(action: UrlCommand, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    match action {
        UrlCommand::Add {
            client,
            url,
            keyword,
            secondary,
        } => {
            let secondary = secondary
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            let tracked = TrackedUrl::new(url.trim(), keyword.trim(), secondary);
            if store.urls(&client).is_none() {
                bail!("Unknown client: {client}");
            }
            if store.add_url(&client, tracked)? {
                println!("✅ Tracking {} for {client}", url.trim());
            } else {
                println!("{client} already tracks {}", url.trim());
            }
        }
        UrlCommand::Remove { client, index } => {
            let removed = store.remove_url(&client, index)?;
            println!("Removed {} from {client}", removed.url);
        }
        UrlCommand::SetStatus {
            client,
            index,
            status,
        } => {
            store.set_status(&client, index, status)?;
            println!("Status of [{index}] set to {status}");
        }
        UrlCommand::SetPriority {
            client,
            index,
            priority,
        } => {
            store.set_priority(&client, index, priority)?;
            println!("Priority of [{index}] set to {priority}");
        }
        UrlCommand::SetNotes {
            client,
            index,
            notes,
        } => {
            store.set_notes(&client, index, &notes)?;
            println!("Notes of [{index}] updated");
        }
    }
    Ok(())
}

async fn audit(args: AuditArgs, config: &Config) -> Result<()> {
    let mut store = open_store(config)?;
    let report = run_audit(config, &mut store, args.client.as_deref()).await?;
    let written = export_report(&report.rows, args.format, args.output.as_deref())
        .context("Failed to write report")?;

    // stdout carries the report itself; keep the summary on stderr
    eprintln!(
        "✅ Audited {} URL{} ({} succeeded, {} failed) in {:.1}s",
        report.total,
        if report.total == 1 { "" } else { "s" },
        report.succeeded,
        report.failed,
        report.elapsed_seconds
    );
    if let Some(path) = &args.output {
        eprintln!("{written} rows written to {}", path.display());
    }
    Ok(())
}
