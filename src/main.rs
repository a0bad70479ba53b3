use std::path::Path;
use std::process;

use partscout::cli::{parse_bom_part, Args, Command};
use partscout::config;
use partscout::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse_args();

    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(Path::new("."))?,
    };
    let oracle_config = OracleConfig::resolve(config_file)?;

    let transport = GenerativeTransport::new(&oracle_config)?;
    let oracle = OracleClient::new(transport);
    let formatter = MarkdownFormatter::new();

    match args.command {
        Command::Find { query } => {
            let use_case = FindComponentUseCase::new(oracle);
            match use_case.execute(&query).await {
                Ok(response) => {
                    println!(
                        "# {} ({})\n",
                        response.component.part_number, response.component.manufacturer
                    );
                    if !response.component.description.is_empty() {
                        println!("{}\n", response.component.description);
                    }
                    println!("{}", formatter.format_comparison(&response.table));
                    for alternative in &response.alternatives {
                        println!(
                            "- **{}**: {}",
                            alternative.component.part_number, alternative.justification
                        );
                    }
                }
                Err(error) => {
                    tracing::error!(kind = %error.kind(), details = %error, "component resolution failed");
                    anyhow::bail!("{}", error.user_message());
                }
            }
        }

        Command::Bulk { parts } => {
            let use_case = BulkResolutionUseCase::new(oracle, StderrProgressReporter::new());
            let report = use_case.run(&parts).await;

            for item in &report.items {
                println!("## {}\n", item.query);
                match &item.state {
                    BulkItemState::Success {
                        component,
                        alternatives,
                    } => {
                        let table = build_comparison_table(component, alternatives);
                        println!("{}", formatter.format_comparison(&table));
                    }
                    BulkItemState::Error { message } => println!("> {}\n", message),
                    BulkItemState::Pending | BulkItemState::Loading => {
                        println!("> Not processed\n");
                    }
                }
            }
            eprintln!(
                "{} succeeded, {} failed out of {}",
                report.succeeded(),
                report.failed(),
                report.items.len()
            );
        }

        Command::BomHealth { parts, batch_size } => {
            // Upstream parsing problems pass through as FILE_ERROR.
            let queries = parts
                .iter()
                .map(|raw| parse_bom_part(raw))
                .collect::<std::result::Result<Vec<BomPartQuery>, String>>()
                .map_err(|message| ClassifiedError::File { details: message })?;

            let use_case = BomHealthCheckUseCase::new(oracle, StderrProgressReporter::new())
                .with_batch_size(batch_size);
            let records = use_case.run(&queries).await;
            println!("{}", formatter.format_bom_health(&records));
        }
    }

    Ok(())
}
