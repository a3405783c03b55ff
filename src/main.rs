//! hook-audit CLI - organization webhook report generator.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hook_audit::{collect_webhooks, list_all_repositories, write_report, Config, GitHubClient};

/// Collect the webhook URLs of every repository in a GitHub organization.
#[derive(Parser)]
#[command(name = "hook-audit")]
#[command(about = "Report the webhook URLs configured across a GitHub organization")]
struct Cli {
    /// Output path for the JSON report.
    #[arg(long, default_value = "webhooks.json")]
    output: PathBuf,

    /// Maximum number of webhook requests in flight at once.
    #[arg(long, default_value_t = 16)]
    concurrency: usize,

    /// Enable verbose logging.
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("hook_audit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hook_audit=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Missing configuration is reported on stdout, not stderr.
            println!("{e}");
            process::exit(1);
        }
    };

    let client = match GitHubClient::new(&config.token) {
        Ok(client) => client,
        Err(e) => {
            println!("{e}");
            process::exit(1);
        }
    };

    println!("Rate limits before listing repositories");
    print_rate_limits(&client).await;

    let repos = list_all_repositories(&client, &config.org)
        .await
        .with_context(|| format!("Failed to list repositories for {}", config.org))?;
    println!("Found {} repositories in {}", repos.len(), config.org);

    println!("Rate limits before calling webhooks");
    print_rate_limits(&client).await;

    let records = collect_webhooks(&client, &config.org, &repos, cli.concurrency).await;
    println!(
        "Collected webhooks for {} of {} repositories",
        records.len(),
        repos.len()
    );

    println!("Rate limits after calling webhooks");
    print_rate_limits(&client).await;

    write_report(&records, &cli.output)?;
    println!("Webhook information saved to {}", cli.output.display());

    Ok(())
}

/// Print a rate-limit snapshot. Diagnostic only: a failed query is reported
/// on stderr and never fatal.
async fn print_rate_limits(client: &GitHubClient) {
    match client.rate_limits().await {
        Ok(limits) => {
            println!("Rate Limits:");
            println!("Core Limit: {}", limits.core.limit);
            println!("Core Remaining: {}", limits.core.remaining);
            println!("Search Limit: {}", limits.search.limit);
            println!("Search Remaining: {}\n", limits.search.remaining);
        }
        Err(e) => eprintln!("Error getting rate limits: {e}"),
    }
}
