use clap::{Parser, Subcommand};
use ferrous_doh_domain::{CliOverrides, DohProvider};
use std::process::ExitCode;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - TXT and A lookups over DNS-over-HTTPS JSON APIs")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DoH provider URL; repeat to build a list that replaces the configured one
    #[arg(short = 'p', long = "provider", value_name = "URL")]
    providers: Vec<DohProvider>,

    /// Per-provider request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve and decode the TXT payload of a host
    Txt { host: String },

    /// Resolve the A records of a domain across all providers
    A { domain: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        providers: cli.providers,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(&config, cli.config.as_deref());

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let resolver = di::build_resolver(&config);

    match cli.command {
        Command::Txt { host } => {
            let Some(record) = resolver.lookup_txt(&host, None).await else {
                eprintln!("No TXT record found for {}", host);
                return Ok(ExitCode::FAILURE);
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                for (key, values) in record.iter() {
                    println!("{}={}", key, values.join(","));
                }
            }
        }
        Command::A { domain } => {
            let ips = resolver.lookup_a_records(&domain, None).await;
            if ips.is_empty() {
                eprintln!("No A records found for {}", domain);
                return Ok(ExitCode::FAILURE);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ips)?);
            } else {
                for ip in ips.iter() {
                    println!("{}", ip);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
