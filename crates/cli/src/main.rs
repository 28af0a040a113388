use clap::Parser;
use resinfo_probe_domain::{CliOverrides, OutputFormat, ProbeRecordType};
use tracing::{info, warn};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "resinfo-probe")]
#[command(version)]
#[command(about = "Query DNS resolvers for RESINFO records and compare what they advertise")]
struct Cli {
    /// Resolver addresses (IPv4, IPv6, IPv4:port or [IPv6]:port)
    #[arg(value_name = "RESOLVER")]
    resolvers: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Domain to query
    #[arg(short = 'd', long)]
    domain: Option<String>,

    /// Resolver port used when an address carries none
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in seconds
    #[arg(short = 't', long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Record type to query (RESINFO, TXT); repeatable
    #[arg(short = 'r', long = "record-type", value_name = "TYPE")]
    record_types: Vec<ProbeRecordType>,

    /// Output format (table, json)
    #[arg(short = 'o', long)]
    output: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        resolvers: cli.resolvers,
        domain: cli.domain,
        port: cli.port,
        query_timeout: cli.timeout,
        record_types: (!cli.record_types.is_empty()).then_some(cli.record_types),
        output_format: cli.output,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    if let Some(path) = cli.write_config.as_deref() {
        config.save(path)?;
        info!(path = %path, "Configuration written");
        return Ok(());
    }

    info!("Starting RESINFO probe v{}", env!("CARGO_PKG_VERSION"));

    let (resolvers, rejected) = config.probe.resolver_addresses();
    for error in &rejected {
        warn!(error = %error, "Skipping resolver");
    }
    if resolvers.is_empty() {
        anyhow::bail!("No valid resolver addresses given");
    }

    let services = di::ProbeServices::new(&config);
    let report = services
        .probe_resolvers
        .execute(&resolvers, &config.probe.domain, &config.probe.record_types)
        .await;

    println!("{}", output::render(&report, config.output.format)?);

    Ok(())
}
