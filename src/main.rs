use blood_compat::config::cli::{Cli, Command};
use blood_compat::utils::logger;
use blood_compat::{health, service_info, QueryService, Result};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting blood-compat CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let service = QueryService::new();

    match run(&cli, &service) {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!("❌ Lookup failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn run(cli: &Cli, service: &QueryService) -> Result<serde_json::Value> {
    let value = match &cli.command {
        Command::List => serde_json::json!(service.list_blood_types()),
        Command::Get { label } => serde_json::json!(service.get_blood_type(label)?),
        Command::Region { name } => serde_json::json!(service.get_regional_distribution(name)?),
        Command::Matrix => serde_json::json!(service.compatibility_matrix()),
        Command::Check { donor, recipient } => {
            let compatible = service.can_donate(donor, recipient)?;
            serde_json::json!({
                "donor": donor,
                "recipient": recipient,
                "compatible": compatible,
            })
        }
        Command::Info => serde_json::json!(service_info()),
        Command::Health => serde_json::json!(health()),
    };

    Ok(value)
}
