use blueprint_check::utils::{logger, validation::Validate};
use blueprint_check::{Blueprint, Cli, Result, BLUEPRINT_FILE};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Checking Blueprint structure of {}", BLUEPRINT_FILE);

    match run() {
        Ok(()) => {
            tracing::info!("✅ Blueprint check passed");
            println!("Blueprint structure OK");
        }
        Err(e) => {
            tracing::error!("❌ Blueprint check failed: {}", e);
            eprintln!("Validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let blueprint = Blueprint::from_file(BLUEPRINT_FILE)?;
    blueprint.validate()?;

    match blueprint.primary_service() {
        Ok(service) => tracing::info!(
            "📋 service '{}' (type {}, runtime {})",
            service.name,
            service.r#type,
            service.runtime
        ),
        Err(e) => tracing::debug!("primary service has no typed view: {}", e),
    }

    // Only the first entry is gated; say so when there are more.
    let unchecked = blueprint.service_count().saturating_sub(1);
    if unchecked > 0 {
        tracing::info!("🔍 {} additional service entries not checked", unchecked);
    }

    Ok(())
}
