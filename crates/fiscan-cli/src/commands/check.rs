//! Check command - one-off NCM/CEST registry lookup.

use clap::Args;
use console::style;

use fiscan_core::CestValidator;
use fiscan_core::document::rules::{format_cest, format_ncm, is_valid_cest, is_valid_ncm};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// 8-digit NCM commodity code
    ncm: String,

    /// CEST code, dotted or plain
    cest: String,
}

pub fn run(args: CheckArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    if !is_valid_ncm(&args.ncm) {
        anyhow::bail!("'{}' is not an 8-digit NCM code", args.ncm);
    }
    if !is_valid_cest(&args.cest) {
        anyhow::bail!("'{}' is not a 7-digit CEST code", args.cest);
    }

    let config = super::load_config(config_path)?;
    let validator = CestValidator::new(&config.lookup)?;

    if validator.validate(&args.ncm, &args.cest) {
        println!(
            "{} CEST {} is registered for NCM {}",
            style("✓").green(),
            format_cest(&args.cest),
            format_ncm(&args.ncm)
        );
        Ok(())
    } else {
        println!(
            "{} CEST {} not confirmed for NCM {} (unregistered, or the registry was unreachable)",
            style("⚠").yellow(),
            format_cest(&args.cest),
            format_ncm(&args.ncm)
        );
        std::process::exit(1);
    }
}
