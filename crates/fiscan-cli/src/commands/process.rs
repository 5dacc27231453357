//! Process command - analyze a single fiscal XML file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use fiscan_core::CestValidator;
use fiscan_core::document::rules::{format_cest, format_ncm};
use fiscan_core::models::document::{FiscalDocument, LineItem};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input XML file (NF-e or CT-e)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Check each item's NCM/CEST pair against the registry service
    #[arg(long)]
    lookup: bool,

    /// Also write a PDF report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
    /// CSV line-item table
    Csv,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Reading document...");
    pb.set_position(10);
    let raw = fs::read(&args.input)?;

    pb.set_message("Extracting fields...");
    pb.set_position(30);
    let mut doc = fiscan_core::parse(&raw)?;

    if args.lookup && !doc.items.is_empty() {
        pb.set_message("Checking classifications...");
        pb.set_position(60);
        let validator = CestValidator::new(&config.lookup)?;
        validator.annotate(&mut doc);
    }

    pb.set_position(100);
    pb.finish_and_clear();

    let output = format_document(&doc, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        print!("{output}");
    }

    if let Some(report_path) = &args.report {
        let bytes = fiscan_core::to_report(&doc)?;
        fs::write(report_path, bytes)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            report_path.display()
        );
    }

    debug!(items = doc.items.len(), "processing complete");

    Ok(())
}

fn format_document(doc: &FiscalDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(doc)?),
        OutputFormat::Csv => Ok(String::from_utf8(fiscan_core::to_spreadsheet(doc)?)?),
        OutputFormat::Text => Ok(format_text(doc)),
    }
}

fn format_text(doc: &FiscalDocument) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", doc.doc_type.label()));
    output.push_str(&format!("Issuer: {}\n", doc.issuer));
    output.push_str(&format!("Recipient: {}\n", doc.recipient));
    output.push_str(&format!("Access key: {}\n", doc.access_key));

    if !doc.items.is_empty() {
        output.push('\n');
        output.push_str("Items:\n");
        for item in &doc.items {
            output.push_str(&format!(
                "  {}. {} | NCM {} | CEST {} | CFOP {} | ICMS {} | ST {} | single-stage {} | check {}\n",
                item.item_index,
                item.description,
                format_ncm(&item.ncm),
                format_cest(&item.cest),
                item.cfop,
                item.icms_rate,
                LineItem::flag_label(item.tax_substitution),
                LineItem::flag_label(item.single_stage),
                item.validation_label(),
            ));
        }
    }

    output
}
