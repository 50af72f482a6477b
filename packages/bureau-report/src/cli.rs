//! Command-line interface for bureau report extraction.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::DEFAULT_MAX_UPLOAD_SIZE;
use crate::error::{ReportError, Result};
use crate::extract::parse_report;
use crate::intake::read_document;
use crate::output::{render, render_report, write_report, OutputFormat};
use crate::tree::parse_document;
use crate::types::ExtractedReport;

/// Bureau Report - Extract a flat credit report from Experian XML.
#[derive(Parser)]
#[command(name = "bureau-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a report and print or save it.
    Extract {
        /// Experian INProfileResponse XML file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum accepted file size in bytes (default: 10 MB)
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_SIZE)]
        max_size: u64,
    },

    /// Print a readable summary of a report.
    Inspect {
        /// Experian INProfileResponse XML file
        file: PathBuf,

        /// Maximum accepted file size in bytes (default: 10 MB)
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_SIZE)]
        max_size: u64,
    },

    /// Dump the generic element tree, for reports whose layout is unfamiliar.
    Tree {
        /// XML file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Maximum accepted file size in bytes (default: 10 MB)
        #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_SIZE)]
        max_size: u64,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            format,
            output,
            max_size,
        } => extract_command(&file, format, output.as_deref(), max_size),
        Commands::Inspect { file, max_size } => inspect_command(&file, max_size),
        Commands::Tree {
            file,
            format,
            max_size,
        } => tree_command(&file, format, max_size),
    }
}

/// Read, validate and extract a report from a file.
fn load_report(file: &Path, max_size: u64) -> Result<ExtractedReport> {
    let xml = read_document(file, max_size)?;
    parse_report(&xml)
}

/// Execute the extract command.
fn extract_command(
    file: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    max_size: u64,
) -> Result<()> {
    if let Some(parent) = output.and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    let report = load_report(file, max_size)?;

    match output {
        Some(path) => {
            write_report(&report, format, path)?;
            eprintln!("{} {}", style("Saved to:").green().bold(), path.display());
        }
        None => print!("{}", render_report(&report, format)?),
    }

    Ok(())
}

/// Execute the inspect command.
fn inspect_command(file: &Path, max_size: u64) -> Result<()> {
    let report = load_report(file, max_size)?;
    let summary = &report.report_summary;

    println!("{} {}", style("Report for").bold(), style(&report.name).cyan());
    println!();
    println!("  Mobile: {}", display_or_dash(&report.mobile_phone));
    println!("  PAN: {}", display_or_dash(&report.pan));
    println!("  Credit score: {}", style(report.credit_score).green().bold());
    println!();
    println!(
        "  Accounts: {} total, {} active, {} closed",
        summary.total_accounts, summary.active_accounts, summary.closed_accounts
    );
    println!(
        "  Balance: {:.2} (secured {:.2}, unsecured {:.2})",
        summary.current_balance_amount,
        summary.secured_accounts_amount,
        summary.unsecured_accounts_amount
    );
    println!(
        "  Enquiries in last 7 days: {}",
        summary.last_7_days_credit_enquiries
    );

    if report.has_accounts() {
        println!();
        println!(
            "{} (overdue {:.2})",
            style("Credit accounts").bold(),
            report.total_overdue()
        );
        for account in &report.credit_accounts {
            let overdue = if account.amount_overdue > 0.0 {
                style(format!("{:.2}", account.amount_overdue)).red().to_string()
            } else {
                format!("{:.2}", account.amount_overdue)
            };
            println!(
                "  {} [{}] {}: balance {:.2}, overdue {}",
                display_or_dash(&account.bank),
                account.account_type,
                display_or_dash(&account.account_number),
                account.current_balance,
                overdue
            );
        }
    }

    if let Some(address) = report.address() {
        println!();
        println!("{}", style("Address").bold());
        println!("  {}", address.address_line);
        println!("  {} {} {}", address.city, address.state, address.pincode);
    }

    Ok(())
}

/// Execute the tree command.
fn tree_command(file: &Path, format: OutputFormat, max_size: u64) -> Result<()> {
    let xml = read_document(file, max_size)?;
    let tree = parse_document(&xml)?;
    print!("{}", render(&tree, format)?);
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
