use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use confsift_extract::{parse_global_files, parse_interface_files, parse_vlan_map};
use confsift_records::ExtractReport;

#[derive(Debug, Parser)]
#[command(name = "config-extract")]
#[command(about = "Extract global and per-interface settings from Cisco-style configs")]
struct Cli {
    /// Device configuration files to extract from.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// VLAN map file with critical/unknown/trusted lists.
    #[arg(long)]
    vlan_map: Option<PathBuf>,

    /// Only run the global settings pass.
    #[arg(long)]
    globals_only: bool,

    /// Only run the interface block pass.
    #[arg(long)]
    interfaces_only: bool,

    /// Print single-line JSON instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.globals_only && cli.interfaces_only {
        bail!("--globals-only and --interfaces-only are mutually exclusive");
    }

    let mut report = ExtractReport::default();

    if !cli.interfaces_only {
        report.global =
            parse_global_files(&cli.files).context("global settings pass failed")?;
    }
    if !cli.globals_only {
        report.interfaces =
            parse_interface_files(&cli.files).context("interface pass failed")?;
    }
    if let Some(path) = &cli.vlan_map {
        report.vlan_map = Some(parse_vlan_map(path).context("vlan map parse failed")?);
    }

    let rendered = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}
