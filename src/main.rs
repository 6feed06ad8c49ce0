// SPDX-License-Identifier: PMPL-1.0-or-later

//! lproj-wire: wire localized InfoPlist.strings into an Xcode project.
//!
//! A bare invocation reproduces the classic Flutter setup: it opens
//! `ios/Runner.xcodeproj`, ensures an `InfoPlist.strings` variant group
//! under the `Runner` group with references for `en`, `zh-Hans`, and
//! `ar`, registers the group in the `Runner` target's Resources build
//! phase, and saves. Rerunning is always safe; nothing is duplicated.

use anyhow::Result;
use clap::Parser;
use colored::*;
use lproj_wire::locales;
use lproj_wire::report::{self, ReportOutputFormat};
use lproj_wire::wire::{self, WireConfig, WireOutcome};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lproj-wire")]
#[command(version)]
#[command(about = "Wires localized InfoPlist.strings variant groups into an Xcode project")]
struct Cli {
    /// Xcode project to update (.xcodeproj directory or project.pbxproj file)
    #[arg(long, default_value = "ios/Runner.xcodeproj")]
    project: PathBuf,

    /// Group that owns the localized resource
    #[arg(long, default_value = "Runner")]
    group: String,

    /// Variant-group resource name
    #[arg(long, default_value = "InfoPlist.strings")]
    variant_group: String,

    /// Locale tags to wire
    #[arg(long, value_delimiter = ',', default_value = "en,zh-Hans,ar")]
    locales: Vec<String>,

    /// Build target whose Resources phase receives the variant group
    #[arg(long, default_value = "Runner")]
    target: String,

    /// Print decisions without saving the project
    #[arg(long)]
    check: bool,

    /// Create empty .lproj stub files on disk for missing locales
    #[arg(long)]
    create_missing: bool,

    /// Write a machine-readable change summary to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Change summary format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportOutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    for tag in &cli.locales {
        if !locales::is_valid_locale_tag(tag) {
            anyhow::bail!("invalid locale tag '{}'", tag);
        }
    }

    let config = WireConfig {
        project: cli.project,
        group: cli.group,
        variant_group: cli.variant_group,
        locales: cli.locales,
        target: cli.target,
        check: cli.check,
        create_missing: cli.create_missing,
    };

    match wire::run(&config)? {
        WireOutcome::GroupNotFound { group } => {
            println!("{}", format!("{} group not found!", group).red());
            process::exit(1);
        }
        WireOutcome::Updated(summary) => {
            if let Some(path) = &cli.report {
                report::write_report(&summary, path, cli.report_format)?;
                println!("Report saved to: {}", path.display());
            }
            if summary.saved {
                println!("{}", "Successfully updated Xcode project.".green());
            } else {
                println!("{}", "Check mode: project left unmodified.".yellow());
            }
        }
    }

    Ok(())
}
