// SPDX-License-Identifier: PMPL-1.0-or-later

//! Machine-readable summary of one wiring run.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One locale decision: added on this run, or already wired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub locale: String,
    pub path: String,
    pub added: bool,
}

/// Outcome of the build-phase registration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuildPhaseStatus {
    Added,
    AlreadyPresent,
    /// The named target does not exist; registration was skipped.
    TargetMissing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireReport {
    pub created_at: String,
    pub project: PathBuf,
    pub group: String,
    pub variant_group: String,
    pub variant_group_created: bool,
    pub locales: Vec<LocaleEntry>,
    pub build_phase: BuildPhaseStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_regions_added: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stub_files_created: Vec<PathBuf>,
    pub saved: bool,
}

impl WireReport {
    pub fn new(project: &Path, group: &str, variant_group: &str) -> Self {
        Self {
            created_at: chrono::Utc::now().to_rfc3339(),
            project: project.to_path_buf(),
            group: group.to_string(),
            variant_group: variant_group.to_string(),
            variant_group_created: false,
            locales: Vec::new(),
            build_phase: BuildPhaseStatus::TargetMissing,
            known_regions_added: Vec::new(),
            stub_files_created: Vec::new(),
            saved: false,
        }
    }

    pub fn locales_added(&self) -> usize {
        self.locales.iter().filter(|entry| entry.added).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, report: &WireReport) -> Result<String> {
        match self {
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

/// Writes the report to `path`, creating parent directories as needed.
pub fn write_report(report: &WireReport, path: &Path, format: ReportOutputFormat) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report parent {}", parent.display()))?;
        }
    }
    let content = format.serialize(report)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
