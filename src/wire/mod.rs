// SPDX-License-Identifier: PMPL-1.0-or-later

//! The ensure pipeline: resolve the owning group, ensure the variant
//! group, the per-locale file references, and the Resources build-phase
//! entry, then save the descriptor once.
//!
//! Failure behavior is deliberately asymmetric: a missing group stops
//! the run before any mutation (the group is expected to pre-exist),
//! while a missing target only skips the build-phase step — the variant
//! group and its references are still wired and saved.

use crate::locales;
use crate::project::XcodeProject;
use crate::report::{BuildPhaseStatus, LocaleEntry, WireReport};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct WireConfig {
    /// `.xcodeproj` container or `project.pbxproj` file.
    pub project: PathBuf,
    /// Group that owns the localized resource.
    pub group: String,
    /// Variant-group resource name, also the per-locale file name.
    pub variant_group: String,
    pub locales: Vec<String>,
    /// Target whose Resources phase receives the variant group.
    pub target: String,
    /// Dry run: print decisions, skip the save.
    pub check: bool,
    /// Create empty on-disk `.lproj` stub files for missing locales.
    pub create_missing: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            project: PathBuf::from("ios/Runner.xcodeproj"),
            group: "Runner".to_string(),
            variant_group: "InfoPlist.strings".to_string(),
            locales: locales::default_locales(),
            target: "Runner".to_string(),
            check: false,
            create_missing: false,
        }
    }
}

#[derive(Debug)]
pub enum WireOutcome {
    /// Pipeline ran to completion; the report records every decision.
    Updated(WireReport),
    /// The owning group does not exist. Nothing was mutated or saved.
    GroupNotFound { group: String },
}

/// Runs the whole pipeline against the configured project.
pub fn run(config: &WireConfig) -> Result<WireOutcome> {
    let mut project = XcodeProject::open(&config.project)?;

    let group_id = match project.find_group_path(&config.group)? {
        Some(id) => id,
        None => {
            return Ok(WireOutcome::GroupNotFound {
                group: config.group.clone(),
            })
        }
    };

    let mut report = WireReport::new(&config.project, &config.group, &config.variant_group);

    let variant_group_id = match project.find_variant_group(&group_id, &config.variant_group) {
        Some(id) => id,
        None => {
            report.variant_group_created = true;
            project.new_variant_group(&group_id, &config.variant_group)?
        }
    };

    for locale in &config.locales {
        let rel_path = locales::lproj_path(locale, &config.variant_group);
        let exists = project
            .children_ids(&variant_group_id)
            .iter()
            .any(|child| project.file_reference_path(child) == Some(rel_path.as_str()));
        if exists {
            println!("{} already exists in {}", locale, config.variant_group);
        } else {
            project.new_file_reference(&variant_group_id, &rel_path, locale)?;
            println!("Added {} to {}", locale, config.variant_group);
        }
        report.locales.push(LocaleEntry {
            locale: locale.clone(),
            path: rel_path,
            added: !exists,
        });
    }

    match project.target_named(&config.target) {
        Some(target_id) => {
            let phase_id = project.resources_build_phase(&target_id)?;
            if project.phase_references_file(&phase_id, &variant_group_id) {
                println!("{} already in Resources build phase", config.variant_group);
                report.build_phase = BuildPhaseStatus::AlreadyPresent;
            } else {
                project.add_file_to_phase(&phase_id, &variant_group_id)?;
                println!("Added {} to Resources build phase", config.variant_group);
                report.build_phase = BuildPhaseStatus::Added;
            }
        }
        // Missing target: skip registration, no message. The group and
        // references above are still wired and saved.
        None => report.build_phase = BuildPhaseStatus::TargetMissing,
    }

    for locale in &config.locales {
        if project.ensure_known_region(locale)? {
            report.known_regions_added.push(locale.clone());
        }
    }

    if config.create_missing {
        report.stub_files_created = create_stub_files(&project, &group_id, config)?;
    }

    if !config.check {
        project.save()?;
        report.saved = true;
    }

    Ok(WireOutcome::Updated(report))
}

/// Creates empty `<locale>.lproj/<name>` files on disk for references
/// that would otherwise dangle. Existing files are left untouched.
fn create_stub_files(
    project: &XcodeProject,
    group_id: &str,
    config: &WireConfig,
) -> Result<Vec<PathBuf>> {
    let folder = match project.group_folder(group_id) {
        Some(folder) => folder,
        None => return Ok(Vec::new()),
    };
    let mut created = Vec::new();
    for locale in &config.locales {
        let path = folder.join(locales::lproj_path(locale, &config.variant_group));
        if path.exists() {
            continue;
        }
        if config.check {
            created.push(path);
            continue;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(&path, "").with_context(|| format!("writing {}", path.display()))?;
        println!("Created {}", path.display());
        created.push(path);
    }
    Ok(created)
}
