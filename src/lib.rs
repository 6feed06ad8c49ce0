// SPDX-License-Identifier: PMPL-1.0-or-later

//! lproj-wire — localized InfoPlist.strings wiring for Xcode projects.
//!
//! This crate edits an existing `project.pbxproj` descriptor so that a
//! localized `InfoPlist.strings` resource exists as a variant group, owns
//! one file reference per locale, and is registered in the build target's
//! Resources phase. Every step is an existence check followed by a
//! conditional insert, so repeated runs never duplicate entries.
//!
//! PIPELINE:
//! 1. **pbxproj**: a minimal reader/writer for the OpenStep plist dialect
//!    Xcode uses for project descriptors.
//! 2. **project**: a typed object model over the descriptor's flat
//!    `objects` table (groups, variant groups, file references, targets,
//!    build phases).
//! 3. **wire**: the ensure pipeline itself — resolve the group, ensure
//!    the variant group, the per-locale references, and the Resources
//!    build-phase entry, then save once.

pub mod locales;
pub mod pbxproj;
pub mod project;
pub mod report;
pub mod wire;
