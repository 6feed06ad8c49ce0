// SPDX-License-Identifier: PMPL-1.0-or-later

//! Typed object model over a parsed project descriptor.
//!
//! A descriptor is one big dictionary whose `objects` entry maps
//! 24-hex-digit object IDs to dictionaries; every cross-reference
//! (group children, build phases, build-file entries) is an ID string.
//! `XcodeProject` keeps the whole tree in memory, mutates it in place,
//! and writes it back in a single terminal `save()`.
//!
//! Group lookups use the display-name rule: a group matches a path
//! segment by its `name` attribute, falling back to `path`. Build-phase
//! membership is checked by object identity (the build-file entry's
//! `fileRef` ID), never by path.

use crate::pbxproj::{self, Dict, Value};
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ISA_GROUP: &str = "PBXGroup";
pub const ISA_VARIANT_GROUP: &str = "PBXVariantGroup";
pub const ISA_FILE_REFERENCE: &str = "PBXFileReference";
pub const ISA_NATIVE_TARGET: &str = "PBXNativeTarget";
pub const ISA_RESOURCES_PHASE: &str = "PBXResourcesBuildPhase";
pub const ISA_BUILD_FILE: &str = "PBXBuildFile";
pub const ISA_PROJECT: &str = "PBXProject";

pub struct XcodeProject {
    pbxproj_path: PathBuf,
    root: Dict,
}

impl XcodeProject {
    /// Opens a descriptor from either a `.xcodeproj` container directory
    /// or a direct path to its `project.pbxproj` file.
    pub fn open(path: &Path) -> Result<Self> {
        let pbxproj_path = resolve_descriptor_path(path);
        let raw = read_descriptor_text(&pbxproj_path)?;
        let root = match pbxproj::parse_document(&raw)
            .with_context(|| format!("parsing {}", pbxproj_path.display()))?
        {
            Value::Dict(entries) => entries,
            _ => bail!(
                "{}: descriptor root is not a dictionary",
                pbxproj_path.display()
            ),
        };
        let project = Self { pbxproj_path, root };
        project.objects()?;
        project.project_object()?;
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        &self.pbxproj_path
    }

    /// Directory that group `path` attributes are relative to (the
    /// parent of the `.xcodeproj` container).
    pub fn source_root(&self) -> Option<&Path> {
        self.pbxproj_path.parent()?.parent()
    }

    pub fn serialize(&self) -> String {
        pbxproj::write_document(&self.root)
    }

    /// Overwrites the descriptor on disk. Single write, no rollback.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.pbxproj_path, self.serialize())
            .with_context(|| format!("writing {}", self.pbxproj_path.display()))
    }

    fn objects(&self) -> Result<&Dict> {
        self.root
            .get("objects")
            .and_then(Value::as_dict)
            .ok_or_else(|| anyhow!("descriptor has no objects table"))
    }

    fn objects_mut(&mut self) -> Result<&mut Dict> {
        self.root
            .get_mut("objects")
            .and_then(Value::as_dict_mut)
            .ok_or_else(|| anyhow!("descriptor has no objects table"))
    }

    pub fn object(&self, id: &str) -> Option<&Dict> {
        self.objects().ok()?.get(id)?.as_dict()
    }

    pub fn object_ids(&self) -> Vec<String> {
        self.objects()
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn object_mut(&mut self, id: &str) -> Option<&mut Dict> {
        self.objects_mut().ok()?.get_mut(id)?.as_dict_mut()
    }

    pub fn isa(&self, id: &str) -> Option<&str> {
        attr(self.object(id)?, "isa")
    }

    pub fn root_object_id(&self) -> Result<String> {
        self.root
            .get("rootObject")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("descriptor has no rootObject reference"))
    }

    fn project_object(&self) -> Result<&Dict> {
        let id = self.root_object_id()?;
        self.object(&id)
            .filter(|object| attr(object, "isa") == Some(ISA_PROJECT))
            .ok_or_else(|| anyhow!("rootObject {} is not a PBXProject", id))
    }

    fn project_object_mut(&mut self) -> Result<&mut Dict> {
        let id = self.root_object_id()?;
        self.object_mut(&id)
            .ok_or_else(|| anyhow!("rootObject {} missing from objects table", id))
    }

    pub fn main_group_id(&self) -> Result<String> {
        attr(self.project_object()?, "mainGroup")
            .map(str::to_string)
            .ok_or_else(|| anyhow!("project object has no mainGroup"))
    }

    pub fn children_ids(&self, group_id: &str) -> Vec<String> {
        self.object(group_id)
            .and_then(|object| object.get("children"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display name of a tree node: `name` attribute, else `path`.
    pub fn display_name(&self, id: &str) -> Option<&str> {
        let object = self.object(id)?;
        attr(object, "name").or_else(|| attr(object, "path"))
    }

    /// Finds a direct child group of `parent_id` matching one path
    /// segment by display name.
    pub fn find_subgroup(&self, parent_id: &str, segment: &str) -> Option<String> {
        self.children_ids(parent_id).into_iter().find(|child| {
            self.isa(child) == Some(ISA_GROUP) && self.display_name(child) == Some(segment)
        })
    }

    /// Walks a `/`-separated subpath from the main group. `Ok(None)`
    /// means some segment did not resolve.
    pub fn find_group_path(&self, subpath: &str) -> Result<Option<String>> {
        let mut current = self.main_group_id()?;
        for segment in subpath.split('/').filter(|segment| !segment.is_empty()) {
            match self.find_subgroup(&current, segment) {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// Looks for a variant group with the given name among the immediate
    /// children of `group_id`.
    pub fn find_variant_group(&self, group_id: &str, name: &str) -> Option<String> {
        self.children_ids(group_id).into_iter().find(|child| {
            self.isa(child) == Some(ISA_VARIANT_GROUP)
                && self.object(child).and_then(|object| attr(object, "name")) == Some(name)
        })
    }

    /// Creates an empty variant group and attaches it under `group_id`.
    pub fn new_variant_group(&mut self, group_id: &str, name: &str) -> Result<String> {
        let id = self.generate_object_id()?;
        let mut object = Dict::new();
        object.insert("isa".into(), Value::string(ISA_VARIANT_GROUP));
        object.insert("children".into(), Value::Array(Vec::new()));
        object.insert("name".into(), Value::string(name));
        object.insert("sourceTree".into(), Value::string("<group>"));
        self.objects_mut()?.insert(id.clone(), Value::Dict(object));
        self.append_child(group_id, &id)?;
        Ok(id)
    }

    /// Relative `path` of a file reference, or `None` when the object is
    /// not a file reference.
    pub fn file_reference_path(&self, id: &str) -> Option<&str> {
        let object = self.object(id)?;
        if attr(object, "isa") != Some(ISA_FILE_REFERENCE) {
            return None;
        }
        attr(object, "path")
    }

    /// Creates a `.strings` file reference inside a variant group. The
    /// display name carries the locale tag, the path the
    /// `<tag>.lproj/...` location.
    pub fn new_file_reference(&mut self, group_id: &str, path: &str, name: &str) -> Result<String> {
        let id = self.generate_object_id()?;
        let mut object = Dict::new();
        object.insert("isa".into(), Value::string(ISA_FILE_REFERENCE));
        object.insert("lastKnownFileType".into(), Value::string("text.plist.strings"));
        object.insert("name".into(), Value::string(name));
        object.insert("path".into(), Value::string(path));
        object.insert("sourceTree".into(), Value::string("<group>"));
        self.objects_mut()?.insert(id.clone(), Value::Dict(object));
        self.append_child(group_id, &id)?;
        Ok(id)
    }

    /// Exact-name lookup over native targets.
    pub fn target_named(&self, name: &str) -> Option<String> {
        let objects = self.objects().ok()?;
        objects.iter().find_map(|(id, value)| {
            let object = value.as_dict()?;
            if attr(object, "isa") == Some(ISA_NATIVE_TARGET) && attr(object, "name") == Some(name)
            {
                Some(id.clone())
            } else {
                None
            }
        })
    }

    /// Returns the target's Resources build phase, creating an empty one
    /// when the target has none yet.
    pub fn resources_build_phase(&mut self, target_id: &str) -> Result<String> {
        let phase_ids: Vec<String> = self
            .object(target_id)
            .and_then(|object| object.get("buildPhases"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        for phase_id in phase_ids {
            if self.isa(&phase_id) == Some(ISA_RESOURCES_PHASE) {
                return Ok(phase_id);
            }
        }

        let id = self.generate_object_id()?;
        let mut object = Dict::new();
        object.insert("isa".into(), Value::string(ISA_RESOURCES_PHASE));
        object.insert("buildActionMask".into(), Value::string("2147483647"));
        object.insert("files".into(), Value::Array(Vec::new()));
        object.insert("runOnlyForDeploymentPostprocessing".into(), Value::string("0"));
        self.objects_mut()?.insert(id.clone(), Value::Dict(object));
        let target = self
            .object_mut(target_id)
            .ok_or_else(|| anyhow!("target {} missing from objects table", target_id))?;
        target
            .entry("buildPhases".to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| anyhow!("target {} buildPhases is not an array", target_id))?
            .push(Value::string(id.as_str()));
        Ok(id)
    }

    /// True when some build-file entry of the phase references the given
    /// object ID. Identity comparison, not path comparison.
    pub fn phase_references_file(&self, phase_id: &str, file_id: &str) -> bool {
        let entry_ids: Vec<&str> = self
            .object(phase_id)
            .and_then(|object| object.get("files"))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        entry_ids.into_iter().any(|entry_id| {
            self.object(entry_id)
                .and_then(|object| attr(object, "fileRef"))
                == Some(file_id)
        })
    }

    /// Appends a new build-file entry referencing `file_id` to the phase.
    pub fn add_file_to_phase(&mut self, phase_id: &str, file_id: &str) -> Result<String> {
        let id = self.generate_object_id()?;
        let mut object = Dict::new();
        object.insert("isa".into(), Value::string(ISA_BUILD_FILE));
        object.insert("fileRef".into(), Value::string(file_id));
        self.objects_mut()?.insert(id.clone(), Value::Dict(object));
        let phase = self
            .object_mut(phase_id)
            .ok_or_else(|| anyhow!("build phase {} missing from objects table", phase_id))?;
        phase
            .entry("files".to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| anyhow!("build phase {} files is not an array", phase_id))?
            .push(Value::string(id.as_str()));
        Ok(id)
    }

    pub fn known_regions(&self) -> Vec<String> {
        self.project_object()
            .ok()
            .and_then(|object| object.get("knownRegions"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Adds a region tag to `knownRegions` unless already listed.
    /// Returns whether anything was added.
    pub fn ensure_known_region(&mut self, tag: &str) -> Result<bool> {
        if self.known_regions().iter().any(|region| region == tag) {
            return Ok(false);
        }
        let project = self.project_object_mut()?;
        project
            .entry("knownRegions".to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| anyhow!("knownRegions is not an array"))?
            .push(Value::string(tag));
        Ok(true)
    }

    /// On-disk folder a group's relative paths resolve against.
    pub fn group_folder(&self, group_id: &str) -> Option<PathBuf> {
        let object = self.object(group_id)?;
        let folder = attr(object, "path").or_else(|| attr(object, "name"))?;
        Some(self.source_root()?.join(folder))
    }

    /// Fresh 96-bit object ID as 24 uppercase hex digits, retried on the
    /// (vanishing) chance of a collision with an existing object.
    pub fn generate_object_id(&self) -> Result<String> {
        let objects = self.objects()?;
        loop {
            let mut bytes = [0u8; 12];
            getrandom::getrandom(&mut bytes)
                .map_err(|err| anyhow!("gathering randomness for an object id: {}", err))?;
            let id: String = bytes.iter().map(|byte| format!("{:02X}", byte)).collect();
            if !objects.contains_key(&id) {
                return Ok(id);
            }
        }
    }

    fn append_child(&mut self, group_id: &str, child_id: &str) -> Result<()> {
        let group = self
            .object_mut(group_id)
            .ok_or_else(|| anyhow!("group {} missing from objects table", group_id))?;
        group
            .entry("children".to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| anyhow!("group {} children is not an array", group_id))?
            .push(Value::string(child_id));
        Ok(())
    }
}

fn attr<'a>(object: &'a Dict, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn resolve_descriptor_path(path: &Path) -> PathBuf {
    let is_container = path.is_dir()
        || path.extension().and_then(|ext| ext.to_str()) == Some("xcodeproj");
    if is_container {
        path.join("project.pbxproj")
    } else {
        path.to_path_buf()
    }
}

fn read_descriptor_text(path: &Path) -> Result<String> {
    let raw_bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    match String::from_utf8(raw_bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            // Legacy descriptors occasionally carry Latin-1 bytes.
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
            if had_errors {
                bail!("{} is neither UTF-8 nor Latin-1 text", path.display());
            }
            Ok(decoded.into_owned())
        }
    }
}
