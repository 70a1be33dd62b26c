//! Package descriptor (`package.json`) loading and normalization.

use std::collections::BTreeMap;

use manifold_fs::constants::LOCKFILES;
use manifold_fs::{CommonPath, JsonStore, io};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::capability::Capability;
use crate::error::{Error, Result};

/// Name used when the descriptor declares none.
pub const DEFAULT_PACKAGE_NAME: &str = "browser-extension";

/// Version used when the descriptor declares none.
pub const DEFAULT_PACKAGE_VERSION: &str = "0.0.0";

/// `author` may be a plain string or a person object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Person { name: String },
}

impl Author {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Person { name } => name,
        }
    }
}

/// Fields of the descriptor the engine reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: Option<String>,
    pub version: Option<String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub package_manager: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
    /// Manifest overrides.
    #[serde(default)]
    pub manifest: Map<String, Value>,
}

/// Static manifest fields derived from the descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseFields {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub permissions: Vec<String>,
    pub host_permissions: Vec<String>,
    /// Extra top-level keys copied from the overrides.
    pub extra: Map<String, Value>,
}

/// Loaded package descriptor plus the untouched original object.
#[derive(Debug, Clone)]
pub struct PackageData {
    pub descriptor: PackageDescriptor,
    raw: Map<String, Value>,
    package_manager: Option<String>,
}

impl PackageData {
    /// Read the descriptor at `common_path.package_file_path`.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigRead`] when the file is missing, is not JSON, is not
    /// an object, or has fields of the wrong type.
    pub fn load(common_path: &CommonPath) -> Result<Self> {
        let path = &common_path.package_file_path;
        if !path.is_file() {
            return Err(Error::config_read(
                path.to_native(),
                "package descriptor not found",
            ));
        }

        let content = io::read_text(path)?;
        let raw: Value = serde_json::from_str(&content)
            .map_err(|e| Error::config_read(path.to_native(), e.to_string()))?;
        let Value::Object(raw) = raw else {
            return Err(Error::config_read(
                path.to_native(),
                "expected a JSON object",
            ));
        };

        let descriptor: PackageDescriptor = serde_json::from_value(Value::Object(raw.clone()))
            .map_err(|e| Error::config_read(path.to_native(), e.to_string()))?;

        let package_manager = descriptor
            .package_manager
            .clone()
            .or_else(|| detect_package_manager(common_path));

        Ok(Self {
            descriptor,
            raw,
            package_manager,
        })
    }

    pub fn name(&self) -> &str {
        self.descriptor
            .name
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE_NAME)
    }

    pub fn version(&self) -> &str {
        self.descriptor
            .version
            .as_deref()
            .unwrap_or(DEFAULT_PACKAGE_VERSION)
    }

    /// Declared display name, or the sentence-cased package name.
    pub fn display_name(&self) -> String {
        self.descriptor
            .display_name
            .clone()
            .unwrap_or_else(|| sentence_case(self.name()))
    }

    /// Resolved package-manager identifier.
    pub fn package_manager(&self) -> Option<&str> {
        self.package_manager.as_deref()
    }

    /// Runtime and dev dependencies; runtime specifiers win.
    pub fn dependencies(&self) -> BTreeMap<String, String> {
        let mut merged = self.descriptor.dev_dependencies.clone();
        merged.extend(self.descriptor.dependencies.clone());
        merged
    }

    /// Descriptor mirrored for output, with normalized fields filled in.
    pub fn to_output(&self) -> Value {
        let mut output = self.raw.clone();
        output
            .entry("displayName")
            .or_insert_with(|| Value::String(self.display_name()));
        if let Some(manager) = &self.package_manager {
            output.insert("packageManager".to_string(), Value::String(manager.clone()));
        }
        Value::Object(output)
    }

    /// Static manifest fields.
    ///
    /// Returns the fields and the override keys that were ignored because
    /// a capability owns them.
    pub fn base_fields(&self) -> (BaseFields, Vec<String>) {
        let overrides = &self.descriptor.manifest;
        let mut extra = Map::new();
        let mut ignored = Vec::new();

        for (key, value) in overrides {
            match key.as_str() {
                "permissions" | "host_permissions" => {}
                _ if Capability::is_reserved_key(key) => ignored.push(key.clone()),
                _ => {
                    extra.insert(key.clone(), value.clone());
                }
            }
        }

        let fields = BaseFields {
            name: self.display_name(),
            version: self.version().to_string(),
            description: self.descriptor.description.clone(),
            author: self.descriptor.author.as_ref().map(|a| a.name().to_string()),
            permissions: string_list(overrides.get("permissions")),
            host_permissions: string_list(overrides.get("host_permissions")),
            extra,
        };
        (fields, ignored)
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();
    for item in value.and_then(Value::as_array).into_iter().flatten() {
        if let Some(s) = item.as_str()
            && !list.iter().any(|existing| existing == s)
        {
            list.push(s.to_string());
        }
    }
    list
}

fn detect_package_manager(common_path: &CommonPath) -> Option<String> {
    LOCKFILES
        .iter()
        .find(|(lockfile, _)| common_path.project_directory.join(lockfile).is_file())
        .map(|(_, manager)| (*manager).to_string())
}

/// `my-coolExtension_v2` -> `My cool extension v2`.
pub fn sentence_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    let joined = words.join(" ");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
