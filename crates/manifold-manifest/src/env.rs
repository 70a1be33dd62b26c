//! Build-time environment declarations.
//!
//! Writes a TypeScript declaration file describing the `process.env` keys
//! the bundler will inline for the current target: the target itself plus
//! every `MANIFOLD_PUBLIC_*` key found in the project's dotenv files.

use std::collections::BTreeSet;

use manifold_fs::{CommonPath, NormalizedPath, io};

use crate::error::Result;
use crate::target::TargetData;

/// Prefix of user keys exposed to extension code.
pub const PUBLIC_PREFIX: &str = "MANIFOLD_PUBLIC_";

/// Dotenv files read for the given browser, in load order.
pub fn env_files(project_directory: &NormalizedPath, target: &TargetData) -> Vec<NormalizedPath> {
    [
        ".env".to_string(),
        format!(".env.{}", target.browser),
        ".env.local".to_string(),
    ]
    .iter()
    .map(|name| project_directory.join(name))
    .collect()
}

/// Public keys declared in a dotenv file body.
pub fn public_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, _) = line.split_once('=')?;
            let key = key.trim();
            key.starts_with(PUBLIC_PREFIX).then(|| key.to_string())
        })
        .collect()
}

/// Declaration file content for `target` and the given public keys.
pub fn render_declarations(target: &TargetData, keys: &BTreeSet<String>) -> String {
    let mut out = String::new();
    out.push_str("// Generated by manifold. Do not edit.\n");
    out.push_str("declare namespace NodeJS {\n");
    out.push_str("  interface ProcessEnv {\n");
    out.push_str(&format!("    MANIFOLD_BROWSER: \"{}\"\n", target.browser));
    out.push_str(&format!(
        "    MANIFOLD_MANIFEST_VERSION: \"{}\"\n",
        target.manifest_version
    ));
    out.push_str(&format!("    MANIFOLD_TARGET: \"{}\"\n", target));
    for key in keys {
        out.push_str(&format!("    {}?: string\n", key));
    }
    out.push_str("  }\n");
    out.push_str("}\n");
    out
}

/// Regenerate the declaration file.
///
/// The file is only rewritten when its content changes, so watchers keyed
/// on modification time are not retriggered by an unchanged project.
/// Returns whether the file was written.
pub fn write_declarations(common_path: &CommonPath, target: &TargetData) -> Result<bool> {
    let mut keys = BTreeSet::new();
    for file in env_files(&common_path.project_directory, target) {
        if file.is_file() {
            keys.extend(public_keys(&io::read_text(&file)?));
        }
    }

    let content = render_declarations(target, &keys);
    let path = common_path.env_declaration_path();
    if path.is_file() && io::read_text(&path)? == content {
        tracing::trace!(path = %path, "environment declarations unchanged");
        return Ok(false);
    }

    io::write_text(&path, &content)?;
    tracing::debug!(path = %path, keys = keys.len(), "wrote environment declarations");
    Ok(true)
}
