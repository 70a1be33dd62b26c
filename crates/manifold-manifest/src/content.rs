//! Content-script configuration read from source files.
//!
//! A content script may export its injection rules:
//!
//! ```ts
//! export const config: ContentScriptConfig = {
//!   matches: ["https://*.example.com/*"],
//!   run_at: "document_start",
//!   all_frames: true
//! }
//! ```
//!
//! Only literal values are understood. Anything else falls back to the
//! defaults of [`ContentScript::new`].

use std::sync::LazyLock;

use regex::Regex;

use crate::capability::{ContentScript, RunAt};

static CONFIG_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+const\s+config\b[^=]*=\s*\{").expect("Invalid config export regex")
});

static MATCHES_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?matches["']?\s*:\s*\[([^\]]*)\]"#).expect("Invalid matches regex")
});

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]*)"|'([^']*)'|`([^`]*)`"#).expect("Invalid string literal regex")
});

static RUN_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?run_at["']?\s*:\s*["'](\w+)["']"#).expect("Invalid run_at regex")
});

static ALL_FRAMES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["']?all_frames["']?\s*:\s*true\b"#).expect("Invalid all_frames regex")
});

/// Build the content-script entry for `script` (source-relative path)
/// from the file's `source` text.
pub fn parse_content_script(script: &str, source: &str) -> ContentScript {
    let mut entry = ContentScript::new(script);

    let Some(start) = CONFIG_EXPORT.find(source) else {
        return entry;
    };
    let config = config_body(&source[start.end()..]);

    if let Some(caps) = MATCHES_ARRAY.captures(config) {
        let matches: Vec<String> = STRING_LITERAL
            .captures_iter(&caps[1])
            .filter_map(|lit| {
                lit.get(1)
                    .or_else(|| lit.get(2))
                    .or_else(|| lit.get(3))
                    .map(|m| m.as_str().to_string())
            })
            .collect();
        if !matches.is_empty() {
            entry.matches = matches;
        }
    }

    if let Some(caps) = RUN_AT.captures(config) {
        entry.run_at = RunAt::parse(&caps[1]);
        if entry.run_at.is_none() {
            tracing::warn!(script, run_at = &caps[1], "ignoring unknown run_at value");
        }
    }

    entry.all_frames = ALL_FRAMES.is_match(config);
    entry
}

/// Text of the object literal opened just before `rest`, up to its
/// matching closing brace (or the end of the source).
fn config_body(rest: &str) -> &str {
    let mut depth = 1usize;
    for (idx, ch) in rest.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return &rest[..idx];
                }
            }
            _ => {}
        }
    }
    rest
}
