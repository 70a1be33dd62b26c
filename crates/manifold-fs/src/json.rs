//! JSON document loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// JSON document store.
///
/// Reads documents through [`io::read_text`] and writes them with
/// [`io::write_atomic`], so a saved document always replaces the previous
/// file in full.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonStore {
    pretty: bool,
}

impl JsonStore {
    /// Store that writes JSON with 2-space indentation.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Store with the indentation chosen at runtime.
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Load and deserialize a JSON document.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::JsonParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Serialize a value to the exact bytes [`save`](Self::save) writes.
    pub fn render<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        let mut content = rendered.map_err(|e| Error::JsonSerialize {
            path: path.to_native(),
            message: e.to_string(),
        })?;
        content.push('\n');
        Ok(content)
    }

    /// Serialize and atomically write a JSON document.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = self.render(path, value)?;
        io::write_text(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_pretty_uses_two_space_indent() {
        let path = NormalizedPath::new("/unused.json");
        let out = JsonStore::pretty()
            .render(&path, &json!({"a": {"b": 1}}))
            .unwrap();
        assert_eq!(out, "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n");
    }

    #[test]
    fn test_compact_is_single_line() {
        let path = NormalizedPath::new("/unused.json");
        let out = JsonStore::with_pretty(false).render(&path, &json!({"a": [1, 2]})).unwrap();
        assert_eq!(out, "{\"a\":[1,2]}\n");
    }

    #[test]
    fn test_load_invalid_json_reports_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("bad.json");
        std::fs::write(&file, "{ not json").unwrap();

        let err = JsonStore::pretty()
            .load::<serde_json::Value>(&NormalizedPath::new(&file))
            .unwrap_err();
        assert!(matches!(err, Error::JsonParse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
