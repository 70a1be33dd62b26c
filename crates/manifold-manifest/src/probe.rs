//! Non-blocking filesystem probes used by the discovery batch.

use manifold_fs::NormalizedPath;

use crate::error::Result;

pub(crate) async fn is_file(path: &NormalizedPath) -> bool {
    tokio::fs::metadata(path.to_native())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

pub(crate) async fn is_dir(path: &NormalizedPath) -> bool {
    tokio::fs::metadata(path.to_native())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// First candidate that exists as a file.
pub(crate) async fn first_file(candidates: &[NormalizedPath]) -> Option<NormalizedPath> {
    for candidate in candidates {
        if is_file(candidate).await {
            return Some(candidate.clone());
        }
    }
    None
}

/// A directory entry and whether it is itself a directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Entry {
    pub path: NormalizedPath,
    pub is_dir: bool,
}

/// Entries of `dir`, sorted by path. A missing directory has no entries.
pub(crate) async fn read_dir_sorted(dir: &NormalizedPath) -> Result<Vec<Entry>> {
    let native = dir.to_native();
    let mut reader = match tokio::fs::read_dir(&native).await {
        Ok(reader) => reader,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(manifold_fs::Error::io(native, e).into()),
    };

    let mut entries = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| manifold_fs::Error::io(&native, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| manifold_fs::Error::io(entry.path(), e))?;
        entries.push(Entry {
            path: NormalizedPath::new(entry.path()),
            is_dir: file_type.is_dir(),
        });
    }
    entries.sort();
    Ok(entries)
}

pub(crate) async fn read_text(path: &NormalizedPath) -> Result<String> {
    tokio::fs::read_to_string(path.to_native())
        .await
        .map_err(|e| manifold_fs::Error::io(path.to_native(), e).into())
}
