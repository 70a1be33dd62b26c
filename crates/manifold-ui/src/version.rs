//! Major-version extraction from dependency specifiers.
//!
//! Accepts exact versions (`18.1.0`, `v18.1.0`, `=18.1.0`), ranges
//! (`^18.2.0`, `~3.4`, `>=17.0.0 <19`), hyphen ranges (`17.0.0 - 18.2.0`)
//! and `||` unions. A range is read by the major version of its first
//! comparator, a hyphen range by its lower end, and a union by the lowest
//! major across its alternatives. An upper-bound-only range such as
//! `<18.0.0` yields the major of its bound.

use semver::{Version, VersionReq};

/// Read the major version from a plain semantic-version specifier.
///
/// Returns a human-readable reason when the specifier carries no major
/// version (`*`, `latest`, a git URL).
pub fn major_version(specifier: &str) -> std::result::Result<u64, String> {
    specifier
        .split("||")
        .map(alternative_major)
        .try_fold(None, |lowest: Option<u64>, major| {
            let major = major?;
            Ok::<_, String>(Some(lowest.map_or(major, |l| l.min(major))))
        })?
        .ok_or_else(|| "specifier has no version bound".to_string())
}

fn alternative_major(alternative: &str) -> std::result::Result<u64, String> {
    let trimmed = alternative.trim();

    // `a - b` is read by its lower end
    let trimmed = match trimmed.split_once(" - ") {
        Some((lower, _)) => lower.trim(),
        None => trimmed,
    };

    let bare = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('='))
        .unwrap_or(trimmed)
        .trim();

    if let Ok(version) = Version::parse(bare) {
        return Ok(version.major);
    }

    // npm joins comparators with spaces, semver expects commas
    let normalized = trimmed.split_whitespace().collect::<Vec<_>>().join(", ");
    let req = VersionReq::parse(&normalized).map_err(|e| e.to_string())?;
    req.comparators
        .first()
        .map(|c| c.major)
        .ok_or_else(|| "specifier has no version bound".to_string())
}
