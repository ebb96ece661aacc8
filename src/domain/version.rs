//! Version string parsing and precedence comparison
//!
//! Daemon output and release tags are loosely formatted: `v2.3.4`,
//! `2.3.4`, and firmware tags with a trailing commit hash such as
//! `v2.5.6.d55c08d`. Strict SemVer is tried first, then a lenient form
//! where missing minor/patch components are zero and a trailing
//! `.suffix`/`+suffix` becomes build metadata (`-suffix` a prerelease).
//!
//! All-digit build metadata (`2.3.0.1`) is ordered as a fourth numeric
//! component; any other build metadata is ignored when comparing.

use regex::Regex;
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::sync::LazyLock;

/// MAJOR[.MINOR[.PATCH]][(-|.|+)SUFFIX]
static LENIENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:([-.+])([0-9A-Za-z][0-9A-Za-z.-]*))?$").unwrap()
});

/// Strip a single leading `v`
pub fn strip_v(s: &str) -> &str {
    s.strip_prefix('v').unwrap_or(s)
}

/// Parse a version string, tolerating a leading `v`
pub fn parse_version(s: &str) -> Option<Version> {
    let s = strip_v(s.trim());
    if s.is_empty() {
        return None;
    }

    if let Ok(v) = Version::parse(s) {
        return Some(v);
    }

    let caps = LENIENT_RE.captures(s)?;
    let component = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let mut version = Version::new(component(1)?, component(2)?, component(3)?);

    if let (Some(sep), Some(suffix)) = (caps.get(4), caps.get(5)) {
        match sep.as_str() {
            "-" => version.pre = Prerelease::new(suffix.as_str()).ok()?,
            _ => version.build = BuildMetadata::new(suffix.as_str()).ok()?,
        }
    }

    Some(version)
}

/// Find the first whitespace-separated token in `output` that parses as a version.
///
/// Returns the token with its leading `v` removed, exactly as it appeared
/// otherwise (no normalisation).
pub fn extract_version(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .map(strip_v)
        .find(|token| parse_version(token).is_some())
        .map(str::to_string)
}

/// Fourth component from all-digit build metadata, zero otherwise
fn fourth_component(version: &Version) -> u64 {
    let build = version.build.as_str();
    if !build.is_empty() && build.bytes().all(|b| b.is_ascii_digit()) {
        build.parse().unwrap_or(u64::MAX)
    } else {
        0
    }
}

/// Order two parsed versions: SemVer precedence, then the numeric fourth
/// component. Commit-hash suffixes never affect the result.
pub fn version_precedence(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
        .then_with(|| fourth_component(a).cmp(&fourth_component(b)))
}

/// Compare two version strings with [`version_precedence`].
///
/// Returns `None` when either side does not parse.
pub fn compare_versions(a: &str, b: &str) -> Option<Ordering> {
    let a = parse_version(a)?;
    let b = parse_version(b)?;
    Some(version_precedence(&a, &b))
}
