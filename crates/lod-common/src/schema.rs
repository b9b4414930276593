//! Configuration document versioning and compatibility.

/// Current version of the authority configuration document format.
///
/// Documents declare it under the `QA_CONFIG_VERSION` key.
/// - MAJOR: Breaking changes (renamed or restructured sections)
/// - MINOR: Additive changes (new optional keys)
pub const CONFIG_VERSION: &str = "2.2";

/// Key under which a document declares its format version.
pub const CONFIG_VERSION_KEY: &str = "QA_CONFIG_VERSION";

/// Check if a document version is compatible with current.
///
/// Only the major component is compared; a document without a parseable
/// major version is treated as major 0.
pub fn is_compatible(version: &str) -> bool {
    major(CONFIG_VERSION) == major(version)
}

fn major(version: &str) -> u32 {
    version
        .trim()
        .split('.')
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(0)
}
