//! Version string helpers for versioned tool directories.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Directory names that look like a version: `9.1.0`, `v9.1.0`, `v10`.
static VERSION_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?\d+(\.\d+)*$").expect("VERSION_DIR_REGEX must compile")
});

/// Strip a single leading `v`.
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}

/// Major component of a normalized or unnormalized version.
pub fn major_version(version: &str) -> &str {
    let version = normalize_version(version);
    version.split('.').next().unwrap_or(version)
}

/// Whether a directory name is a version name.
pub fn is_version_name(name: &str) -> bool {
    VERSION_DIR_REGEX.is_match(name)
}

/// Compare two version names component by component.
///
/// Missing trailing components count as zero, so `9.1` == `9.1.0`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        normalize_version(v)
            .split('.')
            .map(|s| s.parse().unwrap_or(0))
            .collect()
    };

    let a = parse(a);
    let b = parse(b);
    let len = a.len().max(b.len());

    for i in 0..len {
        let l = a.get(i).copied().unwrap_or(0);
        let r = b.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_single_leading_v() {
        assert_eq!(normalize_version("v9.1.0"), "9.1.0");
        assert_eq!(normalize_version("9.1.0"), "9.1.0");
        assert_eq!(normalize_version("vv9"), "v9");
    }

    #[test]
    fn normalize_is_idempotent_on_normalized_input() {
        let once = normalize_version("v9.1.0");
        assert_eq!(normalize_version(once), once);
    }

    #[test]
    fn major_version_of_both_forms() {
        assert_eq!(major_version("9.1.0"), "9");
        assert_eq!(major_version("v9.1.0"), "9");
        assert_eq!(major_version("12"), "12");
    }

    #[test]
    fn version_names() {
        assert!(is_version_name("v9.1.0"));
        assert!(is_version_name("9.1.0"));
        assert!(is_version_name("v10"));
        assert!(!is_version_name("Linux"));
        assert!(!is_version_name("v9.1.0-rc1"));
        assert!(!is_version_name("9."));
    }

    #[test]
    fn compare_is_numeric_not_lexical() {
        assert_eq!(compare_versions("v10.0.0", "v9.1.0"), Ordering::Greater);
        assert_eq!(compare_versions("9.1.0", "v9.1.0"), Ordering::Equal);
        assert_eq!(compare_versions("9.1", "9.1.0"), Ordering::Equal);
        assert_eq!(compare_versions("9.1.0", "9.2"), Ordering::Less);
    }
}
