//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use crate::core::package::Package;
    use proptest::prelude::*;

    /// Generate a catalog project name (lowercase, digits, `-`, `_`, `:`, `.`)
    pub fn project_name() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9:._-]{0,30}".prop_filter("Not a dot segment", |s| s != "." && s != "..")
    }

    /// Generate a version string
    pub fn version() -> impl Strategy<Value = String> {
        (0u32..100, 0u32..100, 0u32..100)
            .prop_map(|(major, minor, patch)| format!("{major}.{minor}.{patch}"))
    }

    /// Generate a repository name
    pub fn repo() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("arch".to_string()),
            Just("debian_12".to_string()),
            Just("fedora_rawhide".to_string()),
            Just("nix_unstable".to_string()),
            Just("spack".to_string()),
        ]
    }

    /// Generate a package record
    pub fn package() -> impl Strategy<Value = Package> {
        (
            repo(),
            project_name(),
            version(),
            prop_oneof![Just("newest"), Just("outdated"), Just("legacy")],
            proptest::option::of("[A-Za-z ]{0,40}"),
            proptest::collection::vec("[A-Z][A-Za-z0-9.-]{1,10}", 0..3),
        )
            .prop_map(|(repo, name, version, status, summary, licenses)| {
                let mut extra = serde_json::Map::new();
                if let Some(summary) = summary {
                    extra.insert("summary".to_string(), summary.into());
                }
                Package {
                    licenses,
                    repo,
                    version,
                    visible_name: name,
                    status: status.to_string(),
                    extra,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_project_name_generator(name in project_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/'));
        }

        #[test]
        fn test_version_generator(version in version()) {
            let parts: Vec<&str> = version.split('.').collect();
            prop_assert_eq!(parts.len(), 3);
            for part in parts {
                prop_assert!(part.parse::<u32>().is_ok());
            }
        }
    }
}
