//! package.json generation from the resolution result.
//!
//! Invariant: every dependency entry traces back to a resolver category flag,
//! and every detected dependency appears. Keys sort alphabetically via the
//! serde_json map, so output is deterministic.

use serde_json::json;
use std::collections::BTreeMap;

use crate::classify::{CHART_LIBRARY, ICON_LIBRARY};
use crate::resolve::Resolution;

/// Baseline packages every export needs regardless of selection.
const BASELINE_DEPENDENCIES: &[(&str, &str)] = &[
    ("clsx", "^2.1.0"),
    ("tailwind-merge", "^2.2.0"),
    ("class-variance-authority", "^0.7.0"),
    ("tailwindcss-animate", "^1.0.7"),
];

/// Placeholder constraint for detected packages; versions are never resolved
/// against a registry.
const DETECTED_CONSTRAINT: &str = "^1.0.0";

pub fn generate_manifest(resolution: &Resolution) -> String {
    let mut deps: BTreeMap<&str, &str> = BASELINE_DEPENDENCIES.iter().copied().collect();

    if resolution.uses_icons {
        deps.insert(ICON_LIBRARY, "^0.300.0");
    }
    if resolution.uses_charts {
        deps.insert(CHART_LIBRARY, "^2.12.0");
    }
    for pkg in &resolution.primitive_libs {
        deps.insert(pkg, DETECTED_CONSTRAINT);
    }
    for pkg in &resolution.other_packages {
        if !pkg.starts_with("@/") {
            deps.insert(pkg, DETECTED_CONSTRAINT);
        }
    }

    let manifest = json!({
        "name": "design-system-components",
        "version": "1.0.0",
        "description": "Design system components export",
        "dependencies": deps,
        "devDependencies": {
            "tailwindcss": "^3.4.0",
            "autoprefixer": "^10.4.0",
            "postcss": "^8.4.0",
        },
        "peerDependencies": {
            "react": "^18.0.0",
            "react-dom": "^18.0.0",
        },
    });

    // json! never produces unserializable values
    serde_json::to_string_pretty(&manifest).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_always_present() {
        let manifest = generate_manifest(&Resolution::default());
        assert!(manifest.contains(r#""clsx": "^2.1.0""#));
        assert!(manifest.contains(r#""tailwind-merge""#));
        assert!(manifest.contains(r#""class-variance-authority""#));
        assert!(manifest.contains(r#""tailwindcss-animate""#));
    }

    #[test]
    fn test_icon_library_follows_flag() {
        let mut resolution = Resolution::default();
        assert!(!generate_manifest(&resolution).contains(ICON_LIBRARY));

        resolution.uses_icons = true;
        assert!(generate_manifest(&resolution).contains(r#""lucide-react": "^0.300.0""#));
    }

    #[test]
    fn test_chart_library_follows_flag() {
        let mut resolution = Resolution::default();
        assert!(!generate_manifest(&resolution).contains(CHART_LIBRARY));

        resolution.uses_charts = true;
        assert!(generate_manifest(&resolution).contains(r#""recharts": "^2.12.0""#));
    }

    #[test]
    fn test_detected_packages_included() {
        let resolution = Resolution {
            primitive_libs: vec!["@radix-ui/react-dialog".to_string()],
            other_packages: vec!["date-fns".to_string(), "@/lib/internal".to_string()],
            ..Default::default()
        };
        let manifest = generate_manifest(&resolution);
        assert!(manifest.contains(r#""@radix-ui/react-dialog": "^1.0.0""#));
        assert!(manifest.contains(r#""date-fns": "^1.0.0""#));
        // local alias paths never leak into the manifest
        assert!(!manifest.contains("@/lib/internal"));
    }

    #[test]
    fn test_dependencies_sorted_and_valid_json() {
        let resolution = Resolution {
            primitive_libs: vec![
                "@radix-ui/react-popover".to_string(),
                "@radix-ui/react-dialog".to_string(),
            ],
            ..Default::default()
        };
        let manifest = generate_manifest(&resolution);
        let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();

        let deps = parsed["dependencies"].as_object().unwrap();
        let keys: Vec<&String> = deps.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
