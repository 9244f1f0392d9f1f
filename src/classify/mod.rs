//! Import classification for one unit of component source.
//!
//! Text-based scanning, not a real module graph: a single import-statement
//! pattern is applied to the raw source and every captured module path is
//! assigned to exactly one dependency category by prefix precedence. Best
//! effort by design; non-canonical import styles may go undetected.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

/// Path prefix marking an internal component reference.
pub const COMPONENT_PATH_PREFIX: &str = "@/components/ui/";
/// Namespace prefix of the external UI-primitive library family.
pub const PRIMITIVE_NAMESPACE: &str = "@radix-ui/";
/// Exact module name of the icon library.
pub const ICON_LIBRARY: &str = "lucide-react";
/// Charting package; surfaced through the chart flag, never as a plain dep.
pub const CHART_LIBRARY: &str = "recharts";

/// Framework imports and the shared-utility alias are not dependencies.
const FRAMEWORK_PREFIX: &str = "react";
const UTILITY_ALIAS: &str = "@/lib";

const SOURCE_SUFFIX: &str = ".tsx";

// import { X } from "path" | import * as X from "path" | import X from "path"
// | bare import "path"
static IMPORT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+(?:(?:\{[^}]*\}|\*\s+as\s+\w+|\w+)\s+from\s+)?["']([^"']+)["']"#)
        .unwrap()
});

/// Dependencies of one component source, split into disjoint categories.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DependencyFacts {
    /// Other corpus components referenced (normalized to identifier form).
    pub internal_refs: BTreeSet<String>,
    /// UI-primitive packages referenced.
    pub primitive_refs: BTreeSet<String>,
    /// Whether the icon library was imported.
    pub icon_lib_used: bool,
    /// Remaining external packages, verbatim.
    pub other_refs: BTreeSet<String>,
}

/// Scan `source` for import statements and classify every referenced module
/// path. Pure and repeatable; malformed text simply yields no references.
///
/// Internal references are reported whether or not the target exists in the
/// corpus; absence is the resolver's concern.
pub fn classify(source: &str) -> DependencyFacts {
    let mut facts = DependencyFacts::default();

    for cap in IMPORT_PATTERN.captures_iter(source) {
        let path = match cap.get(1) {
            Some(m) => m.as_str(),
            None => continue,
        };

        if let Some(rest) = path.strip_prefix(COMPONENT_PATH_PREFIX) {
            facts.internal_refs.insert(normalize_internal(rest));
        } else if path.starts_with("./") || path.starts_with("../") {
            // Relative import; only component sub-paths count as internal.
            if path.contains("/ui/") {
                if let Some(last) = path.rsplit('/').next() {
                    facts.internal_refs.insert(normalize_internal(last));
                }
            }
        } else if path.starts_with(PRIMITIVE_NAMESPACE) {
            facts.primitive_refs.insert(path.to_string());
        } else if path == ICON_LIBRARY {
            facts.icon_lib_used = true;
        } else if path.starts_with(FRAMEWORK_PREFIX) || path.starts_with(UTILITY_ALIAS) {
            // framework / shared-utility alias: never surfaced
        } else {
            facts.other_refs.insert(path.to_string());
        }
    }

    facts
}

/// Normalize an internal reference to corpus identifier form by appending the
/// standard source suffix when the segment carries none.
fn normalize_internal(name: &str) -> String {
    if name.rsplit('/').next().is_some_and(|last| last.contains('.')) {
        name.to_string()
    } else {
        format!("{name}{SOURCE_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_alias_import() {
        let facts = classify(r#"import { Button } from "@/components/ui/button""#);
        assert!(facts.internal_refs.contains("button.tsx"));
        assert!(facts.primitive_refs.is_empty());
        assert!(facts.other_refs.is_empty());
        assert!(!facts.icon_lib_used);
    }

    #[test]
    fn test_relative_ui_import() {
        let facts = classify(r#"import { Card } from "../ui/card""#);
        assert!(facts.internal_refs.contains("card.tsx"));

        // Explicit suffix is kept as-is
        let facts = classify(r#"import { Card } from "./ui/card.tsx""#);
        assert!(facts.internal_refs.contains("card.tsx"));
    }

    #[test]
    fn test_relative_non_ui_import_ignored() {
        let facts = classify(r#"import { helper } from "./helpers""#);
        assert!(facts.internal_refs.is_empty());
        assert!(facts.other_refs.is_empty());
    }

    #[test]
    fn test_primitive_namespace() {
        let facts = classify(r#"import * as DialogPrimitive from "@radix-ui/react-dialog""#);
        assert!(facts.primitive_refs.contains("@radix-ui/react-dialog"));
        assert!(facts.internal_refs.is_empty());
    }

    #[test]
    fn test_icon_library_flag() {
        let facts = classify(r#"import { Check } from "lucide-react""#);
        assert!(facts.icon_lib_used);
        assert!(facts.other_refs.is_empty());
    }

    #[test]
    fn test_framework_and_utility_alias_excluded() {
        let source = r#"
            import * as React from "react"
            import { useEffect } from "react"
            import { cn } from "@/lib/utils"
        "#;
        let facts = classify(source);
        assert_eq!(facts, DependencyFacts::default());
    }

    #[test]
    fn test_other_package_verbatim() {
        let facts = classify(r#"import { cva } from "class-variance-authority""#);
        assert!(facts.other_refs.contains("class-variance-authority"));
    }

    #[test]
    fn test_categories_are_disjoint() {
        let source = r#"
            import { Button } from "@/components/ui/button"
            import * as Popover from "@radix-ui/react-popover"
            import { X } from "lucide-react"
            import { format } from "date-fns"
            import { cn } from "@/lib/utils"
        "#;
        let facts = classify(source);

        for internal in &facts.internal_refs {
            assert!(!facts.primitive_refs.contains(internal));
            assert!(!facts.other_refs.contains(internal));
        }
        for primitive in &facts.primitive_refs {
            assert!(!facts.other_refs.contains(primitive));
        }
        assert!(!facts.other_refs.contains(ICON_LIBRARY));
        assert!(facts
            .other_refs
            .iter()
            .all(|other| !other.starts_with(UTILITY_ALIAS)));
    }

    #[test]
    fn test_duplicates_collapse() {
        let source = r#"
            import { Button } from "@/components/ui/button"
            import { buttonVariants } from "@/components/ui/button"
        "#;
        let facts = classify(source);
        assert_eq!(facts.internal_refs.len(), 1);
    }

    #[test]
    fn test_malformed_source_yields_nothing() {
        let facts = classify("not even { valid import syntax from");
        assert_eq!(facts, DependencyFacts::default());
    }

    #[test]
    fn test_side_effect_import() {
        let facts = classify(r#"import "some-polyfill""#);
        assert!(facts.other_refs.contains("some-polyfill"));
    }
}
