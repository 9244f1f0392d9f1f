//! Transitive dependency resolution and size estimation.
//!
//! Breadth-first closure over internal component references plus running
//! unions of the external dependency categories. Deterministic: every output
//! list is sorted, and identical inputs always produce identical results.

use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};

use crate::classify::{classify, CHART_LIBRARY};
use crate::types::Corpus;

/// Outcome of resolving a selection against the corpus.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Selected identifiers plus everything they transitively reference,
    /// sorted. Always a superset of the selection.
    pub resolved: Vec<String>,
    /// UI-primitive packages referenced anywhere in the resolved set.
    pub primitive_libs: Vec<String>,
    /// Other external packages referenced anywhere in the resolved set.
    pub other_packages: Vec<String>,
    /// Whether any resolved component imports the icon library.
    pub uses_icons: bool,
    /// Whether any resolved component is a charting unit or imports the
    /// charting package.
    pub uses_charts: bool,
    /// Identifiers that were referenced (or selected) but absent from the
    /// corpus. Diagnostic only; absence is not an error.
    pub missing: Vec<String>,
}

impl Resolution {
    /// Resolved identifiers that were pulled in as dependencies rather than
    /// selected directly.
    pub fn auto_included<S: AsRef<str>>(&self, selected: &[S]) -> Vec<String> {
        self.resolved
            .iter()
            .filter(|id| !selected.iter().any(|s| s.as_ref() == id.as_str()))
            .cloned()
            .collect()
    }
}

/// Compute the transitive closure of `selected` over internal references.
///
/// Identifiers without a corpus entry are skipped silently: selected ones
/// stay in the resolved set, referenced ones are dropped. Never fails; an
/// empty selection yields the zero-value `Resolution`.
pub fn resolve<S: AsRef<str>>(selected: &[S], corpus: &Corpus) -> Resolution {
    let mut visited: BTreeSet<String> = selected
        .iter()
        .map(|id| id.as_ref().to_string())
        .collect();
    let mut queue: VecDeque<String> = visited.iter().cloned().collect();

    let mut primitive_libs = BTreeSet::new();
    let mut other_packages = BTreeSet::new();
    let mut missing = BTreeSet::new();
    let mut uses_icons = false;
    let mut uses_charts = false;

    while let Some(id) = queue.pop_front() {
        let Some(source) = corpus.get(&id) else {
            missing.insert(id);
            continue;
        };

        if id.contains("chart") || id.starts_with("charts/") {
            uses_charts = true;
        }

        let facts = classify(source);

        primitive_libs.extend(facts.primitive_refs);
        if facts.other_refs.contains(CHART_LIBRARY) {
            uses_charts = true;
        }
        other_packages.extend(
            facts
                .other_refs
                .into_iter()
                .filter(|pkg| pkg != CHART_LIBRARY),
        );
        uses_icons |= facts.icon_lib_used;

        for dep in facts.internal_refs {
            if visited.contains(&dep) {
                continue;
            }
            if corpus.contains(&dep) {
                visited.insert(dep.clone());
                queue.push_back(dep);
            } else {
                missing.insert(dep);
            }
        }
    }

    Resolution {
        resolved: visited.into_iter().collect(),
        primitive_libs: primitive_libs.into_iter().collect(),
        other_packages: other_packages.into_iter().collect(),
        uses_icons,
        uses_charts,
        missing: missing.into_iter().collect(),
    }
}

/// Fixed byte overheads for generated artifacts, used by the estimator.
pub const STYLESHEET_OVERHEAD: usize = 5_000;
pub const BUILD_CONFIG_OVERHEAD: usize = 4_000;
pub const UTILITY_MODULE_OVERHEAD: usize = 500;
pub const MANIFEST_OVERHEAD: usize = 1_000;
pub const SETUP_GUIDE_OVERHEAD: usize = 2_000;
pub const ASSISTANT_GUIDE_OVERHEAD: usize = 15_000;

const GENERATED_OVERHEAD: usize = STYLESHEET_OVERHEAD
    + BUILD_CONFIG_OVERHEAD
    + UTILITY_MODULE_OVERHEAD
    + MANIFEST_OVERHEAD
    + SETUP_GUIDE_OVERHEAD
    + ASSISTANT_GUIDE_OVERHEAD;

/// Pre-export size approximation: resolved source bytes plus fixed overhead
/// for the generated artifacts. Stable for identical inputs, not exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeEstimate {
    pub files: usize,
    pub bytes: usize,
    pub formatted: String,
}

pub fn estimate<S: AsRef<str>>(selected: &[S], corpus: &Corpus) -> SizeEstimate {
    let resolution = resolve(selected, corpus);

    let source_bytes: usize = resolution
        .resolved
        .iter()
        .filter_map(|id| corpus.get(id))
        .map(str::len)
        .sum();
    let bytes = source_bytes + GENERATED_OVERHEAD;

    SizeEstimate {
        files: resolution.resolved.len(),
        bytes,
        formatted: format_size(bytes),
    }
}

/// Human-readable byte count: above one mebibyte switch from one-decimal KB
/// to two-decimal MB.
pub fn format_size(bytes: usize) -> String {
    if bytes > 1024 * 1024 {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
